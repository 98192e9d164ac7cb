//! Owned content tree for rendered article fragments
//!
//! The tree is deliberately plain: every node owns its data, so callers can
//! splice, replace, and merge children without lifetime gymnastics. This is
//! what makes the highlight engine's replace-then-reverse cycle safe.

pub mod tags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parser::ParseIssue;

/// A single attribute on an element, order-preserving
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attr {
    /// Attribute name, lowercased by the parser
    pub name: String,
    /// Attribute value with character references decoded
    pub value: String,
}

/// A node in the content tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// An element with tag, attributes, and children
    Element(Element),
    /// A run of character data, stored decoded
    Text(String),
    /// An HTML comment, preserved for round-trip fidelity
    Comment(String),
}

impl Node {
    /// Borrow this node as an element, if it is one
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutably borrow this node as an element, if it is one
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Borrow this node as text, if it is a text node
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Concatenated character data of this node and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(el) => el.collect_text(out),
            Self::Text(text) => out.push_str(text),
            Self::Comment(_) => {}
        }
    }
}

/// An element node: lowercase tag, ordered attributes, owned children
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Tag name, always lowercase
    pub tag: String,
    /// Attributes in source order
    pub attrs: Vec<Attr>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Look up an attribute value by name
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any existing value for the same name
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.attrs.push(Attr { name, value });
        }
    }

    /// Whether an attribute exists with exactly the given value
    #[must_use]
    pub fn has_attr_eq(&self, name: &str, value: &str) -> bool {
        self.attr(name) == Some(value)
    }

    /// Whether a space-separated class list contains the given class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Concatenated character data of all descendants, document order
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Merge adjacent text children and drop empty text nodes, recursively
    ///
    /// Mirrors DOM `Node.normalize()`: after this, no element has two
    /// consecutive `Text` children and no empty `Text` child.
    pub fn normalize(&mut self) {
        let old = core::mem::take(&mut self.children);
        for mut child in old {
            if let Node::Element(el) = &mut child {
                el.normalize();
            }
            match child {
                Node::Text(text) if text.is_empty() => {}
                Node::Text(text) => {
                    if let Some(Node::Text(prev)) = self.children.last_mut() {
                        prev.push_str(&text);
                    } else {
                        self.children.push(Node::Text(text));
                    }
                }
                other => self.children.push(other),
            }
        }
    }
}

/// A parsed content root: a synthetic container holding the fragment forest
///
/// The fragment never corresponds to a real element in the source; its
/// children are the top-level parsed nodes. Recoverable parse problems are
/// carried alongside the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    root: Element,
    issues: Vec<ParseIssue>,
}

impl Fragment {
    pub(crate) fn new(root: Element, issues: Vec<ParseIssue>) -> Self {
        Self { root, issues }
    }

    /// The synthetic root element holding the parsed forest
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the synthetic root element
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Recoverable problems encountered while parsing
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Concatenated character data of the whole fragment
    #[must_use]
    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    /// Serialize the fragment back to HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.root.children {
            crate::serialize::serialize_node(child, &mut out);
        }
        out
    }
}
