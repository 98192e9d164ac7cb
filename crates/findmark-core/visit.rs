//! Read-only traversal over content trees
//!
//! Depth-first, left-to-right, matching document order. Visitors can prune
//! subtrees they do not care about, which is how the highlight engine stays
//! out of `script`, `style`, and code blocks.

use crate::dom::{Element, Node};

/// What to do after visiting an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    /// Continue into the element's children
    Descend,
    /// Skip the element's entire subtree
    SkipChildren,
}

/// Callbacks for a depth-first walk over a content tree
pub trait Visitor {
    /// Called for every element before its children
    fn visit_element(&mut self, _element: &Element) -> VisitAction {
        VisitAction::Descend
    }

    /// Called for every text node
    fn visit_text(&mut self, _text: &str) {}
}

/// Walk `element`'s subtree in document order
///
/// The root element itself is not reported, only its descendants; this
/// matches how the synthetic fragment root is used as a container.
pub fn walk<V: Visitor>(element: &Element, visitor: &mut V) {
    for child in &element.children {
        walk_node(child, visitor);
    }
}

fn walk_node<V: Visitor>(node: &Node, visitor: &mut V) {
    match node {
        Node::Element(el) => {
            if visitor.visit_element(el) == VisitAction::Descend {
                walk(el, visitor);
            }
        }
        Node::Text(text) => visitor.visit_text(text),
        Node::Comment(_) => {}
    }
}
