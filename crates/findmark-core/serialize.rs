//! Serialization of content trees back to HTML
//!
//! Output is tree-faithful rather than byte-faithful: re-parsing serialized
//! output yields an identical tree, but incidental source quirks (attribute
//! quoting style, entity spellings) are normalized.

use crate::dom::tags::{is_raw_text_tag, is_void_tag};
use crate::dom::{Element, Node};

/// Serialize a single node and its subtree into `out`
pub fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => serialize_element(el, out),
        Node::Text(text) => escape_text(text, out),
        Node::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
    }
}

fn serialize_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for attr in &el.attrs {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_attr(&attr.value, out);
        out.push('"');
    }
    out.push('>');

    if is_void_tag(&el.tag) {
        return;
    }

    if is_raw_text_tag(&el.tag) {
        // Raw-text content is stored undecoded and must not be re-escaped
        for child in &el.children {
            if let Node::Text(text) = child {
                out.push_str(text);
            }
        }
    } else {
        for child in &el.children {
            serialize_node(child, out);
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
