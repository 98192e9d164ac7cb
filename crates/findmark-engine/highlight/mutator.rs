//! Safe replacement of matched text nodes with highlighted markup
//!
//! The mutator turns one text node into a wrapper element whose children
//! alternate plain text and markers. Concatenating the wrapper's text
//! content always reproduces the original text exactly: no characters are
//! gained or lost and whitespace is never normalized.

use super::locator::MatchSpan;
use super::{MARKER_ATTR, MARKER_CLASS, MARKER_TAG, WRAPPER_ATTR};
use findmark_core::{Element, Node};

/// Build the engine-owned wrapper replacing a matched text node
///
/// `spans` must be ordered and non-overlapping, as produced by
/// [`locate`](super::locate).
#[must_use]
pub(crate) fn wrap_matches(text: &str, spans: &[MatchSpan]) -> Element {
    let mut wrapper = Element::new("span");
    wrapper.set_attr(WRAPPER_ATTR, "true");

    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            wrapper
                .children
                .push(Node::Text(text[cursor..span.start].to_string()));
        }
        wrapper.children.push(Node::Element(marker(
            &text[span.start..span.end],
        )));
        cursor = span.end;
    }
    if cursor < text.len() {
        wrapper.children.push(Node::Text(text[cursor..].to_string()));
    }
    wrapper
}

/// Build a single highlight marker around matched text, casing preserved
fn marker(matched: &str) -> Element {
    let mut mark = Element::new(MARKER_TAG);
    mark.set_attr("class", MARKER_CLASS);
    mark.set_attr(MARKER_ATTR, "true");
    mark.children.push(Node::Text(matched.to_string()));
    mark
}
