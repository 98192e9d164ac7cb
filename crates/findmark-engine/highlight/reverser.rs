//! Exact reversal of previous highlight passes
//!
//! Restores a content tree to the shape it would have had if no
//! highlighting had ever occurred. Markers are unwrapped before wrapper
//! spans so a wrapper whose markers were already stripped by a partial
//! prior failure still collapses cleanly; a final normalize merges the
//! resulting text nodes back together.

use super::{MARKER_CLASS, MARKER_TAG, WRAPPER_ATTR};
use findmark_core::{Element, Node};

/// Remove every highlight marker and wrapper under `root`
///
/// Returns the number of markers removed. Idempotent: running it again
/// with no intervening pass removes nothing and changes nothing.
pub fn clear_highlights(root: &mut Element) -> usize {
    let removed = unwrap_matching(root, &is_marker);
    unwrap_matching(root, &is_wrapper);
    root.normalize();
    removed
}

fn is_marker(el: &Element) -> bool {
    el.tag == MARKER_TAG && el.has_class(MARKER_CLASS)
}

fn is_wrapper(el: &Element) -> bool {
    el.has_attr_eq(WRAPPER_ATTR, "true")
}

/// Replace every matching element with a text node of its text content
fn unwrap_matching(el: &mut Element, matches: &impl Fn(&Element) -> bool) -> usize {
    let mut removed = 0;
    for idx in 0..el.children.len() {
        if let Node::Element(child) = &mut el.children[idx] {
            removed += unwrap_matching(child, matches);
            if matches(child) {
                let text = child.text_content();
                el.children[idx] = Node::Text(text);
                removed += 1;
            }
        }
    }
    removed
}
