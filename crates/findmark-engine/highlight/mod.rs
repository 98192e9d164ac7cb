//! Highlight pass over a content tree
//!
//! One pass walks the tree in document order, locates every literal
//! occurrence of the settled query inside visible text, and replaces each
//! matching text node with an engine-owned wrapper containing highlight
//! markers. Subtrees that must never be touched (`script`, `style`, code
//! blocks, existing markers) are pruned before descent.
//!
//! Markup produced per matching text node:
//!
//! ```html
//! <span data-highlight-wrapper="true">
//!   plain text <mark class="search-highlight" data-highlight="true">match</mark> more
//! </span>
//! ```

pub mod locator;
pub mod mutator;
pub mod reverser;

pub use locator::{locate, MatchSpan};
pub use reverser::clear_highlights;

use crate::scroll::NodePath;
use findmark_core::{Element, Node};
use regex::Regex;

/// Tag used for highlight markers
pub const MARKER_TAG: &str = "mark";

/// Class identifying engine-produced markers
pub const MARKER_CLASS: &str = "search-highlight";

/// Data attribute set on every marker
pub const MARKER_ATTR: &str = "data-highlight";

/// Data attribute identifying engine-owned wrapper spans
pub const WRAPPER_ATTR: &str = "data-highlight-wrapper";

/// Tags whose subtrees are never searched or mutated
pub const DEFAULT_SKIP_TAGS: [&str; 6] = ["script", "style", "mark", "code", "pre", "noscript"];

/// Result of one highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport {
    /// Number of markers created, recomputed from scratch every pass
    pub matches: usize,
    /// Path to the first marker in document order, if any matched
    pub first_match: Option<NodePath>,
}

/// Apply highlights for `pattern` across `root`'s subtree
///
/// Text nodes without matches are left structurally untouched. The caller
/// is responsible for reversing any previous pass first; applying on top of
/// stale markers would double-wrap (markers themselves are skip zones, so
/// the damage is bounded, but counts would be wrong).
pub fn apply_highlights(root: &mut Element, pattern: &Regex, skip_tags: &[String]) -> PassReport {
    let mut report = PassReport {
        matches: 0,
        first_match: None,
    };
    let mut path = Vec::new();
    highlight_children(root, pattern, skip_tags, &mut path, &mut report);
    report
}

/// Whether a subtree must not be searched or mutated
fn is_skip_zone(el: &Element, skip_tags: &[String]) -> bool {
    skip_tags.iter().any(|t| *t == el.tag) || el.attr(WRAPPER_ATTR).is_some()
}

fn highlight_children(
    el: &mut Element,
    pattern: &Regex,
    skip_tags: &[String],
    path: &mut Vec<usize>,
    report: &mut PassReport,
) {
    // Snapshot the child count up front: replacements are one-for-one and
    // freshly created wrappers are never descended into, so indices stay
    // valid even though the walk mutates the tree it is walking.
    let child_count = el.children.len();
    for idx in 0..child_count {
        if let Node::Element(child) = &mut el.children[idx] {
            if !is_skip_zone(child, skip_tags) {
                path.push(idx);
                highlight_children(child, pattern, skip_tags, path, report);
                path.pop();
            }
            continue;
        }

        let Some(text) = el.children[idx].as_text() else {
            continue;
        };
        let spans = locate(text, pattern);
        if spans.is_empty() {
            continue;
        }

        let wrapper = mutator::wrap_matches(text, &spans);
        if report.first_match.is_none() {
            // Inside the wrapper, the first marker sits at index 0 when the
            // match starts the text, otherwise after one leading text node.
            let marker_idx = usize::from(spans[0].start > 0);
            let mut marker_path = path.clone();
            marker_path.push(idx);
            marker_path.push(marker_idx);
            report.first_match = Some(NodePath::new(marker_path));
        }
        report.matches += spans.len();
        el.children[idx] = Node::Element(wrapper);
    }
}
