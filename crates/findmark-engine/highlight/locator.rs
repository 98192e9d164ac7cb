//! Match location within a single text node

use regex::Regex;

/// A matched substring within one text node, in byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSpan {
    /// Byte offset where the match starts
    pub start: usize,
    /// Byte offset one past the end of the match
    pub end: usize,
}

/// Find every non-overlapping occurrence of `pattern` in `text`
///
/// Spans come back ordered left to right. The pattern is expected to be an
/// escaped, case-insensitive literal built by
/// [`Query::to_pattern`](crate::core::Query::to_pattern); `find_iter`
/// guarantees non-overlap.
#[must_use]
pub fn locate(text: &str, pattern: &Regex) -> Vec<MatchSpan> {
    pattern
        .find_iter(text)
        .map(|m| MatchSpan {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
