//! Settled search queries
//!
//! A [`Query`] is the trimmed, case-preserving string the rest of the
//! engine operates on. Matching is always literal: the query is escaped
//! before pattern compilation so metacharacters like `$`, `(`, or `[`
//! match themselves.

use super::errors::{EngineError, Result};
use regex::{Regex, RegexBuilder};

/// A user query, trimmed of surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query(String);

impl Query {
    /// Create a query from raw input, trimming surrounding whitespace
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The trimmed query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the query is empty after trimming
    ///
    /// An empty query means "clear highlights", not "match everything".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compile the query into a case-insensitive literal pattern
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] if the regex engine rejects
    /// the escaped literal, which no user input can normally cause.
    pub fn to_pattern(&self) -> Result<Regex> {
        RegexBuilder::new(&regex::escape(&self.0))
            .case_insensitive(true)
            .build()
            .map_err(|e| EngineError::InvalidPattern {
                message: e.to_string(),
            })
    }
}

impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Query::new("  cat  ").as_str(), "cat");
        assert!(Query::new("   ").is_empty());
    }

    #[test]
    fn pattern_is_case_insensitive() {
        let pattern = Query::new("hello").to_pattern().unwrap();
        assert!(pattern.is_match("say Hello there"));
    }

    #[test]
    fn metacharacters_match_literally() {
        let pattern = Query::new("$5 (special)").to_pattern().unwrap();
        assert!(pattern.is_match("Price: $5 (special) today"));
        assert!(!pattern.is_match("Price: 55 special"));
    }

    #[test]
    fn inner_whitespace_preserved() {
        assert_eq!(Query::new(" two words ").as_str(), "two words");
    }
}
