//! Error types for the findmark-core crate
//!
//! Parsing is deliberately lenient: recoverable problems (stray end tags,
//! unterminated raw text) are recorded as [`crate::parser::ParseIssue`]s on
//! the fragment instead of failing the parse. `CoreError` is reserved for
//! conditions where no sensible tree can be produced.

use thiserror::Error;

/// Main error type for findmark-core operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Element nesting exceeded the hard recursion limit
    #[error("element nesting too deep: {depth} levels (limit {limit})")]
    NestingTooDeep {
        /// Depth reached when the limit tripped
        depth: usize,
        /// Configured nesting limit
        limit: usize,
    },
}

/// Result type alias for findmark-core operations
pub type Result<T> = core::result::Result<T, CoreError>;
