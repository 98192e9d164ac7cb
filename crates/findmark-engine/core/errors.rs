//! Error types for the findmark-engine crate
//!
//! Wraps `CoreError` from findmark-core and adds engine-specific cases.
//! Nothing here is fatal to a hosting view: a failed pass leaves the
//! content tree un-highlighted, never corrupted.

use findmark_core::CoreError;
use thiserror::Error;

/// Main error type for findmark-engine operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Errors from findmark-core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Search pattern failed to compile
    ///
    /// Queries are escaped before compilation, so this indicates a bug or a
    /// pathological resource limit rather than bad user input.
    #[error("search pattern failed to compile: {message}")]
    InvalidPattern {
        /// Compiler message for debugging
        message: String,
    },
}

/// Result type alias for findmark-engine operations
pub type Result<T> = core::result::Result<T, EngineError>;
