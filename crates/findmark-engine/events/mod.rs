//! Event notifications for hosting views
//!
//! The engine reports the lifecycle of each pass over a standard `mpsc`
//! channel so hosts can update match-count labels or trigger viewport
//! work without polling. Dispatch is best-effort: a disconnected receiver
//! is ignored, never an error.

use crate::scroll::NodePath;

/// Events emitted across one search cycle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineEvent {
    /// A raw input value survived the quiet period
    QuerySettled {
        /// The settled, trimmed query text
        query: String,
    },

    /// A previous pass's markers were removed
    HighlightsCleared {
        /// Number of markers removed
        removed: usize,
    },

    /// A highlight pass finished
    PassCompleted {
        /// Query the pass ran for
        query: String,
        /// Markers created by the pass
        matches: usize,
    },

    /// The first match of a pass should be brought into view
    ScrollRequested {
        /// Path to the first marker in document order
        path: NodePath,
    },
}

impl EngineEvent {
    /// Human-readable description for logs and debugging
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::QuerySettled { query } => format!("query settled: \"{query}\""),
            Self::HighlightsCleared { removed } => {
                format!("highlights cleared: {removed} markers removed")
            }
            Self::PassCompleted { query, matches } => {
                format!("pass completed: {matches} matches for \"{query}\"")
            }
            Self::ScrollRequested { path } => {
                format!("scroll requested to {:?}", path.indices())
            }
        }
    }
}
