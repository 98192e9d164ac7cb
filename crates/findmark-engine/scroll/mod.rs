//! Scroll-to-match notification
//!
//! The engine does not own a viewport; it reports where the first match
//! lives as a child-index path and lets the hosting view bring it into
//! view. Scrolling is a UX nicety: sink failures are swallowed by the
//! engine and never surface as errors.

use findmark_core::{Element, Node};
use thiserror::Error;

/// Child-index path from the content root to a node, document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Create a path from child indices, root outward
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The child indices, outermost first
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Resolve the path against a root element
    ///
    /// Returns `None` when any index is out of bounds or crosses a
    /// non-element node, e.g. after the tree was mutated under the path.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Element) -> Option<&'a Node> {
        let (&last, inner) = self.0.split_last()?;
        let mut current = root;
        for &idx in inner {
            current = current.children.get(idx)?.as_element()?;
        }
        current.children.get(last)
    }
}

/// Errors a scroll sink may report
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrollError {
    /// The target node is no longer attached where the path points
    #[error("scroll target is not attached at {indices:?}")]
    Detached {
        /// The path that failed to resolve
        indices: Vec<usize>,
    },

    /// The host viewport refused or failed the scroll
    #[error("viewport rejected scroll request: {message}")]
    Viewport {
        /// Host-provided failure detail
        message: String,
    },
}

/// Result type for scroll sink operations
pub type ScrollResult = core::result::Result<(), ScrollError>;

/// Receiver for scroll-to-match requests
pub trait ScrollSink {
    /// Bring the node at `path` into view, ideally centered and smooth
    ///
    /// # Errors
    ///
    /// Implementations may fail when the target is detached or the host
    /// viewport rejects the request; the engine ignores such failures.
    fn scroll_to(&mut self, path: &NodePath) -> ScrollResult;
}

/// A sink that accepts and discards every scroll request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollSink;

impl ScrollSink for NoopScrollSink {
    fn scroll_to(&mut self, _path: &NodePath) -> ScrollResult {
        Ok(())
    }
}
