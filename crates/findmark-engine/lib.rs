//! # findmark-engine
//!
//! Debounced search-and-highlight engine for rendered article content,
//! built on the owned content trees of `findmark-core`.
//!
//! The engine implements the full in-article search cycle: keystrokes are
//! buffered until the query settles, any previous highlights are reversed,
//! the content tree is walked in document order, matched text is wrapped in
//! engine-owned markers, the first match is reported for scrolling, and the
//! match count is handed back to the hosting view.
//!
//! ## Features
//!
//! - **Debounced input**: at most one pass per quiet period, injected clock
//! - **Exact reversal**: reversing highlights restores the original tree
//! - **Literal matching**: queries are escaped, never interpreted as patterns
//! - **Skip zones**: `script`, `style`, `code`, `pre`, and existing markers
//!   are never touched
//!
//! ## Quick Start
//!
//! ```rust
//! use findmark_core::parse_fragment;
//! use findmark_engine::{Query, SearchEngine};
//!
//! let mut root = parse_fragment("<p>the cat sat on the mat</p>")?;
//! let mut engine = SearchEngine::new();
//!
//! let outcome = engine.run_pass(&Query::new("at"), &mut root)?;
//! assert_eq!(outcome.matches, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod events;
pub mod highlight;
pub mod scroll;

// Re-export core content-tree types as first-class citizens
pub use findmark_core::{parse_fragment, Element, Fragment, Node};

// Public API exports
pub use crate::core::{
    ContentRoot, EngineConfig, EngineError, EngineState, PassOutcome, Query, QueryDebouncer,
    Result, SearchEngine, DEFAULT_QUIET_PERIOD,
};
pub use events::EngineEvent;
pub use highlight::{
    apply_highlights, clear_highlights, locate, MatchSpan, PassReport, DEFAULT_SKIP_TAGS,
    MARKER_ATTR, MARKER_CLASS, MARKER_TAG, WRAPPER_ATTR,
};
pub use scroll::{NodePath, NoopScrollSink, ScrollError, ScrollResult, ScrollSink};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
