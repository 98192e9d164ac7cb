//! Search engine orchestration
//!
//! Ties the debouncer, highlight pass, reverser, and scroll reporting into
//! one state machine. The hosting view owns the content root; the engine
//! borrows it per operation and mutates only inside its own markers, so a
//! torn-down engine leaves nothing behind after one clearing pass.
//!
//! Control flow per cycle: keystroke -> [`SearchEngine::input`] -> quiet
//! period elapses -> [`SearchEngine::tick`] reverses previous highlights,
//! locates and wraps matches, requests a scroll to the first one, and
//! reports the match count.

use super::debounce::{QueryDebouncer, DEFAULT_QUIET_PERIOD};
use super::errors::Result;
use super::query::Query;
use crate::events::EngineEvent;
use crate::highlight::{apply_highlights, clear_highlights, PassReport, DEFAULT_SKIP_TAGS};
use crate::scroll::{NodePath, ScrollSink};
use findmark_core::Fragment;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

/// The content tree a view hands to the engine
pub type ContentRoot = Fragment;

/// Engine lifecycle states
///
/// `Searching` only exists inside a synchronous pass; callers observe
/// `Idle` (no query) or `Highlighted` (pass complete, count available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// No active query, no markers in the tree
    #[default]
    Idle,
    /// A pass is running for a settled query
    Searching,
    /// The most recent pass completed
    Highlighted {
        /// Markers created by that pass
        matches: usize,
    },
}

/// Tunable engine behavior
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Quiet period before a query settles
    pub quiet_period: Duration,
    /// Tags whose subtrees are never searched or mutated
    pub skip_tags: Vec<String>,
    /// Whether to request a scroll to the first match after a pass
    pub scroll_to_first: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            skip_tags: DEFAULT_SKIP_TAGS.iter().map(ToString::to_string).collect(),
            scroll_to_first: true,
        }
    }
}

/// Result of one completed pass, reported to the hosting view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassOutcome {
    /// The settled query the pass ran for
    pub query: Query,
    /// Markers created; zero for an empty query
    pub matches: usize,
    /// Path to the first marker, if any
    pub first_match: Option<NodePath>,
}

/// Debounced search-and-highlight engine over one content root
///
/// Per-view state: create one engine when the view mounts and call
/// [`teardown`](Self::teardown) when it unmounts so no settled query fires
/// against content that no longer exists.
pub struct SearchEngine {
    config: EngineConfig,
    debouncer: QueryDebouncer,
    state: EngineState,
    scroll_sink: Option<Box<dyn ScrollSink>>,
    event_tx: Option<Sender<EngineEvent>>,
}

impl SearchEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let debouncer = QueryDebouncer::new(config.quiet_period);
        Self {
            config,
            debouncer,
            state: EngineState::Idle,
            scroll_sink: None,
            event_tx: None,
        }
    }

    /// Attach an event channel for pass notifications
    #[must_use]
    pub fn with_event_channel(mut self, event_tx: Sender<EngineEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Attach a scroll sink receiving first-match requests
    #[must_use]
    pub fn with_scroll_sink(mut self, sink: Box<dyn ScrollSink>) -> Self {
        self.scroll_sink = Some(sink);
        self
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Match count from the most recent completed pass
    #[must_use]
    pub fn match_count(&self) -> usize {
        match self.state {
            EngineState::Highlighted { matches } => matches,
            EngineState::Idle | EngineState::Searching => 0,
        }
    }

    /// Record a keystroke's raw input value
    ///
    /// Nothing happens until the value survives the quiet period and a
    /// [`tick`](Self::tick) observes it. Clearing the field is a real
    /// input: it settles to the empty query and triggers a clearing pass.
    pub fn input(&mut self, raw: &str, now: Instant) {
        self.debouncer.input(raw, now);
    }

    /// Run at most one pass if a query has settled
    ///
    /// Hosts call this from their timer or frame loop. Returns `Ok(None)`
    /// while input is still settling.
    ///
    /// # Errors
    ///
    /// Propagates pattern-compilation failures, which escaped queries do
    /// not produce in practice.
    pub fn tick(&mut self, now: Instant, root: &mut ContentRoot) -> Result<Option<PassOutcome>> {
        let Some(query) = self.debouncer.poll(now) else {
            return Ok(None);
        };
        self.emit(EngineEvent::QuerySettled {
            query: query.as_str().to_string(),
        });
        self.run_pass(&query, root).map(Some)
    }

    /// Run one synchronous reverse-then-rescan pass for `query`
    ///
    /// Every pass reverses the previous one first, so markers from two
    /// passes never coexist. An empty query is the clearing pass: the
    /// engine returns to `Idle` with a zero count.
    ///
    /// # Errors
    ///
    /// Propagates pattern-compilation failures; the tree is left clean
    /// (reversed, unhighlighted) in that case.
    pub fn run_pass(&mut self, query: &Query, root: &mut ContentRoot) -> Result<PassOutcome> {
        let removed = clear_highlights(root.root_mut());
        if removed > 0 {
            self.emit(EngineEvent::HighlightsCleared { removed });
        }

        if query.is_empty() {
            self.state = EngineState::Idle;
            return Ok(PassOutcome {
                query: query.clone(),
                matches: 0,
                first_match: None,
            });
        }

        self.state = EngineState::Searching;
        let pattern = match query.to_pattern() {
            Ok(pattern) => pattern,
            Err(err) => {
                // Tree is already reversed; fail clean
                self.state = EngineState::Idle;
                return Err(err);
            }
        };
        let PassReport {
            matches,
            first_match,
        } = apply_highlights(root.root_mut(), &pattern, &self.config.skip_tags);
        self.state = EngineState::Highlighted { matches };

        self.emit(EngineEvent::PassCompleted {
            query: query.as_str().to_string(),
            matches,
        });
        if let Some(path) = &first_match {
            self.request_scroll(path);
        }

        Ok(PassOutcome {
            query: query.clone(),
            matches,
            first_match,
        })
    }

    /// Immediately clear the query and remove all highlights
    ///
    /// Mirrors the view's "clear search" button: discards any pending
    /// input and runs the clearing pass without waiting for settling.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the pass API.
    pub fn clear(&mut self, root: &mut ContentRoot) -> Result<PassOutcome> {
        self.debouncer.cancel();
        self.run_pass(&Query::default(), root)
    }

    /// Tear down per-view state when the hosting view unmounts
    ///
    /// Cancels pending input and forgets pass state. The content root is
    /// owned by the view; if it outlives the engine, run
    /// [`clear`](Self::clear) first to remove markers.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
        self.state = EngineState::Idle;
    }

    /// Report the first match for scrolling; sink failures are swallowed
    fn request_scroll(&mut self, path: &NodePath) {
        if !self.config.scroll_to_first {
            return;
        }
        self.emit(EngineEvent::ScrollRequested { path: path.clone() });
        if let Some(sink) = &mut self.scroll_sink {
            let _ = sink.scroll_to(path);
        }
    }

    fn emit(&self, event: EngineEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending", &self.debouncer.is_pending())
            .field("has_scroll_sink", &self.scroll_sink.is_some())
            .field("has_event_channel", &self.event_tx.is_some())
            .finish()
    }
}
