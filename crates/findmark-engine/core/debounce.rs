//! Debounced query settling
//!
//! Buffers rapid keystrokes so the rest of the engine only ever sees
//! fully-settled queries: a raw value is emitted once it has gone a quiet
//! period without being superseded. Time is injected by the caller, so the
//! controller is deterministic under test and host-agnostic in production.

use super::query::Query;
use std::time::{Duration, Instant};

/// Default quiet period before a query is considered settled
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Collapses a stream of raw input values into settled queries
///
/// Every [`input`](QueryDebouncer::input) call supersedes the previous
/// pending value and restarts the timer. [`poll`](QueryDebouncer::poll)
/// emits the pending value at most once, after the deadline passes.
/// Clearing the field settles to the empty query like any other value; the
/// engine treats that emission as "remove all highlights".
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    quiet: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl QueryDebouncer {
    /// Create a debouncer with a custom quiet period
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            deadline: None,
        }
    }

    /// Record a raw input value, restarting the quiet-period timer
    pub fn input(&mut self, raw: &str, now: Instant) {
        self.pending = Some(raw.to_string());
        self.deadline = Some(now + self.quiet);
    }

    /// Emit the settled query if the quiet period has elapsed
    ///
    /// Returns `None` while input is still settling or when nothing is
    /// pending. Each armed value is emitted exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<Query> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take().map(|raw| Query::new(&raw))
    }

    /// Whether a value is waiting to settle
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending value and disarm the timer
    ///
    /// Used on view teardown so no settled query fires against a content
    /// root that no longer exists.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
