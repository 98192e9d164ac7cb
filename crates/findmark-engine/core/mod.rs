//! Core engine types: errors, queries, debouncing, and orchestration

pub mod debounce;
pub mod engine;
pub mod errors;
pub mod query;

pub use debounce::{QueryDebouncer, DEFAULT_QUIET_PERIOD};
pub use engine::{ContentRoot, EngineConfig, EngineState, PassOutcome, SearchEngine};
pub use errors::{EngineError, Result};
pub use query::Query;
