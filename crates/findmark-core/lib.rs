//! # findmark-core
//!
//! Lenient HTML-fragment content tree for rendered article content. Parses
//! CMS-grade HTML into an owned `{element, text}` node tree, serializes it
//! back, and exposes read-only traversal for higher layers such as the
//! `findmark-engine` search-and-highlight pass.
//!
//! ## Features
//!
//! - **Lenient parsing**: unclosed elements, stray end tags, and comment or
//!   doctype junk are recovered from, never fatal
//! - **Owned tree**: every node is plain owned data, safe to mutate in place
//! - **Round-trip safe**: re-parsing serialized output yields an identical tree
//! - **Raw-text aware**: `script`/`style` content is never entity-decoded
//!
//! ## Quick Start
//!
//! ```rust
//! use findmark_core::parse_fragment;
//!
//! let fragment = parse_fragment("<p>Hello <strong>World</strong></p>")?;
//! assert_eq!(fragment.text_content(), "Hello World");
//! # Ok::<(), findmark_core::CoreError>(())
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod dom;
pub mod errors;
pub mod parser;
pub mod serialize;
pub mod visit;

pub use dom::{Attr, Element, Fragment, Node};
pub use errors::{CoreError, Result};
pub use parser::{parse_fragment, IssueKind, ParseIssue, MAX_DEPTH};
pub use visit::{walk, VisitAction, Visitor};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
