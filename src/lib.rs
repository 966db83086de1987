//! tocsmith: heading hierarchy extraction for marker-style documents.
//!
//! A document is scanned line by line for headings (`#` to `######` followed by a title), each
//! heading is given a slug, and the headings are assembled into a forest whose display depth
//! starts at 2 for the roots and grows by one per level of nesting. See
//! [`build_heading_forest`] for the entry point.

pub mod app_state;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod reindex;
pub mod render;
pub mod scanner;
pub mod slug;
pub mod toc;
pub mod ui;

pub use error::{Error, Result};
pub use toc::{build_heading_forest, Forest, NodeId, TocNode};
