//! Error types for the fallible edges of tocsmith.
//!
//! Building a forest never fails. Errors only come from the surroundings: reading files,
//! parsing configuration, choosing a marker, and the collaborators a reindex talks to.

use thiserror::Error;

/// Result type alias for tocsmith operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
/// Errors raised outside the heading-forest core.
pub enum Error {
    #[error("IO error: {0}")]
    /// Reading documents or writing output failed.
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    /// Serialising a forest or index payload failed.
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    /// `tocsmith.toml` exists but could not be parsed.
    Config(String),

    #[error("Invalid heading marker {0:?}: expected a single non-whitespace character")]
    /// The configured marker is empty, longer than one character, or whitespace.
    InvalidMarker(String),

    #[error("Invalid heading pattern: {0}")]
    /// The heading pattern for a marker failed to compile.
    Pattern(#[from] regex::Error),

    #[error("Document source error: {0}")]
    /// A [`DocumentSource`](crate::reindex::DocumentSource) could not produce its documents,
    /// e.g. a discovered file that can no longer be read.
    Source(String),

    #[error("Failed to index document {id}: {reason}")]
    /// A search index write was rejected; the reindex run stops here.
    Index {
        /// Index id (`{id}.{version}`) of the document that failed.
        id: String,
        /// Reason reported by the index.
        reason: String,
    },
}
