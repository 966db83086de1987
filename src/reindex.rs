//! Bulk rebuild of every document's table of contents and search index entry.
//!
//! The store and the search index are collaborators behind traits; this module only drives
//! them. Forest construction is independent per document and runs on the rayon pool. Index
//! writes go out in document order and the first failure ends the run.

use crate::document::{Document, IndexPayload};
use crate::error::{Error, Result};
use crate::scanner::HeadingPattern;
use crate::toc::Forest;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// Source of every stored document.
pub trait DocumentSource {
    /// Load all documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if the backing store cannot be read.
    fn documents(&self) -> Result<Vec<Document>>;
}

/// Full-text search index receiving one payload per document revision.
pub trait SearchIndex {
    /// Store `payload` under `id`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the index rejects the write.
    fn index(&mut self, id: &str, payload: &IndexPayload) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Totals of a completed reindex run.
pub struct ReindexReport {
    /// Documents indexed.
    pub documents: usize,
    /// Headings found across all documents.
    pub headings: usize,
}

#[must_use]
/// Build the forest of every document under `pattern` in parallel, keeping input order.
pub fn build_forests(documents: &[Document], pattern: &HeadingPattern) -> Vec<Forest> {
    documents
        .par_iter()
        .map(|document| document.toc_with(pattern))
        .collect()
}

/// Rebuild every document's forest under `pattern` and push its payload to `index`.
///
/// # Errors
///
/// Returns the source's error if documents cannot be loaded, or [`Error::Index`] for the first
/// document the index rejects. Documents after a failure are not attempted.
pub fn reindex_all<S, I>(
    source: &S,
    index: &mut I,
    pattern: &HeadingPattern,
) -> Result<ReindexReport>
where
    S: DocumentSource + ?Sized,
    I: SearchIndex + ?Sized,
{
    let documents = source.documents()?;
    let forests = build_forests(&documents, pattern);
    info!(documents = documents.len(), "reindexing");

    let mut report = ReindexReport::default();
    for (document, forest) in documents.iter().zip(&forests) {
        let id = document.index_id();
        index
            .index(&id, &document.index_payload())
            .map_err(|e| Error::Index {
                id: id.clone(),
                reason: e.to_string(),
            })?;
        debug!(id = %id, headings = forest.len(), "indexed document");
        report.documents += 1;
        report.headings += forest.len();
    }

    info!(
        documents = report.documents,
        headings = report.headings,
        "reindex complete"
    );
    Ok(report)
}

#[derive(Serialize)]
struct IndexLine<'a> {
    id: &'a str,
    document: &'a IndexPayload,
}

/// A [`SearchIndex`] that writes each entry as one JSON object per line.
pub struct JsonLinesIndex<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesIndex<W> {
    #[must_use]
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SearchIndex for JsonLinesIndex<W> {
    fn index(&mut self, id: &str, payload: &IndexPayload) -> Result<()> {
        serde_json::to_writer(
            &mut self.writer,
            &IndexLine {
                id,
                document: payload,
            },
        )?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/reindex.rs"]
mod tests;
