//! Documents as the surrounding system stores them, and the payload handed to a search index.

use crate::scanner::HeadingPattern;
use crate::toc::{build_heading_forest, build_heading_forest_with, Forest};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A stored document whose content carries the headings.
pub struct Document {
    /// Store-assigned identifier.
    pub id: u64,
    /// URL slug of the document itself.
    pub slug: String,
    /// Document title.
    pub title: String,
    /// Raw text scanned for headings.
    pub content: String,
    /// Revision number, bumped on every edit.
    pub version: u32,
    #[serde(default)]
    /// Free-form labels.
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// What the search index stores for one document revision.
pub struct IndexPayload {
    /// URL slug of the document.
    pub slug: String,
    /// Revision number as text.
    pub version: String,
    /// Document title.
    pub title: String,
    /// Full document text.
    pub content: String,
}

impl Document {
    #[must_use]
    /// Search index key, unique per revision: `{id}.{version}`.
    pub fn index_id(&self) -> String {
        format!("{}.{}", self.id, self.version)
    }

    #[must_use]
    /// Payload forwarded to the search index.
    pub fn index_payload(&self) -> IndexPayload {
        IndexPayload {
            slug: self.slug.clone(),
            version: self.version.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    #[must_use]
    /// Table of contents of the current content, rebuilt on every call.
    pub fn toc(&self) -> Forest {
        build_heading_forest(&self.content)
    }

    #[must_use]
    /// Table of contents of the current content under a custom heading grammar.
    pub fn toc_with(&self, pattern: &HeadingPattern) -> Forest {
        build_heading_forest_with(pattern, &self.content)
    }

    #[must_use]
    /// Tags as a single comma-separated field.
    pub fn raw_tags(&self) -> String {
        self.tags.join(",")
    }

    /// Replace the tags from a comma-separated field, dropping blank entries.
    pub fn set_raw_tags(&mut self, raw: &str) {
        self.tags = raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
