//! Discovery of documents on disk.
//!
//! Paths given on the command line are either files, taken as they are, or directories, walked
//! recursively for files with a matching extension.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::reindex::DocumentSource;
use crate::scanner::HeadingPattern;
use crate::slug::slugify;
use crate::toc::build_heading_forest_with;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collect document files from `paths`, sorted and without duplicates.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(&path, extensions, &mut found)?;
        } else if path.is_file() {
            found.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file or directory", path.display()),
            ));
        }
    }
    found.sort();
    found.dedup();
    Ok(found)
}

fn walk_dir(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Files on disk served as documents, numbered by position starting at 1.
pub struct FileSource<'a> {
    files: &'a [PathBuf],
    pattern: &'a HeadingPattern,
}

impl<'a> FileSource<'a> {
    #[must_use]
    /// Serve `files`, titling each by its first top-level heading under `pattern`.
    pub fn new(files: &'a [PathBuf], pattern: &'a HeadingPattern) -> Self {
        Self { files, pattern }
    }

    fn load(&self, position: usize, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Source(format!("{}: {e}", path.display())))?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let forest = build_heading_forest_with(self.pattern, &content);
        let title = forest
            .roots()
            .first()
            .map_or_else(|| stem.clone(), |&id| forest.node(id).title().to_string());

        Ok(Document {
            id: position as u64 + 1,
            slug: slugify(&stem),
            title,
            content,
            version: 1,
            tags: Vec::new(),
        })
    }
}

impl DocumentSource for FileSource<'_> {
    fn documents(&self) -> Result<Vec<Document>> {
        self.files
            .iter()
            .enumerate()
            .map(|(position, path)| self.load(position, path))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
