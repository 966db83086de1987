//! Line-local recognition of heading lines.
//!
//! A heading line is up to two whitespace characters of indent, a run of one to six marker
//! characters, one whitespace separator, then the title. Nothing about nesting is tracked here:
//! each line is judged on its own, and lines that do not match are skipped.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Whitespace as understood by the heading grammar: ASCII tab, newline, form feed, CR and space.
pub(crate) const WHITESPACE_CLASS: &str = r"\t\n\x0C\r ";

static MARKDOWN: LazyLock<HeadingPattern> = LazyLock::new(|| {
    HeadingPattern::new('#').expect("the '#' heading pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A recognised heading line, borrowed from the scanned text.
pub struct HeadingToken<'a> {
    /// Number of marker characters, in `1..=6`.
    pub depth: usize,
    /// Everything after the single separator, up to the end of the line.
    pub title: &'a str,
}

#[derive(Debug, Clone)]
/// Compiled heading grammar for one marker character.
pub struct HeadingPattern {
    marker: char,
    regex: Regex,
}

impl HeadingPattern {
    /// Compile the heading grammar for `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarker`] for whitespace markers, which would make the indent and
    /// the marker run ambiguous.
    pub fn new(marker: char) -> Result<Self> {
        if marker.is_whitespace() {
            return Err(Error::InvalidMarker(marker.to_string()));
        }
        let marker_re = regex::escape(&marker.to_string());
        let regex = Regex::new(&format!(
            "^[{WHITESPACE_CLASS}]{{0,2}}((?:{marker_re}){{1,6}})[{WHITESPACE_CLASS}](.*)$"
        ))?;
        Ok(Self { marker, regex })
    }

    #[must_use]
    /// The `#` grammar used for Markdown-style documents.
    pub fn markdown() -> &'static Self {
        &MARKDOWN
    }

    #[must_use]
    /// The marker character this pattern recognises.
    pub fn marker(&self) -> char {
        self.marker
    }

    #[must_use]
    /// Recognise a single line, which must not contain `\n`.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<HeadingToken<'a>> {
        let caps = self.regex.captures(line)?;
        let depth = caps.get(1)?.as_str().chars().count();
        let title = caps.get(2).map_or("", |m| m.as_str());
        Some(HeadingToken { depth, title })
    }

    #[must_use]
    /// Lazily scan `text` for heading lines in document order.
    pub fn scan<'a>(&'a self, text: &'a str) -> HeadingScanner<'a> {
        HeadingScanner {
            lines: text.split('\n'),
            pattern: self,
        }
    }
}

#[derive(Clone)]
/// Iterator over the heading lines of a document.
///
/// Cloning forks the cursor at its current line. Restarting is another call to
/// [`HeadingPattern::scan`], which holds no state between scans.
pub struct HeadingScanner<'a> {
    lines: std::str::Split<'a, char>,
    pattern: &'a HeadingPattern,
}

impl<'a> Iterator for HeadingScanner<'a> {
    type Item = HeadingToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.pattern;
        self.lines.by_ref().find_map(|line| pattern.match_line(line))
    }
}

#[must_use]
/// Scan `text` with the Markdown `#` grammar.
pub fn scan(text: &str) -> HeadingScanner<'_> {
    HeadingPattern::markdown().scan(text)
}

#[cfg(test)]
#[path = "tests/scanner.rs"]
mod tests;
