//! Anchor slugs for heading titles.

use crate::scanner::WHITESPACE_CLASS;
use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{WHITESPACE_CLASS}.]+")).unwrap());

#[must_use]
/// Collapse every run of whitespace and `.` in `title` into a single `-`.
///
/// Case, diacritics and all other characters pass through untouched, and sibling headings may
/// share a slug. Pipes are not separators: `a|b` stays `a|b`.
pub fn slugify(title: &str) -> String {
    SEPARATOR_RUN.replace_all(title, "-").into_owned()
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
