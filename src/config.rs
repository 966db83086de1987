//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a tocsmith.toml, and if present we load settings from there.
//! This provides the heading marker, file extension and indentation preferences.

use crate::error::{Error, Result};
use crate::scanner::HeadingPattern;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tocsmith.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from tocsmith.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "#".to_string())]
    /// Character repeated to mark a heading.
    pub marker: String,
    #[facet(default = 2)]
    /// Spaces per nesting level in Markdown list output.
    pub indent_width: usize,
}

impl Config {
    /// Load configuration from tocsmith.toml if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Compile the heading grammar for the configured marker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarker`] unless the marker is exactly one non-whitespace character.
    pub fn heading_pattern(&self) -> Result<HeadingPattern> {
        let mut chars = self.marker.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => HeadingPattern::new(marker),
            _ => Err(Error::InvalidMarker(self.marker.clone())),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
