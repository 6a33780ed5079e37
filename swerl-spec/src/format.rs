//! Textual formats an API description can be written in.

use std::{fmt, path::Path};

use serde::Serialize;

/// The format an API description was expressed in.
///
/// The embedded copy of the description is written back in the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Returns the format name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Yaml => "yaml",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }

    /// Guess the format from the content: JSON documents start with `{`.
    pub fn detect(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('{') => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
