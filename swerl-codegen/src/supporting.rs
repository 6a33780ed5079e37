use std::path::PathBuf;

use serde::Serialize;
use swerl_core::Overwrite;

/// A fixed file emitted once per generation run, independent of the
/// operations in the API description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportingFile {
    /// Template the file is rendered from
    pub template: String,
    /// Output path relative to the output root
    pub destination: PathBuf,
    pub overwrite: Overwrite,
}

impl SupportingFile {
    /// A generated file, replaced on every run.
    pub fn new(template: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            destination: destination.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// A file written only when it doesn't exist yet (e.g. a README).
    pub fn optional(template: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            ..Self::new(template, destination)
        }
    }
}
