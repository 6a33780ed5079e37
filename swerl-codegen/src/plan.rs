use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use swerl_core::PackageName;

use crate::{GeneratorKind, OperationGroup, SupportingFile};

/// Everything a template renderer needs to produce the output tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPlan {
    pub target: String,
    pub kind: GeneratorKind,
    pub package_name: PackageName,
    pub template_dir: String,
    /// One entry per API module
    pub api_files: Vec<ApiFile>,
    pub supporting_files: Vec<SupportingFile>,
    /// Template variables for supporting files
    pub context: IndexMap<String, Value>,
}

/// An API module to render from a group of operations.
#[derive(Debug, Clone, Serialize)]
pub struct ApiFile {
    pub template: String,
    pub path: PathBuf,
    pub group: OperationGroup,
}

impl GenerationPlan {
    /// Total number of operations across all API modules.
    pub fn operation_count(&self) -> usize {
        self.api_files
            .iter()
            .map(|file| file.group.operations.len())
            .sum()
    }

    /// All output paths, API modules first.
    pub fn output_paths(&self) -> Vec<&PathBuf> {
        self.api_files
            .iter()
            .map(|file| &file.path)
            .chain(self.supporting_files.iter().map(|file| &file.destination))
            .collect()
    }
}
