//! The capability interface a target language implements.

use std::{fmt, path::PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use swerl_core::{PackageName, SchemaType};

use crate::{
    NamingConvention, OperationGroup, Result, SupportingFile, SupportingFileContext, TypeMapping,
};

/// What kind of output a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Client,
    Server,
    Documentation,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Client => write!(f, "client"),
            GeneratorKind::Server => write!(f, "server"),
            GeneratorKind::Documentation => write!(f, "documentation"),
        }
    }
}

/// Trait for target descriptors.
///
/// A descriptor answers every question the [`Engine`](crate::Engine) asks
/// while walking an API description: what type to emit for a schema type,
/// how to name modules, functions and variables, where API modules go and
/// which fixed files every run emits. It is configured once (package name
/// included) and read-only afterwards, so it can be shared across threads.
pub trait TargetDescriptor: Send + Sync {
    /// Target identifier (e.g., "erlang-client")
    fn name(&self) -> &'static str;

    fn kind(&self) -> GeneratorKind;

    /// One-line description shown in target listings
    fn help(&self) -> &'static str;

    /// Directory the target's templates are read from
    fn template_dir(&self) -> &'static str;

    fn package_name(&self) -> &PackageName;

    fn type_mapping(&self) -> &TypeMapping;

    fn naming(&self) -> &NamingConvention;

    /// Template used for each API module
    fn api_template(&self) -> &'static str;

    /// Directory API modules are written to, relative to the output root
    fn api_file_folder(&self) -> PathBuf;

    /// File extension of API modules, without the dot
    fn api_file_extension(&self) -> &'static str;

    /// Fixed files emitted once per run, in output order.
    fn supporting_files(&self) -> &[SupportingFile];

    /// Apply target-specific normalization to a group of operations.
    fn post_process_operations(&self, group: &mut OperationGroup);

    /// Apply target-specific changes to the supporting-file template data.
    fn post_process_supporting_file_data(&self, context: &mut SupportingFileContext<'_>);

    /// Check the descriptor's configuration before any generation work.
    ///
    /// The default checks that every schema type has a type mapping.
    fn validate(&self) -> Result<()> {
        self.type_mapping().ensure_complete(SchemaType::ALL)
    }

    /// Target type for a schema type name.
    fn resolve_type(&self, source_type: &str) -> Result<&str> {
        self.type_mapping().resolve(source_type)
    }

    fn derive_module_name(&self, raw_name: &str) -> String {
        self.naming().module_name(self.package_name(), raw_name)
    }

    fn derive_api_name(&self, raw_name: &str) -> String {
        self.naming().api_name(self.package_name(), raw_name)
    }

    fn derive_operation_id(&self, raw_operation_id: &str) -> String {
        self.naming().operation_id(raw_operation_id)
    }

    fn derive_param_name(&self, raw_name: &str) -> String {
        self.naming().variable_name(raw_name)
    }

    fn escape_reserved_word(&self, raw_name: &str) -> String {
        (self.naming().escape_reserved)(raw_name)
    }

    fn is_reserved_word(&self, name: &str) -> bool {
        self.naming().is_reserved(name)
    }

    /// Output path of the API module for a tag.
    fn api_file_path(&self, tag: &str) -> PathBuf {
        self.api_file_folder().join(format!(
            "{}.{}",
            self.derive_api_name(tag),
            self.api_file_extension()
        ))
    }

    /// Template variables every run starts with.
    fn additional_properties(&self) -> IndexMap<String, Value> {
        let mut properties = IndexMap::new();
        properties.insert(
            "packageName".to_string(),
            Value::from(self.package_name().as_str()),
        );
        properties
    }
}
