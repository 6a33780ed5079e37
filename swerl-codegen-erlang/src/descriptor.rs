//! The Erlang client target descriptor.

use std::{path::PathBuf, sync::LazyLock};

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use swerl_codegen::{
    Error, GeneratorKind, NamingConvention, OperationGroup, Result, SupportingFile,
    SupportingFileContext, TargetDescriptor, TypeMapping,
};
use swerl_core::PackageName;

use crate::{
    ERLANG_NAMING, Flavor,
    layout::{self, SRC_DIR, package_module_path, source_file_path},
    type_mapper::erlang_type_mapping,
};

/// Version written into the generated application resource file.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// `{param}` placeholders in a path template.
static PATH_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("Invalid path parameter regex"));

/// Describes how to generate an Erlang client.
///
/// Built once per run for a flavour and package name; everything it derives
/// (type table, supporting files) is fixed at construction.
#[derive(Debug, Clone)]
pub struct ErlangDescriptor {
    flavor: Flavor,
    package_name: PackageName,
    type_mapping: TypeMapping,
    supporting_files: Vec<SupportingFile>,
}

impl ErlangDescriptor {
    /// Create a descriptor for `flavor` generating package `package_name`.
    ///
    /// # Errors
    ///
    /// Fails when the package name is an Erlang reserved word, since the
    /// types module `src/<package>.erl` would need a quoted atom.
    pub fn new(flavor: Flavor, package_name: PackageName) -> Result<Self> {
        if ERLANG_NAMING.is_reserved(package_name.as_str()) {
            return Err(Error::ReservedPackageName {
                name: package_name.to_string(),
                target: flavor.name(),
            });
        }

        let type_mapping = erlang_type_mapping(flavor)?;
        let supporting_files = supporting_files(flavor, &package_name);

        tracing::debug!(
            generator = flavor.name(),
            package = %package_name,
            files = supporting_files.len(),
            "configured erlang descriptor"
        );

        Ok(Self {
            flavor,
            package_name,
            type_mapping,
            supporting_files,
        })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

fn supporting_files(flavor: Flavor, package: &PackageName) -> Vec<SupportingFile> {
    let mut files = vec![
        SupportingFile::new("rebar.config.mustache", "rebar.config"),
        SupportingFile::new(
            "app.src.mustache",
            source_file_path(&format!("{}.app.src", package)),
        ),
    ];

    for (template, suffix) in [
        ("params.mustache", "params"),
        ("procession.mustache", "procession"),
        ("utils.mustache", "utils"),
        ("types.mustache", ""),
        ("validation.mustache", "validation"),
        ("param_validator.mustache", "param_validator"),
        ("schema_validator.mustache", "schema_validator"),
        ("schema.mustache", "schema"),
    ] {
        files.push(SupportingFile::new(
            template,
            package_module_path(package, suffix),
        ));
    }

    files.extend(
        flavor
            .extra_supporting_files()
            .into_iter()
            .map(|(template, destination)| SupportingFile::new(template, destination)),
    );

    files.push(SupportingFile::optional("README.mustache", "README.md"));
    files
}

/// Rewrite `{param}` placeholders to the `:param` form the client expects.
fn rewrite_path_params(path: &str) -> String {
    PATH_PARAM_RE.replace_all(path, ":$1").into_owned()
}

impl TargetDescriptor for ErlangDescriptor {
    fn name(&self) -> &'static str {
        self.flavor.name()
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Client
    }

    fn help(&self) -> &'static str {
        self.flavor.help()
    }

    fn template_dir(&self) -> &'static str {
        self.flavor.template_dir()
    }

    fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    fn type_mapping(&self) -> &TypeMapping {
        &self.type_mapping
    }

    fn naming(&self) -> &NamingConvention {
        &ERLANG_NAMING
    }

    fn api_template(&self) -> &'static str {
        "api.mustache"
    }

    fn api_file_folder(&self) -> PathBuf {
        PathBuf::from(SRC_DIR)
    }

    fn api_file_extension(&self) -> &'static str {
        layout::FILE_EXTENSION
    }

    fn supporting_files(&self) -> &[SupportingFile] {
        &self.supporting_files
    }

    fn post_process_operations(&self, group: &mut OperationGroup) {
        for op in &mut group.operations {
            op.http_method = op.http_method.to_lowercase();
            op.path = rewrite_path_params(&op.path);
        }
    }

    fn post_process_supporting_file_data(&self, context: &mut SupportingFileContext<'_>) {
        match context.document.to_text() {
            Ok(text) => context.insert(self.flavor.schema_key(), text),
            Err(err) => tracing::error!(
                error = %err,
                key = self.flavor.schema_key(),
                "failed to serialize API description"
            ),
        }
    }

    fn additional_properties(&self) -> IndexMap<String, Value> {
        let mut properties = IndexMap::new();
        properties.insert("apiVersion".to_string(), Value::from(DEFAULT_API_VERSION));
        properties.insert("apiPath".to_string(), Value::from(SRC_DIR));
        properties.insert(
            "packageName".to_string(),
            Value::from(self.package_name.as_str()),
        );
        properties
    }
}
