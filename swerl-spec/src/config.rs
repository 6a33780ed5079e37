//! The `swerl.toml` configuration file.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;
use swerl_core::PackageName;

use crate::{Error, Result};

/// Target used when the configuration doesn't name one.
pub const DEFAULT_TARGET: &str = "erlang-client";

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "swerl.toml";

/// Generation settings, fixed before generation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Target descriptor name (e.g. "erlang-client")
    pub target: String,
    /// Prefix of every generated module
    pub package_name: PackageName,
    /// API description to generate from
    pub input: Option<PathBuf>,
    /// Extra values made available to templates
    pub properties: IndexMap<String, toml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    generator: RawGenerator,
    #[serde(default)]
    properties: IndexMap<String, toml::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGenerator {
    target: Option<String>,
    package_name: Option<String>,
    input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            package_name: PackageName::default(),
            input: None,
            properties: IndexMap::new(),
        }
    }
}

impl Config {
    /// Parse a configuration, using `filename` for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))?;

        let package_name = match raw.generator.package_name {
            Some(name) => PackageName::new(&name).map_err(|e| {
                Error::invalid_package_name(
                    &name,
                    e.reason,
                    content,
                    filename,
                    find_value_span(content, &name),
                )
            })?,
            None => PackageName::default(),
        };

        Ok(Self {
            target: raw
                .generator
                .target
                .unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            package_name,
            input: raw.generator.input,
            properties: raw.properties,
        })
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILENAME)
    }
}

/// Find the span of a quoted string value in the TOML source
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Represents a swerl.toml file with both raw content and parsed configuration.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a swerl.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the file, keeping the parsed configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// The configured input, resolved relative to the config file's directory.
    pub fn input_path(&self) -> Option<PathBuf> {
        let input = self.config.input.as_ref()?;
        if input.is_absolute() {
            return Some(input.clone());
        }
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(input))
    }
}
