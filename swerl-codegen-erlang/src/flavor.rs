//! Variants of the Erlang client target.

use std::{fmt, path::PathBuf, str::FromStr};

use crate::layout::priv_file_path;

/// One entry of the flavour table.
///
/// Flavours share everything except the few values listed here, so they are
/// data rather than separate descriptor types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Swagger 2.0 descriptions
    Swagger,
    /// OpenAPI 3.x descriptions
    OpenApi3,
}

impl Flavor {
    pub const ALL: &'static [Flavor] = &[Flavor::Swagger, Flavor::OpenApi3];

    /// Target name, as used in `swerl.toml` and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Flavor::Swagger => "erlang-client",
            Flavor::OpenApi3 => "erlang-client-oas3",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Flavor::Swagger => "Generates an Erlang client library (beta).",
            Flavor::OpenApi3 => {
                "Generates an Erlang client library from an OpenAPI 3 description (beta)."
            }
        }
    }

    pub fn template_dir(&self) -> &'static str {
        self.name()
    }

    /// Type table entries that differ from the shared base table.
    pub fn type_overrides(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Flavor::Swagger => &[("ByteArray", "byte"), ("object", "object")],
            Flavor::OpenApi3 => &[("ByteArray", "binary"), ("object", "map")],
        }
    }

    /// Template context key the serialized API description is stored under.
    pub fn schema_key(&self) -> &'static str {
        match self {
            Flavor::Swagger => "swagger-json",
            Flavor::OpenApi3 => "openapi-json",
        }
    }

    /// Supporting files only this flavour emits, as `(template, destination)`.
    pub fn extra_supporting_files(&self) -> Vec<(&'static str, PathBuf)> {
        match self {
            Flavor::Swagger => Vec::new(),
            Flavor::OpenApi3 => vec![("openapi.mustache", priv_file_path("openapi.json"))],
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::ALL
            .iter()
            .find(|flavor| flavor.name() == s)
            .copied()
            .ok_or_else(|| {
                let names: Vec<_> = Flavor::ALL.iter().map(Flavor::name).collect();
                format!("unknown target '{}', expected one of: {}", s, names.join(", "))
            })
    }
}
