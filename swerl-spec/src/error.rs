use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for swerl-spec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(swerl::config_parse_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse API description")]
    #[diagnostic(code(swerl::json_parse_error))]
    JsonParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse API description")]
    #[diagnostic(code(swerl::yaml_parse_error))]
    YamlParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid API description in {filename}: {message}")]
    #[diagnostic(
        code(swerl::invalid_description),
        help("the document must be a Swagger 2.0 or OpenAPI 3.x object")
    )]
    InvalidDescription { filename: String, message: String },

    #[error("failed to serialize API description as {format}")]
    #[diagnostic(code(swerl::serialize_error))]
    Serialize { format: String, message: String },

    #[error("invalid package name '{name}'")]
    #[diagnostic(
        code(swerl::invalid_package_name),
        help("{reason}. The package name prefixes every generated module, e.g. 'petstore'")
    )]
    InvalidPackageName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package name")]
        span: Option<SourceSpan>,
        name: String,
        reason: &'static str,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }

    /// Create a JSON parse error, pointing at the reported line and column
    pub fn json_parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from((o, 1)));
        Box::new(Error::JsonParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a YAML parse error, pointing at the reported location
    pub fn yaml_parse(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 1)));
        Box::new(Error::YamlParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an error for a document that parsed but doesn't fit the model
    pub fn invalid_description(message: impl Into<String>, filename: &str) -> Box<Self> {
        Box::new(Error::InvalidDescription {
            filename: filename.to_string(),
            message: message.into(),
        })
    }

    /// Create an invalid package name error
    pub fn invalid_package_name(
        name: impl Into<String>,
        reason: &'static str,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidPackageName {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            reason,
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}
