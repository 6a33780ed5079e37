use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::{ApiDescription, Error, Result, SourceFormat, serde_helpers::yaml_to_json};

/// Default filename used in error reports for descriptions parsed from a string.
const DEFAULT_FILENAME: &str = "api description";

/// A parsed API description together with the format it was written in.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    path: Option<PathBuf>,
    format: SourceFormat,
    api: ApiDescription,
}

impl ApiDocument {
    /// Open and parse an API description file.
    ///
    /// The format is taken from the file extension, falling back to the
    /// content when the extension is unknown.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let format =
            SourceFormat::from_path(&path).unwrap_or_else(|| SourceFormat::detect(&content));
        let filename = path.display().to_string();

        let mut document = Self::parse_with_filename(&content, format, &filename)?;
        document.path = Some(path);
        Ok(document)
    }

    /// Parse an API description from a string in the given format.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Self> {
        Self::parse_with_filename(content, format, DEFAULT_FILENAME)
    }

    /// Parse an API description, using `filename` for error reporting.
    pub fn parse_with_filename(content: &str, format: SourceFormat, filename: &str) -> Result<Self> {
        let value = match format {
            SourceFormat::Json => serde_json::from_str::<Value>(content)
                .map_err(|e| Error::json_parse(e, content, filename))?,
            SourceFormat::Yaml => {
                let yaml: serde_yaml::Value = serde_yaml::from_str(content)
                    .map_err(|e| Error::yaml_parse(e, content, filename))?;
                yaml_to_json(yaml)
            }
        };

        if !value.is_object() {
            return Err(Error::invalid_description(
                "the document root must be an object",
                filename,
            ));
        }

        let api: ApiDescription = serde_json::from_value(value)
            .map_err(|e| Error::invalid_description(e.to_string(), filename))?;

        tracing::debug!(
            filename,
            format = %format,
            paths = api.path_items().count(),
            "parsed API description"
        );

        Ok(Self {
            path: None,
            format,
            api,
        })
    }

    /// Wrap an already-built description.
    pub fn from_description(api: ApiDescription, format: SourceFormat) -> Self {
        Self {
            path: None,
            format,
            api,
        }
    }

    /// Path the document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn api(&self) -> &ApiDescription {
        &self.api
    }

    /// Serialize the description back to text in its original format.
    pub fn to_text(&self) -> Result<String> {
        self.to_text_as(self.format)
    }

    /// Serialize the description to text in `format`.
    ///
    /// JSON output is pretty-printed with four-space indentation.
    pub fn to_text_as(&self, format: SourceFormat) -> Result<String> {
        let serialize_error = |message: String| {
            Box::new(Error::Serialize {
                format: format.to_string(),
                message,
            })
        };

        match format {
            SourceFormat::Json => {
                let mut buf = Vec::new();
                let mut serializer =
                    Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
                self.api
                    .serialize(&mut serializer)
                    .map_err(|e| serialize_error(e.to_string()))?;
                String::from_utf8(buf).map_err(|e| serialize_error(e.to_string()))
            }
            SourceFormat::Yaml => {
                serde_yaml::to_string(&self.api).map_err(|e| serialize_error(e.to_string()))
            }
        }
    }
}
