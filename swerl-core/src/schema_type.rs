//! Schema-level type names.

use std::{fmt, str::FromStr};

/// Every type name the generator can derive from an API description.
///
/// This is the key space of a target's type mapping. The names match the
/// ones used by Swagger tooling (`DateTime`, `ByteArray`, `UUID`, ...), so a
/// mapping table can be written with the familiar keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Enum,
    Date,
    DateTime,
    Boolean,
    String,
    Char,
    Integer,
    Float,
    Long,
    Double,
    Array,
    Map,
    Number,
    List,
    Object,
    File,
    Binary,
    ByteArray,
    Uuid,
    Password,
}

impl SchemaType {
    /// All schema types, in mapping-table order.
    pub const ALL: &'static [SchemaType] = &[
        SchemaType::Enum,
        SchemaType::Date,
        SchemaType::DateTime,
        SchemaType::Boolean,
        SchemaType::String,
        SchemaType::Char,
        SchemaType::Integer,
        SchemaType::Float,
        SchemaType::Long,
        SchemaType::Double,
        SchemaType::Array,
        SchemaType::Map,
        SchemaType::Number,
        SchemaType::List,
        SchemaType::Object,
        SchemaType::File,
        SchemaType::Binary,
        SchemaType::ByteArray,
        SchemaType::Uuid,
        SchemaType::Password,
    ];

    /// Get the schema type name (the type-mapping key)
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Enum => "enum",
            SchemaType::Date => "date",
            SchemaType::DateTime => "DateTime",
            SchemaType::Boolean => "boolean",
            SchemaType::String => "string",
            SchemaType::Char => "char",
            SchemaType::Integer => "integer",
            SchemaType::Float => "float",
            SchemaType::Long => "long",
            SchemaType::Double => "double",
            SchemaType::Array => "array",
            SchemaType::Map => "map",
            SchemaType::Number => "number",
            SchemaType::List => "List",
            SchemaType::Object => "object",
            SchemaType::File => "file",
            SchemaType::Binary => "binary",
            SchemaType::ByteArray => "ByteArray",
            SchemaType::Uuid => "UUID",
            SchemaType::Password => "password",
        }
    }

    /// Derive the schema type of a schema node.
    ///
    /// `ty` and `format` are the node's `type` and `format` keywords. A node
    /// without a type (including a `$ref`) is an object.
    pub fn infer(
        ty: Option<&str>,
        format: Option<&str>,
        is_enum: bool,
        has_additional_properties: bool,
    ) -> SchemaType {
        match (ty, format) {
            (Some("integer"), Some("int64")) => SchemaType::Long,
            (Some("integer"), _) => SchemaType::Integer,
            (Some("number"), Some("float")) => SchemaType::Float,
            (Some("number"), Some("double")) => SchemaType::Double,
            (Some("number"), _) => SchemaType::Number,
            (Some("string"), Some("date")) => SchemaType::Date,
            (Some("string"), Some("date-time")) => SchemaType::DateTime,
            (Some("string"), Some("byte")) => SchemaType::ByteArray,
            (Some("string"), Some("binary")) => SchemaType::Binary,
            (Some("string"), Some("uuid")) => SchemaType::Uuid,
            (Some("string"), Some("password")) => SchemaType::Password,
            (Some("string"), _) if is_enum => SchemaType::Enum,
            (Some("string"), _) => SchemaType::String,
            (Some("boolean"), _) => SchemaType::Boolean,
            (Some("array"), _) => SchemaType::Array,
            (Some("file"), _) => SchemaType::File,
            (Some("object"), _) if has_additional_properties => SchemaType::Map,
            _ => SchemaType::Object,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown schema type '{}'", s))
    }
}
