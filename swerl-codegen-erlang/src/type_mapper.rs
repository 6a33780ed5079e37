//! Erlang type tables.

use swerl_codegen::{Result, TypeMapping};

use crate::Flavor;

/// Schema type to Erlang type, shared by every flavour.
const BASE_TYPES: &[(&str, &str)] = &[
    ("enum", "binary"),
    ("date", "date"),
    ("DateTime", "datetime"),
    ("boolean", "boolean"),
    ("string", "binary"),
    ("char", "binary"),
    ("integer", "int32"),
    ("float", "float"),
    ("long", "int64"),
    ("double", "float"),
    ("array", "list"),
    ("map", "map"),
    ("number", "float"),
    ("List", "list"),
    ("object", "object"),
    ("file", "file"),
    ("binary", "binary"),
    ("ByteArray", "byte"),
    ("UUID", "binary"),
    ("password", "binary"),
];

/// Build the type table of a flavour: the base table with the flavour's
/// overrides applied in place.
pub fn erlang_type_mapping(flavor: Flavor) -> Result<TypeMapping> {
    TypeMapping::new(BASE_TYPES.iter().copied())?
        .with_overrides(flavor.type_overrides().iter().copied())
}
