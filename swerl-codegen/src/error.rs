use miette::Diagnostic;
use thiserror::Error;

/// Result type for swerl-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort generation.
///
/// Reserved-word renames are not errors: they are recovered automatically
/// and reported through the log.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no type mapping for {missing}")]
    #[diagnostic(
        code(swerl::missing_type_mapping),
        help("every schema type needs a target type in the target's type table")
    )]
    MissingTypeMapping { missing: String },

    #[error("type mapping keys '{first}' and '{second}' differ only in case")]
    #[diagnostic(code(swerl::duplicate_type_mapping))]
    DuplicateTypeMapping { first: String, second: String },

    #[error("type mapping for '{key}' has an empty target type")]
    #[diagnostic(code(swerl::empty_type_mapping))]
    EmptyTypeMapping { key: String },

    #[error("{kind} '{identifier}' is derived from both '{first}' and '{second}'")]
    #[diagnostic(
        code(swerl::identifier_collision),
        help("rename one of them in the API description")
    )]
    IdentifierCollision {
        kind: &'static str,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("package name '{name}' is a reserved word for target '{target}'")]
    #[diagnostic(
        code(swerl::reserved_package_name),
        help("choose a package name that isn't a keyword of the target language")
    )]
    ReservedPackageName { name: String, target: &'static str },
}
