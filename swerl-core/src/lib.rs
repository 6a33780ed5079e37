//! Core utilities and types for the swerl API client generator.
//!
//! This crate provides the vocabulary shared by every other swerl crate:
//! schema type names, identifier transformations, the package name and
//! file writing.

mod file;
mod package;
mod schema_type;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Fundamental types
pub use package::{DEFAULT_PACKAGE_NAME, InvalidPackageName, PackageName};
pub use schema_type::SchemaType;
// String utilities
pub use utils::{camelize, sanitize_name, underscore};
