//! Naming conventions for target languages.

use swerl_core::{PackageName, sanitize_name};

/// Language-specific naming conventions.
///
/// Defines how raw names from an API description become module names,
/// function names and variable names, and how reserved words are handled.
/// The package name is always passed in explicitly.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name to the target's identifier casing (e.g., "getPet" -> "get_pet")
    pub to_identifier: fn(&str) -> String,
    /// Transform a name to a variable name (e.g., "pet_id" -> "PetId")
    pub to_variable: fn(&str) -> String,
    /// Whether a character may start an unquoted identifier
    pub is_identifier_start: fn(char) -> bool,
    /// Reserved words of the language, lowercase
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "end" -> "_end")
    pub escape_reserved: fn(&str) -> String,
    /// Prepended to operation ids that are reserved or can't start an identifier
    pub operation_prefix: &'static str,
    /// Last segment of API module names (e.g., "api" in "petstore_pet_api")
    pub api_suffix: &'static str,
}

impl NamingConvention {
    /// Check if a name is a reserved word, ignoring case.
    pub fn is_reserved(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.reserved_words.contains(&lower.as_str())
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Module name for a raw name: `<package>_<identifier>`.
    pub fn module_name(&self, package: &PackageName, name: &str) -> String {
        format!(
            "{}_{}",
            package,
            (self.to_identifier)(&name.replace('-', "_"))
        )
    }

    /// API module name for a tag: `<package>_<identifier>_<suffix>`, or
    /// `<package>_default_<suffix>` for an empty tag.
    pub fn api_name(&self, package: &PackageName, name: &str) -> String {
        if name.is_empty() {
            return format!("{}_default_{}", package, self.api_suffix);
        }
        format!(
            "{}_{}_{}",
            package,
            (self.to_identifier)(&sanitize_name(name)),
            self.api_suffix
        )
    }

    /// Function name for an operation id.
    ///
    /// Ids that normalize to a reserved word, or to something that can't
    /// start an identifier (including the empty string), get the operation
    /// prefix before normalization. The rename is logged as a warning.
    pub fn operation_id(&self, operation_id: &str) -> String {
        let normalized = (self.to_identifier)(&sanitize_name(operation_id));
        let reserved = self.is_reserved(&normalized);
        let starts_ok = normalized
            .chars()
            .next()
            .is_some_and(self.is_identifier_start);

        if !reserved && starts_ok {
            return normalized;
        }

        let renamed = (self.to_identifier)(&sanitize_name(&format!(
            "{}{}",
            self.operation_prefix, operation_id
        )));

        if reserved {
            tracing::warn!(
                original = operation_id,
                renamed = %renamed,
                "{} (reserved word) cannot be used as method name. Renamed to {}",
                operation_id,
                renamed
            );
        } else {
            tracing::warn!(
                original = operation_id,
                renamed = %renamed,
                "'{}' cannot be used as method name. Renamed to {}",
                operation_id,
                renamed
            );
        }

        renamed
    }

    /// Variable name for a parameter, escaped when reserved.
    pub fn variable_name(&self, name: &str) -> String {
        let transformed = (self.to_variable)(&sanitize_name(name));
        self.safe_name(&transformed)
    }
}
