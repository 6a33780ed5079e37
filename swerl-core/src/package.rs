//! The package name every generated module is prefixed with.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Package name used when none is configured.
pub const DEFAULT_PACKAGE_NAME: &str = "swagger";

/// A validated package name.
///
/// The name ends up in module atoms and file names, so it must start with a
/// lowercase ASCII letter and contain only lowercase letters, digits and
/// underscores. Once constructed it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

/// Error returned for a malformed package name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid package name '{name}': {reason}")]
pub struct InvalidPackageName {
    pub name: String,
    pub reason: &'static str,
}

impl PackageName {
    /// Validate and wrap a package name.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidPackageName> {
        let name = name.into();
        match check(&name) {
            Some(reason) => Err(InvalidPackageName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns None if valid, Some(reason) if invalid.
fn check(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if name.contains(['/', '\\']) {
        return Some("name cannot contain path separators");
    }

    if !first.is_ascii_lowercase() {
        return Some("name must start with a lowercase letter");
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Some("name may only contain lowercase letters, digits and underscores");
    }

    None
}

impl Default for PackageName {
    fn default() -> Self {
        Self(DEFAULT_PACKAGE_NAME.to_string())
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
