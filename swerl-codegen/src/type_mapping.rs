//! Schema type → target type tables.

use indexmap::IndexMap;
use swerl_core::SchemaType;

use crate::{Error, Result};

/// Maps schema type names to target-language type names.
///
/// Keys are unique ignoring case, so a lookup resolves to exactly one value:
/// an exact match wins, otherwise the single key equal ignoring case is used
/// (`"uuid"` finds the `"UUID"` entry). The table is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    entries: IndexMap<String, String>,
}

impl TypeMapping {
    /// Build a mapping from `(source, target)` pairs.
    ///
    /// Fails if two keys differ only in case or a target type is empty.
    pub fn new<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut mapping = Self {
            entries: IndexMap::new(),
        };
        for (key, value) in entries {
            mapping.insert(key.into(), value.into(), false)?;
        }
        Ok(mapping)
    }

    /// Replace or add entries. A key equal ignoring case replaces the
    /// existing entry's value in place.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            self.insert(key.into(), value.into(), true)?;
        }
        Ok(self)
    }

    fn insert(&mut self, key: String, value: String, replace: bool) -> Result<()> {
        if value.is_empty() {
            return Err(Error::EmptyTypeMapping { key });
        }

        match self.find_key(&key).map(str::to_string) {
            Some(existing) if replace => {
                self.entries.insert(existing, value);
            }
            Some(existing) => {
                return Err(Error::DuplicateTypeMapping {
                    first: existing,
                    second: key,
                });
            }
            None => {
                self.entries.insert(key, value);
            }
        }
        Ok(())
    }

    fn find_key(&self, source: &str) -> Option<&str> {
        if let Some((key, _)) = self.entries.get_key_value(source) {
            return Some(key);
        }
        self.entries
            .keys()
            .find(|key| key.eq_ignore_ascii_case(source))
            .map(String::as_str)
    }

    /// Look up the target type for a schema type name.
    pub fn get(&self, source: &str) -> Option<&str> {
        let key = self.find_key(source)?;
        self.entries.get(key).map(String::as_str)
    }

    /// Look up the target type, failing with a configuration error when unmapped.
    pub fn resolve(&self, source: &str) -> Result<&str> {
        self.get(source).ok_or_else(|| Error::MissingTypeMapping {
            missing: format!("'{}'", source),
        })
    }

    /// Check that every given schema type has a mapping.
    ///
    /// The error names all missing types.
    pub fn ensure_complete(&self, types: &[SchemaType]) -> Result<()> {
        let missing: Vec<String> = types
            .iter()
            .filter(|ty| self.get(ty.as_str()).is_none())
            .map(|ty| format!("'{}'", ty))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingTypeMapping {
                missing: missing.join(", "),
            })
        }
    }

    /// Iterate over `(source, target)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> TypeMapping {
        TypeMapping::new([("string", "binary"), ("UUID", "binary"), ("integer", "int32")])
            .expect("valid mapping")
    }

    #[test]
    fn test_exact_lookup() {
        let mapping = mapping();
        assert_eq!(mapping.get("string"), Some("binary"));
        assert_eq!(mapping.get("integer"), Some("int32"));
        assert_eq!(mapping.get("long"), None);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mapping = mapping();
        assert_eq!(mapping.get("uuid"), Some("binary"));
        assert_eq!(mapping.get("String"), Some("binary"));
    }

    #[test]
    fn test_duplicate_keys_ignoring_case_are_rejected() {
        let err = TypeMapping::new([("UUID", "binary"), ("uuid", "string")]).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateTypeMapping { ref first, ref second } if first == "UUID" && second == "uuid"
        ));
    }

    #[test]
    fn test_empty_target_is_rejected() {
        let err = TypeMapping::new([("string", "")]).unwrap_err();
        assert!(matches!(err, Error::EmptyTypeMapping { .. }));
    }

    #[test]
    fn test_overrides_replace_in_place() {
        let mapping = mapping()
            .with_overrides([("Integer", "integer"), ("long", "int64")])
            .unwrap();

        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("string", "binary"),
                ("UUID", "binary"),
                ("integer", "integer"),
                ("long", "int64"),
            ]
        );
    }

    #[test]
    fn test_resolve_missing() {
        let err = mapping().resolve("Pet").unwrap_err();
        assert_eq!(err.to_string(), "no type mapping for 'Pet'");
    }

    #[test]
    fn test_ensure_complete_names_missing_types() {
        let err = mapping()
            .ensure_complete(&[SchemaType::String, SchemaType::Long, SchemaType::Date])
            .unwrap_err();
        assert_eq!(err.to_string(), "no type mapping for 'long', 'date'");

        assert!(
            mapping()
                .ensure_complete(&[SchemaType::String, SchemaType::Uuid])
                .is_ok()
        );
    }
}
