use std::collections::HashMap;

use crate::{Error, Result};

/// Tracks derived identifiers within one namespace.
///
/// Escaping and normalization can map two different raw names to the same
/// identifier (`"_foo"` and an escaped `"foo"`). Claiming an identifier twice
/// from different origins is an error instead of a silent overwrite.
#[derive(Debug)]
pub struct NameScope {
    kind: &'static str,
    claimed: HashMap<String, String>,
}

impl NameScope {
    /// Create an empty scope; `kind` names the identifiers in error messages.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            claimed: HashMap::new(),
        }
    }

    /// Claim `identifier` for `origin`.
    ///
    /// Claiming the same identifier again from the same origin is allowed.
    pub fn claim(&mut self, identifier: &str, origin: &str) -> Result<()> {
        match self.claimed.get(identifier) {
            Some(first) if first != origin => Err(Error::IdentifierCollision {
                kind: self.kind,
                identifier: identifier.to_string(),
                first: first.clone(),
                second: origin.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.claimed
                    .insert(identifier.to_string(), origin.to_string());
                Ok(())
            }
        }
    }
}
