//! Identifier types for domain entities.
//!
//! Module keys are human-chosen slugs (e.g. `shareai`, `stripe`) that double
//! as settings namespaces and trigger identifiers, so they are validated on
//! construction. Verification attempts use ULID (Universally Unique
//! Lexicographically Sortable Identifier) format, providing both uniqueness
//! and temporal ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when a module key fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidModuleId {
    /// The rejected key.
    pub key: String,
    /// The reason the key was rejected.
    pub reason: &'static str,
}

impl fmt::Display for InvalidModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid module id '{}': {}", self.key, self.reason)
    }
}

impl std::error::Error for InvalidModuleId {}

/// Unique key identifying a provider module.
///
/// Keys are lowercase slugs: they must start with a letter and may contain
/// only lowercase ASCII letters, digits, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Maximum accepted key length.
    pub const MAX_LEN: usize = 64;

    /// Creates a module id, validating the key format.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, too long, does not start with
    /// a lowercase letter, or contains characters outside `[a-z0-9_-]`.
    pub fn new(key: impl Into<String>) -> Result<Self, InvalidModuleId> {
        let key = key.into();
        if key.is_empty() {
            return Err(InvalidModuleId {
                key,
                reason: "key must not be empty",
            });
        }
        if key.len() > Self::MAX_LEN {
            return Err(InvalidModuleId {
                key,
                reason: "key exceeds maximum length",
            });
        }
        if !key.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
            return Err(InvalidModuleId {
                key,
                reason: "key must start with a lowercase letter",
            });
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(InvalidModuleId {
                key,
                reason: "key may only contain lowercase letters, digits, '-' and '_'",
            });
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ModuleId {
    type Err = InvalidModuleId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Unique identifier for a single verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationId(Ulid);

impl VerificationId {
    /// Creates a new verification id.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for VerificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vrf_{}", self.0)
    }
}

impl From<Ulid> for VerificationId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_accepts_slugs() {
        for key in ["shareai", "stripe", "open-ai", "pay_pal", "a2b"] {
            assert!(ModuleId::new(key).is_ok(), "{key} should be accepted");
        }
    }

    #[test]
    fn module_id_rejects_empty() {
        let err = ModuleId::new("").unwrap_err();
        assert!(err.reason.contains("empty"));
    }

    #[test]
    fn module_id_rejects_uppercase_and_symbols() {
        assert!(ModuleId::new("ShareAI").is_err());
        assert!(ModuleId::new("pay pal").is_err());
        assert!(ModuleId::new("stripe!").is_err());
    }

    #[test]
    fn module_id_rejects_leading_digit() {
        assert!(ModuleId::new("1stripe").is_err());
    }

    #[test]
    fn module_id_rejects_overlong_key() {
        let key = "a".repeat(ModuleId::MAX_LEN + 1);
        assert!(ModuleId::new(key).is_err());
    }

    #[test]
    fn module_id_parse_roundtrip() {
        let id: ModuleId = "shareai".parse().expect("should parse");
        assert_eq!(id.as_str(), "shareai");
        assert_eq!(id.to_string(), "shareai");
    }

    #[test]
    fn module_id_serde_roundtrip() {
        let id = ModuleId::new("stripe").expect("valid key");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"stripe\"");
        let parsed: ModuleId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }

    #[test]
    fn verification_id_display_format() {
        let id = VerificationId::new();
        assert!(id.to_string().starts_with("vrf_"));
    }

    #[test]
    fn verification_id_uniqueness() {
        use std::collections::HashSet;

        let ids: HashSet<_> = (0..100).map(|_| VerificationId::new()).collect();
        assert_eq!(ids.len(), 100);
    }
}
