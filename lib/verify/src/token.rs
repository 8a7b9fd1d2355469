//! Freshness tokens for verification triggers.
//!
//! Every trigger request must carry a token proving it is not a replay. The
//! session/auth layer is responsible for minting and validating tokens; the
//! verification core only requires "valid token present" as a precondition
//! and fails closed without it. [`SessionTokens`] is a session-scoped
//! in-memory implementation for embedding and tests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use ulid::Ulid;

/// A session-scoped value proving a trigger request is not replayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreshnessToken(String);

impl FreshnessToken {
    /// Creates a token from an existing nonce value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates freshness tokens.
///
/// Implemented by the session/auth collaborator. Validation must be free of
/// side effects visible to the verification core.
pub trait TokenValidator: Send + Sync {
    /// Returns true if the token was minted for the current session and has
    /// not gone stale.
    fn is_fresh(&self, token: &FreshnessToken) -> bool;
}

/// Session-scoped in-memory token store.
///
/// Tokens are valid from issuance until their time-to-live elapses. Unknown
/// tokens are always stale.
pub struct SessionTokens {
    ttl: Duration,
    issued: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl SessionTokens {
    /// Default token lifetime.
    #[must_use]
    pub fn default_ttl() -> Duration {
        Duration::hours(12)
    }

    /// Creates a store with the default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Self::default_ttl())
    }

    /// Creates a store with a custom lifetime.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            issued: Mutex::new(HashMap::new()),
        }
    }

    /// Mints a new token valid for this store's lifetime.
    #[must_use]
    pub fn issue(&self) -> FreshnessToken {
        let token = FreshnessToken::new(format!("nonce_{}", Ulid::new()));
        self.issued
            .lock()
            .unwrap()
            .insert(token.0.clone(), Utc::now() + self.ttl);
        token
    }

    /// Invalidates a token before its lifetime elapses.
    pub fn revoke(&self, token: &FreshnessToken) {
        self.issued
            .lock()
            .unwrap()
            .remove(&token.0);
    }
}

impl Default for SessionTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenValidator for SessionTokens {
    fn is_fresh(&self, token: &FreshnessToken) -> bool {
        self.issued
            .lock()
            .unwrap()
            .get(token.as_str())
            .is_some_and(|expires_at| Utc::now() < *expires_at)
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .issued
            .lock()
            .unwrap()
            .len();
        f.debug_struct("SessionTokens")
            .field("ttl", &self.ttl)
            .field("issued", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_is_fresh() {
        let store = SessionTokens::new();
        let token = store.issue();
        assert!(store.is_fresh(&token));
    }

    #[test]
    fn unknown_token_is_stale() {
        let store = SessionTokens::new();
        assert!(!store.is_fresh(&FreshnessToken::new("nonce_forged")));
    }

    #[test]
    fn expired_token_is_stale() {
        let store = SessionTokens::with_ttl(Duration::zero());
        let token = store.issue();
        assert!(!store.is_fresh(&token));
    }

    #[test]
    fn revoked_token_is_stale() {
        let store = SessionTokens::new();
        let token = store.issue();
        store.revoke(&token);
        assert!(!store.is_fresh(&token));
    }

    #[test]
    fn tokens_are_unique() {
        let store = SessionTokens::new();
        assert_ne!(store.issue(), store.issue());
    }
}
