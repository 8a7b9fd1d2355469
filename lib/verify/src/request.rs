//! Verification requests and credential references.
//!
//! A request names the module to verify, an opaque reference to its stored
//! credentials, and the freshness token proving the trigger is not replayed.
//! The credentials reference is treated as sensitive: its `Debug` and
//! `Display` output is redacted so raw secrets can never leak into logs.

use crate::token::FreshnessToken;
use serde::{Deserialize, Serialize};
use slotwise_core::ModuleId;
use std::fmt;

/// Opaque reference to a module's stored credentials.
///
/// The settings layer resolves this to actual secrets at probe time; the
/// verification core never inspects the content.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialsRef(String);

impl CredentialsRef {
    /// Creates a credentials reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the raw reference for the probe implementation.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the reference carries no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for CredentialsRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialsRef(\"***\")")
    }
}

impl fmt::Display for CredentialsRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// One user-initiated request to verify a module's connection.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// The module to verify.
    pub module_id: ModuleId,
    /// Reference to the credentials the probe should use.
    pub credentials: CredentialsRef,
    /// Freshness token bound to the current session.
    pub token: FreshnessToken,
}

impl VerificationRequest {
    /// Creates a verification request.
    #[must_use]
    pub fn new(module_id: ModuleId, credentials: CredentialsRef, token: FreshnessToken) -> Self {
        Self {
            module_id,
            credentials,
            token,
        }
    }
}
