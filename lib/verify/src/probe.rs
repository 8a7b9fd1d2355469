//! The outbound probe seam.
//!
//! Each provider integration exposes exactly one reachability/auth call.
//! Probe implementations perform the actual wire protocol (HTTP ping, key
//! check) and live outside this crate; the verification core only consumes
//! the normalized outcome.

use crate::request::CredentialsRef;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Normalized outcome of a provider probe.
///
/// Reasons are shown to the end user and must be plain text without raw
/// credentials, internal identifiers, or stack traces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The provider accepted the credentials.
    Authorized,
    /// The provider was reached but rejected the credentials.
    Unauthorized {
        /// User-safe explanation.
        reason: String,
    },
    /// The provider could not be reached.
    Unreachable {
        /// User-safe explanation.
        reason: String,
    },
}

/// A single reachability/auth check against an external provider.
///
/// Implementations must be side-effect-free beyond the provider-side check
/// itself; in particular they must not mutate stored settings. Expected
/// failure modes are expressed through [`ProbeOutcome`], never by panicking.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probes the provider with the referenced credentials.
    async fn probe(&self, credentials: &CredentialsRef) -> ProbeOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serde_tagged() {
        let outcome = ProbeOutcome::Unauthorized {
            reason: "API key rejected".to_string(),
        };
        let json = serde_json::to_string(&outcome).expect("serialize");
        assert!(json.contains("\"outcome\":\"unauthorized\""));
        let parsed: ProbeOutcome = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(outcome, parsed);
    }
}
