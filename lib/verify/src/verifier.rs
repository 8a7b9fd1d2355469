//! Connection verifiers.
//!
//! A verifier turns one probe outcome into a [`VerificationResult`] the admin
//! surface can render. There is one verifier per module category, all
//! conforming to the [`ConnectionVerifier`] trait; [`CategoryVerifier`] is
//! the tagged variant the controller instantiates per check. Verifiers are
//! stateless and owned transiently for the duration of a single check.

use crate::error::VerifyError;
use crate::probe::{Probe, ProbeOutcome};
use crate::request::CredentialsRef;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slotwise_core::VerificationId;
use slotwise_module::{ModuleCategory, ModuleDescriptor};
use std::sync::Arc;

/// The kind of outcome a verification produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// The provider is reachable and the credentials are accepted.
    Success,
    /// The provider rejected the credentials.
    Failure,
    /// The provider could not be reached (network error or timeout).
    TransportError,
}

/// Normalized result of one verification attempt.
///
/// Created per attempt, consumed immediately by the rendering step, and not
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Identifier of this attempt.
    pub attempt: VerificationId,
    /// Outcome kind.
    pub status: VerificationStatus,
    /// User-facing message; plain text, markup-safe, no secrets.
    pub message: String,
    /// When the attempt completed.
    pub timestamp: DateTime<Utc>,
}

impl VerificationResult {
    fn new(status: VerificationStatus, message: impl Into<String>) -> Self {
        Self {
            attempt: VerificationId::new(),
            status,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a success result.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(VerificationStatus::Success, message)
    }

    /// Creates a credentials-rejected result.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(VerificationStatus::Failure, message)
    }

    /// Creates an unreachable/timeout result.
    #[must_use]
    pub fn transport_error(message: impl Into<String>) -> Self {
        Self::new(VerificationStatus::TransportError, message)
    }

    /// Returns true if the user may simply retry.
    ///
    /// Both failure kinds are recoverable; a success needs no retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.status,
            VerificationStatus::Failure | VerificationStatus::TransportError
        )
    }
}

/// Capability interface for per-category verification.
#[async_trait]
pub trait ConnectionVerifier: Send + Sync {
    /// Performs exactly one reachability/auth probe for the module.
    ///
    /// Expected failure modes (rejected credentials, unreachable provider)
    /// map to [`VerificationStatus::Failure`] and
    /// [`VerificationStatus::TransportError`]; they never raise.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] only for malformed input: an empty
    /// credentials reference or a descriptor of the wrong category.
    async fn verify(
        &self,
        descriptor: &ModuleDescriptor,
        credentials: &CredentialsRef,
    ) -> Result<VerificationResult, VerifyError>;
}

fn check_input(
    descriptor: &ModuleDescriptor,
    credentials: &CredentialsRef,
    expected: Option<ModuleCategory>,
) -> Result<(), VerifyError> {
    if let Some(expected) = expected
        && descriptor.category != expected
    {
        return Err(VerifyError::CategoryMismatch {
            id: descriptor.id.clone(),
            expected,
            actual: descriptor.category,
        });
    }
    if credentials.is_empty() {
        return Err(VerifyError::MissingCredentials {
            id: descriptor.id.clone(),
        });
    }
    Ok(())
}

/// Verifier for AI-provider modules.
pub struct AiProviderVerifier {
    probe: Arc<dyn Probe>,
}

impl AiProviderVerifier {
    /// Creates a verifier around the module's probe.
    #[must_use]
    pub fn new(probe: Arc<dyn Probe>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl ConnectionVerifier for AiProviderVerifier {
    async fn verify(
        &self,
        descriptor: &ModuleDescriptor,
        credentials: &CredentialsRef,
    ) -> Result<VerificationResult, VerifyError> {
        check_input(descriptor, credentials, Some(ModuleCategory::AiProvider))?;
        let name = &descriptor.name;
        Ok(match self.probe.probe(credentials).await {
            ProbeOutcome::Authorized => {
                VerificationResult::success(format!("{name} connection successful!"))
            }
            ProbeOutcome::Unauthorized { reason } => {
                VerificationResult::failure(format!("{name} rejected the credentials: {reason}"))
            }
            ProbeOutcome::Unreachable { reason } => {
                VerificationResult::transport_error(format!("Could not reach {name}: {reason}"))
            }
        })
    }
}

/// Verifier for payment-gateway modules.
pub struct PaymentVerifier {
    probe: Arc<dyn Probe>,
}

impl PaymentVerifier {
    /// Creates a verifier around the module's probe.
    #[must_use]
    pub fn new(probe: Arc<dyn Probe>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl ConnectionVerifier for PaymentVerifier {
    async fn verify(
        &self,
        descriptor: &ModuleDescriptor,
        credentials: &CredentialsRef,
    ) -> Result<VerificationResult, VerifyError> {
        check_input(descriptor, credentials, Some(ModuleCategory::Payment))?;
        let name = &descriptor.name;
        Ok(match self.probe.probe(credentials).await {
            ProbeOutcome::Authorized => VerificationResult::success(format!(
                "{name} is connected and ready to accept payments."
            )),
            ProbeOutcome::Unauthorized { reason } => VerificationResult::failure(format!(
                "{name} rejected the API credentials: {reason}"
            )),
            ProbeOutcome::Unreachable { reason } => {
                VerificationResult::transport_error(format!("Could not reach {name}: {reason}"))
            }
        })
    }
}

/// Verifier for modules outside the two main categories.
pub struct GenericVerifier {
    probe: Arc<dyn Probe>,
}

impl GenericVerifier {
    /// Creates a verifier around the module's probe.
    #[must_use]
    pub fn new(probe: Arc<dyn Probe>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl ConnectionVerifier for GenericVerifier {
    async fn verify(
        &self,
        descriptor: &ModuleDescriptor,
        credentials: &CredentialsRef,
    ) -> Result<VerificationResult, VerifyError> {
        check_input(descriptor, credentials, None)?;
        let name = &descriptor.name;
        Ok(match self.probe.probe(credentials).await {
            ProbeOutcome::Authorized => {
                VerificationResult::success(format!("{name} connection successful!"))
            }
            ProbeOutcome::Unauthorized { reason } => {
                VerificationResult::failure(format!("{name} rejected the credentials: {reason}"))
            }
            ProbeOutcome::Unreachable { reason } => {
                VerificationResult::transport_error(format!("Could not reach {name}: {reason}"))
            }
        })
    }
}

/// Tagged verifier variant over the module categories.
pub enum CategoryVerifier {
    /// AI-provider verification.
    AiProvider(AiProviderVerifier),
    /// Payment-gateway verification.
    Payment(PaymentVerifier),
    /// Everything else.
    Other(GenericVerifier),
}

impl CategoryVerifier {
    /// Instantiates the verifier matching a module's category.
    #[must_use]
    pub fn for_category(category: ModuleCategory, probe: Arc<dyn Probe>) -> Self {
        match category {
            ModuleCategory::AiProvider => Self::AiProvider(AiProviderVerifier::new(probe)),
            ModuleCategory::Payment => Self::Payment(PaymentVerifier::new(probe)),
            ModuleCategory::Other => Self::Other(GenericVerifier::new(probe)),
        }
    }
}

#[async_trait]
impl ConnectionVerifier for CategoryVerifier {
    async fn verify(
        &self,
        descriptor: &ModuleDescriptor,
        credentials: &CredentialsRef,
    ) -> Result<VerificationResult, VerifyError> {
        match self {
            Self::AiProvider(v) => v.verify(descriptor, credentials).await,
            Self::Payment(v) => v.verify(descriptor, credentials).await,
            Self::Other(v) => v.verify(descriptor, credentials).await,
        }
    }
}
