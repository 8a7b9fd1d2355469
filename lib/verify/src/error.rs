//! Error types for the verification crate.
//!
//! Expected verification failures (rejected credentials, unreachable
//! provider) are *results*, not errors; see
//! [`crate::verifier::VerificationStatus`]. The types here cover the hard
//! errors only: malformed input that should never reach a verifier, and
//! wiring problems surfaced to the caller.

use slotwise_core::ModuleId;
use slotwise_module::{ModuleCategory, RegistryError};
use std::fmt;

/// Hard errors from a verifier.
///
/// These indicate malformed input, not a provider-side outcome, and are
/// surfaced to the caller instead of being rendered to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The verification request carried no credentials reference.
    MissingCredentials { id: ModuleId },
    /// The descriptor's category does not match the verifier.
    CategoryMismatch {
        id: ModuleId,
        expected: ModuleCategory,
        actual: ModuleCategory,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials { id } => {
                write!(f, "no credentials reference for module '{id}'")
            }
            Self::CategoryMismatch {
                id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "verifier for {expected:?} modules cannot verify module '{id}' of category {actual:?}"
                )
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// Hard errors from the verification controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Module lookup failed.
    Registry(RegistryError),
    /// No probe is connected for the module.
    ProbeNotConnected { id: ModuleId },
    /// The verifier reported malformed input.
    Verify(VerifyError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "{err}"),
            Self::ProbeNotConnected { id } => {
                write!(f, "no probe connected for module '{id}'")
            }
            Self::Verify(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::Verify(err) => Some(err),
            Self::ProbeNotConnected { .. } => None,
        }
    }
}

impl From<RegistryError> for ControllerError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<VerifyError> for ControllerError {
    fn from(err: VerifyError) -> Self {
        Self::Verify(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module_id(key: &str) -> ModuleId {
        ModuleId::new(key).expect("valid key")
    }

    #[test]
    fn verify_error_display() {
        let err = VerifyError::MissingCredentials {
            id: module_id("shareai"),
        };
        assert!(err.to_string().contains("shareai"));
        assert!(err.to_string().contains("credentials"));
    }

    #[test]
    fn category_mismatch_display() {
        let err = VerifyError::CategoryMismatch {
            id: module_id("stripe"),
            expected: ModuleCategory::AiProvider,
            actual: ModuleCategory::Payment,
        };
        assert!(err.to_string().contains("stripe"));
    }

    #[test]
    fn controller_error_wraps_registry_error() {
        let err = ControllerError::from(RegistryError::ModuleNotFound {
            id: module_id("ghost"),
        });
        assert!(err.to_string().contains("ghost"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
