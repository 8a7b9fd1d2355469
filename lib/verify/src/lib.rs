//! Connection verification for slotwise provider modules.
//!
//! This crate provides:
//!
//! - **Probe seam**: The single reachability/auth call each provider exposes
//! - **Verifiers**: Per-category mapping of probe outcomes to renderable
//!   results
//! - **Freshness tokens**: Replay protection for trigger requests
//! - **Verification controller**: The trigger state machine orchestrating
//!   one round trip per module

pub mod controller;
pub mod error;
pub mod probe;
pub mod request;
pub mod token;
pub mod verifier;

pub use controller::{
    PanelSnapshot, TriggerPhase, VerificationController, VerificationOutcome,
};
pub use error::{ControllerError, VerifyError};
pub use probe::{Probe, ProbeOutcome};
pub use request::{CredentialsRef, VerificationRequest};
pub use token::{FreshnessToken, SessionTokens, TokenValidator};
pub use verifier::{
    AiProviderVerifier, CategoryVerifier, ConnectionVerifier, GenericVerifier, PaymentVerifier,
    VerificationResult, VerificationStatus,
};
