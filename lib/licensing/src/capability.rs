//! License tiers and the capability gate.
//!
//! Premium behavior is gated on the installation's license tier. The gate is
//! a pure predicate over [`CapabilityContext`]: no side effects, no network
//! calls. When the gate denies access, the caller degrades the privileged
//! behavior to an inert no-op rather than raising an error; platform
//! activation must never fail because of licensing.

use serde::{Deserialize, Serialize};

/// The access tier a module requires for its privileged behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Available on every installation.
    Free,
    /// Requires a premium license.
    Premium,
}

impl AccessLevel {
    /// Returns true if this level requires a premium license.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium)
    }
}

/// The license tier of the current installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    /// No paid license.
    Free,
    /// Active premium license.
    Premium,
}

/// Snapshot of the license state, resolved once per request.
///
/// The context is read-only to modules: they may ask whether premium
/// behavior is allowed but never mutate the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityContext {
    tier: LicenseTier,
}

impl CapabilityContext {
    /// Creates a context for the given tier.
    #[must_use]
    pub fn new(tier: LicenseTier) -> Self {
        Self { tier }
    }

    /// Creates a free-tier context.
    #[must_use]
    pub fn free() -> Self {
        Self::new(LicenseTier::Free)
    }

    /// Creates a premium-tier context.
    #[must_use]
    pub fn premium() -> Self {
        Self::new(LicenseTier::Premium)
    }

    /// Returns the resolved license tier.
    #[must_use]
    pub fn tier(&self) -> LicenseTier {
        self.tier
    }

    /// Returns true if premium-only behavior may execute.
    #[must_use]
    pub fn can_use_premium(&self) -> bool {
        matches!(self.tier, LicenseTier::Premium)
    }

    /// Returns true if behavior at the given access level may execute.
    ///
    /// Free-level behavior is always allowed; premium-level behavior is
    /// allowed only with a premium license.
    #[must_use]
    pub fn allows(&self, level: AccessLevel) -> bool {
        match level {
            AccessLevel::Free => true,
            AccessLevel::Premium => self.can_use_premium(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_context_denies_premium() {
        let ctx = CapabilityContext::free();
        assert!(!ctx.can_use_premium());
        assert!(ctx.allows(AccessLevel::Free));
        assert!(!ctx.allows(AccessLevel::Premium));
    }

    #[test]
    fn premium_context_allows_everything() {
        let ctx = CapabilityContext::premium();
        assert!(ctx.can_use_premium());
        assert!(ctx.allows(AccessLevel::Free));
        assert!(ctx.allows(AccessLevel::Premium));
    }

    #[test]
    fn access_level_premium_flag() {
        assert!(!AccessLevel::Free.is_premium());
        assert!(AccessLevel::Premium.is_premium());
    }

    #[test]
    fn capability_context_serde() {
        let ctx = CapabilityContext::premium();
        let json = serde_json::to_string(&ctx).expect("serialize");
        let parsed: CapabilityContext = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(ctx, parsed);
    }

    #[test]
    fn access_level_serde_lowercase() {
        let json = serde_json::to_string(&AccessLevel::Premium).expect("serialize");
        assert_eq!(json, "\"premium\"");
    }
}
