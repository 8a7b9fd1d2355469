//! Licensing primitives for the slotwise platform.
//!
//! This crate provides:
//!
//! - **Access levels**: The tier a module requires for privileged behavior
//! - **Capability context**: The installation's license state, resolved once
//!   per request
//! - **Capability gate**: A pure predicate deciding whether premium behavior
//!   may execute

pub mod capability;

pub use capability::{AccessLevel, CapabilityContext, LicenseTier};
