//! Core domain types and utilities for the slotwise platform.
//!
//! This crate provides the foundational types, error handling, and shared
//! utilities used throughout the slotwise booking platform's provider-module
//! framework.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{InvalidModuleId, ModuleId, VerificationId};
