//! Error types for the module crate.
//!
//! Registration errors are fatal to the module being registered, never to
//! the registry as a whole: a rejected module simply does not become
//! available. Settings errors are reported when submitted values are checked
//! against a module's schema.

use slotwise_core::ModuleId;
use std::fmt;

/// Errors from module registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A descriptor is missing a required field or carries an invalid value.
    InvalidDescriptor { id: ModuleId, reason: String },
    /// A module with the same id is already registered.
    DuplicateModuleId { id: ModuleId },
    /// No module with the given id is registered.
    ModuleNotFound { id: ModuleId },
    /// A default-settings key has no matching settings field.
    SchemaMismatch { id: ModuleId, key: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDescriptor { id, reason } => {
                write!(f, "invalid descriptor for module '{id}': {reason}")
            }
            Self::DuplicateModuleId { id } => {
                write!(f, "module id already registered: {id}")
            }
            Self::ModuleNotFound { id } => write!(f, "module not found: {id}"),
            Self::SchemaMismatch { id, key } => {
                write!(
                    f,
                    "default settings key '{key}' of module '{id}' has no matching field"
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors from validating submitted settings values against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A required field has neither a submitted value nor a default.
    MissingRequired { key: String },
    /// A submitted key has no matching settings field.
    UnknownKey { key: String },
    /// Two fields in one schema share the same key.
    DuplicateKey { key: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { key } => {
                write!(f, "required settings field '{key}' has no value")
            }
            Self::UnknownKey { key } => {
                write!(f, "unknown settings key: {key}")
            }
            Self::DuplicateKey { key } => {
                write!(f, "duplicate settings field key: {key}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
