//! Provider-module framework for the slotwise platform.
//!
//! This crate provides:
//!
//! - **ModuleDefinition trait**: The contract every provider module implements
//! - **Descriptors**: Static metadata (identity, category, access tier)
//! - **Settings schemas**: Ordered configuration fields with defaults
//! - **Hook registrar**: Capability-gated lifecycle hook binding
//! - **Registry**: Process-wide module lookup and iteration

pub mod definition;
pub mod descriptor;
pub mod error;
pub mod hooks;
pub mod registry;
pub mod settings;

pub use definition::ModuleDefinition;
pub use descriptor::{DescriptorBuilder, ModuleCategory, ModuleDescriptor, Visibility};
pub use error::{RegistryError, SettingsError};
pub use hooks::{HookFn, HookRegistrar};
pub use registry::Registry;
pub use settings::{FieldType, SelectOption, SettingsField, SettingsSchema};
