//! Module descriptors.
//!
//! A descriptor is the static identity card of a provider module: id, display
//! metadata, category, access tier, and admin-surface flags. Descriptors are
//! pure data built once through [`DescriptorBuilder`] and never mutated after
//! registration.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use slotwise_core::ModuleId;
use slotwise_licensing::AccessLevel;

/// The integration category a module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleCategory {
    /// AI backend (text generation, assistance).
    AiProvider,
    /// Payment gateway.
    Payment,
    /// Anything else.
    Other,
}

/// Whether a module appears in the admin module list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Listed in the admin surface.
    #[default]
    Visible,
    /// Registered but not listed (internal or deprecated modules).
    Hidden,
}

/// Static metadata describing one provider module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Unique module key.
    pub id: ModuleId,
    /// Human-readable name.
    pub name: String,
    /// Short description shown in the module list.
    pub description: String,
    /// Icon identifier for the admin surface.
    pub icon: String,
    /// Integration category.
    pub category: ModuleCategory,
    /// Access tier required for the module's privileged behavior.
    pub access_level: AccessLevel,
    /// Sort priority within a category; lower sorts first.
    pub priority: i32,
    /// Whether the module exposes a settings form.
    pub has_settings: bool,
    /// Whether the module has its own admin page.
    pub has_admin_page: bool,
    /// Whether the module is listed in the admin surface.
    pub visibility: Visibility,
}

impl ModuleDescriptor {
    /// Starts building a descriptor for the given module.
    #[must_use]
    pub fn builder(id: ModuleId, name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(id, name)
    }

    /// Checks the descriptor for missing required fields.
    ///
    /// Descriptors produced by [`DescriptorBuilder`] always pass; this guards
    /// against hand-assembled descriptors reaching the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDescriptor`] naming the first missing
    /// field.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("icon", &self.icon),
        ] {
            if value.trim().is_empty() {
                return Err(RegistryError::InvalidDescriptor {
                    id: self.id.clone(),
                    reason: format!("field '{field}' must not be empty"),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`ModuleDescriptor`].
///
/// `id` and `name` are required up front; `description`, `icon`, and
/// `category` must be supplied before [`DescriptorBuilder::build`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    id: ModuleId,
    name: String,
    description: Option<String>,
    icon: Option<String>,
    category: Option<ModuleCategory>,
    access_level: AccessLevel,
    priority: i32,
    has_settings: bool,
    has_admin_page: bool,
    visibility: Visibility,
}

impl DescriptorBuilder {
    /// Default sort priority for modules that do not set one.
    pub const DEFAULT_PRIORITY: i32 = 10;

    fn new(id: ModuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            icon: None,
            category: None,
            access_level: AccessLevel::Free,
            priority: Self::DEFAULT_PRIORITY,
            has_settings: false,
            has_admin_page: false,
            visibility: Visibility::Visible,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the icon identifier.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: ModuleCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the required access level.
    #[must_use]
    pub fn access_level(mut self, level: AccessLevel) -> Self {
        self.access_level = level;
        self
    }

    /// Sets the sort priority (lower sorts first).
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the module as having a settings form.
    #[must_use]
    pub fn with_settings(mut self) -> Self {
        self.has_settings = true;
        self
    }

    /// Marks the module as having its own admin page.
    #[must_use]
    pub fn with_admin_page(mut self) -> Self {
        self.has_admin_page = true;
        self
    }

    /// Sets the visibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Finalizes the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDescriptor`] if `description`, `icon`,
    /// or `category` was never supplied, or if a supplied field is empty.
    pub fn build(self) -> Result<ModuleDescriptor, RegistryError> {
        let missing = |field: &str| RegistryError::InvalidDescriptor {
            id: self.id.clone(),
            reason: format!("required field '{field}' was not supplied"),
        };

        let descriptor = ModuleDescriptor {
            description: self.description.clone().ok_or_else(|| missing("description"))?,
            icon: self.icon.clone().ok_or_else(|| missing("icon"))?,
            category: self.category.ok_or_else(|| missing("category"))?,
            id: self.id,
            name: self.name,
            access_level: self.access_level,
            priority: self.priority,
            has_settings: self.has_settings,
            has_admin_page: self.has_admin_page,
            visibility: self.visibility,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module_id(key: &str) -> ModuleId {
        ModuleId::new(key).expect("valid key")
    }

    #[test]
    fn builder_produces_complete_descriptor() {
        let descriptor = ModuleDescriptor::builder(module_id("shareai"), "ShareAI")
            .description("Community-powered AI inference")
            .icon("dashicons-share")
            .category(ModuleCategory::AiProvider)
            .priority(5)
            .with_settings()
            .build()
            .expect("descriptor should build");

        assert_eq!(descriptor.id.as_str(), "shareai");
        assert_eq!(descriptor.name, "ShareAI");
        assert_eq!(descriptor.category, ModuleCategory::AiProvider);
        assert_eq!(descriptor.access_level, AccessLevel::Free);
        assert_eq!(descriptor.priority, 5);
        assert!(descriptor.has_settings);
        assert!(!descriptor.has_admin_page);
        assert_eq!(descriptor.visibility, Visibility::Visible);
    }

    #[test]
    fn builder_rejects_missing_description() {
        let result = ModuleDescriptor::builder(module_id("stripe"), "Stripe")
            .icon("dashicons-card")
            .category(ModuleCategory::Payment)
            .build();

        match result {
            Err(RegistryError::InvalidDescriptor { id, reason }) => {
                assert_eq!(id.as_str(), "stripe");
                assert!(reason.contains("description"));
            }
            other => panic!("expected InvalidDescriptor, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_missing_category() {
        let result = ModuleDescriptor::builder(module_id("stripe"), "Stripe")
            .description("Card payments")
            .icon("dashicons-card")
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_icon() {
        let mut descriptor = ModuleDescriptor::builder(module_id("stripe"), "Stripe")
            .description("Card payments")
            .icon("dashicons-card")
            .category(ModuleCategory::Payment)
            .build()
            .expect("descriptor should build");
        descriptor.icon = "  ".to_string();

        assert!(matches!(
            descriptor.validate(),
            Err(RegistryError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn descriptor_serde_roundtrip() {
        let descriptor = ModuleDescriptor::builder(module_id("openai"), "OpenAI")
            .description("GPT-backed assistance")
            .icon("dashicons-admin-generic")
            .category(ModuleCategory::AiProvider)
            .access_level(AccessLevel::Premium)
            .build()
            .expect("descriptor should build");

        let json = serde_json::to_string(&descriptor).expect("serialize");
        let parsed: ModuleDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(descriptor, parsed);
    }
}
