//! ShareAI provider module.
//!
//! Community-powered AI inference, available on the free tier. This is the
//! default AI backend a fresh installation offers.

use serde_json::json;
use slotwise_core::ModuleId;
use slotwise_licensing::AccessLevel;
use slotwise_module::{
    ModuleCategory, ModuleDefinition, ModuleDescriptor, SelectOption, SettingsField,
    SettingsSchema, Visibility,
};

/// The ShareAI module key.
pub const MODULE_KEY: &str = "shareai";

/// ShareAI module definition.
pub struct ShareAiModule {
    descriptor: ModuleDescriptor,
    schema: SettingsSchema,
}

impl ShareAiModule {
    /// Creates the ShareAI module.
    #[must_use]
    pub fn new() -> Self {
        let descriptor = ModuleDescriptor {
            id: ModuleId::new(MODULE_KEY).expect("static key is valid"),
            name: "ShareAI".to_string(),
            description: "Community-powered AI inference for booking assistance".to_string(),
            icon: "dashicons-share".to_string(),
            category: ModuleCategory::AiProvider,
            access_level: AccessLevel::Free,
            priority: 10,
            has_settings: true,
            has_admin_page: false,
            visibility: Visibility::Visible,
        };
        let schema = SettingsSchema::new(vec![
            SettingsField::password("api_key", "API Key")
                .with_description("Key from your ShareAI account page")
                .required(),
            SettingsField::select(
                "model",
                "Model",
                vec![
                    SelectOption::new("standard", "Standard"),
                    SelectOption::new("turbo", "Turbo"),
                ],
            )
            .with_description("Model used for booking assistance replies"),
        ])
        .with_default("model", json!("standard"));

        Self { descriptor, schema }
    }
}

impl Default for ShareAiModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDefinition for ShareAiModule {
    fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    fn settings_schema(&self) -> &SettingsSchema {
        &self.schema
    }
}
