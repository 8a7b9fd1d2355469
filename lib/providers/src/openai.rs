//! OpenAI provider module.
//!
//! Premium AI backend. On a free-tier installation the module is listed but
//! its privileged behavior stays inert.

use serde_json::json;
use slotwise_core::ModuleId;
use slotwise_licensing::AccessLevel;
use slotwise_module::{
    ModuleCategory, ModuleDefinition, ModuleDescriptor, SelectOption, SettingsField,
    SettingsSchema, Visibility,
};

/// The OpenAI module key.
pub const MODULE_KEY: &str = "openai";

/// OpenAI module definition.
pub struct OpenAiModule {
    descriptor: ModuleDescriptor,
    schema: SettingsSchema,
}

impl OpenAiModule {
    /// Creates the OpenAI module.
    #[must_use]
    pub fn new() -> Self {
        let descriptor = ModuleDescriptor {
            id: ModuleId::new(MODULE_KEY).expect("static key is valid"),
            name: "OpenAI".to_string(),
            description: "GPT-backed booking assistance and reply drafting".to_string(),
            icon: "dashicons-admin-generic".to_string(),
            category: ModuleCategory::AiProvider,
            access_level: AccessLevel::Premium,
            priority: 20,
            has_settings: true,
            has_admin_page: false,
            visibility: Visibility::Visible,
        };
        let schema = SettingsSchema::new(vec![
            SettingsField::password("api_key", "API Key")
                .with_description("Secret key from the OpenAI dashboard")
                .required(),
            SettingsField::select(
                "model",
                "Model",
                vec![
                    SelectOption::new("gpt-4o-mini", "GPT-4o mini"),
                    SelectOption::new("gpt-4o", "GPT-4o"),
                ],
            ),
            SettingsField::number("max_tokens", "Max tokens")
                .with_description("Upper bound for generated replies"),
        ])
        .with_default("model", json!("gpt-4o-mini"))
        .with_default("max_tokens", json!(512));

        Self { descriptor, schema }
    }
}

impl Default for OpenAiModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDefinition for OpenAiModule {
    fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    fn settings_schema(&self) -> &SettingsSchema {
        &self.schema
    }
}
