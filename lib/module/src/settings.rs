//! Settings schemas for provider modules.
//!
//! Each module declares an ordered list of settings fields plus default
//! values. Declaration order is significant: the admin surface renders fields
//! in the order they appear here. Fields belong to exactly one schema; there
//! is no cross-module sharing.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// The input type of a settings field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Masked secret input.
    Password,
    /// Drop-down selection.
    Select {
        /// The selectable options, in render order.
        options: Vec<SelectOption>,
    },
    /// Boolean toggle.
    Checkbox,
    /// Numeric input.
    Number,
}

/// One option of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Stored value.
    pub value: String,
    /// Label shown to the admin.
    pub label: String,
}

impl SelectOption {
    /// Creates a select option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single settings field of a module's configuration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsField {
    /// Unique key within the schema.
    pub key: String,
    /// Input type.
    pub field_type: FieldType,
    /// Label shown next to the input.
    pub label: String,
    /// Help text shown below the input.
    pub description: String,
    /// Whether a value must be present.
    pub required: bool,
}

impl SettingsField {
    fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            field_type,
            label: label.into(),
            description: String::new(),
            required: false,
        }
    }

    /// Creates a text field.
    #[must_use]
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    /// Creates a password field.
    #[must_use]
    pub fn password(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Password)
    }

    /// Creates a select field with the given options.
    #[must_use]
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(key, label, FieldType::Select { options })
    }

    /// Creates a checkbox field.
    #[must_use]
    pub fn checkbox(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Checkbox)
    }

    /// Creates a number field.
    #[must_use]
    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Number)
    }

    /// Adds help text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Ordered settings fields plus defaults for one module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsSchema {
    fields: Vec<SettingsField>,
    defaults: HashMap<String, JsonValue>,
}

impl SettingsSchema {
    /// Creates a schema from an ordered field list.
    #[must_use]
    pub fn new(fields: Vec<SettingsField>) -> Self {
        Self {
            fields,
            defaults: HashMap::new(),
        }
    }

    /// Creates a schema with no fields, for modules without settings.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a default value for a field key.
    #[must_use]
    pub fn with_default(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.defaults.insert(key.into(), value);
        self
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &SettingsField> {
        self.fields.iter()
    }

    /// Returns the default values.
    #[must_use]
    pub fn defaults(&self) -> &HashMap<String, JsonValue> {
        &self.defaults
    }

    /// Returns true if a field with the given key exists.
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks structural integrity of the schema itself.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::DuplicateKey`] if two fields share a key, or
    /// [`SettingsError::UnknownKey`] if a default value targets a key with no
    /// matching field.
    pub fn check(&self) -> Result<(), SettingsError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.key == field.key) {
                return Err(SettingsError::DuplicateKey {
                    key: field.key.clone(),
                });
            }
        }
        if let Some(key) = self.first_unknown_default() {
            return Err(SettingsError::UnknownKey {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the first default-value key without a matching field, if any.
    ///
    /// The registry maps this to its schema-mismatch registration error.
    #[must_use]
    pub fn first_unknown_default(&self) -> Option<&str> {
        let mut keys: Vec<&String> = self
            .defaults
            .keys()
            .filter(|key| !self.has_field(key))
            .collect();
        // Deterministic reporting regardless of map iteration order.
        keys.sort();
        keys.first().map(|key| key.as_str())
    }

    /// Validates submitted settings values against this schema.
    ///
    /// A required field passes when it has a submitted value or a default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownKey`] for values targeting no field,
    /// or [`SettingsError::MissingRequired`] for required fields left without
    /// a value.
    pub fn validate_values(&self, values: &HashMap<String, JsonValue>) -> Result<(), SettingsError> {
        let mut submitted: Vec<&String> = values.keys().collect();
        submitted.sort();
        for key in submitted {
            if !self.has_field(key) {
                return Err(SettingsError::UnknownKey { key: key.clone() });
            }
        }
        for field in &self.fields {
            if field.required
                && !values.contains_key(&field.key)
                && !self.defaults.contains_key(&field.key)
            {
                return Err(SettingsError::MissingRequired {
                    key: field.key.clone(),
                });
            }
        }
        Ok(())
    }
}
