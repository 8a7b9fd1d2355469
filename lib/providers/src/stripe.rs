//! Stripe payment gateway module.
//!
//! Premium-only gateway. Payment processing hooks bind during activation and
//! pass through the capability gate first: on a free tier the hooks are
//! simply never bound, so the processing path is unreachable rather than
//! erroring.

use serde_json::json;
use slotwise_core::ModuleId;
use slotwise_licensing::{AccessLevel, CapabilityContext};
use slotwise_module::{
    HookRegistrar, ModuleCategory, ModuleDefinition, ModuleDescriptor, SettingsField,
    SettingsSchema, Visibility,
};

/// The Stripe module key.
pub const MODULE_KEY: &str = "stripe";

/// Hook name for charging a booking through Stripe.
pub const PROCESS_PAYMENT_HOOK: &str = "process_stripe_payment";

/// Stripe module definition.
pub struct StripeModule {
    descriptor: ModuleDescriptor,
    schema: SettingsSchema,
}

impl StripeModule {
    /// Creates the Stripe module.
    #[must_use]
    pub fn new() -> Self {
        let descriptor = ModuleDescriptor {
            id: ModuleId::new(MODULE_KEY).expect("static key is valid"),
            name: "Stripe".to_string(),
            description: "Card payments for paid bookings".to_string(),
            icon: "dashicons-money-alt".to_string(),
            category: ModuleCategory::Payment,
            access_level: AccessLevel::Premium,
            priority: 10,
            has_settings: true,
            has_admin_page: true,
            visibility: Visibility::Visible,
        };
        let schema = SettingsSchema::new(vec![
            SettingsField::text("publishable_key", "Publishable key").required(),
            SettingsField::password("secret_key", "Secret key")
                .with_description("Never shared with the browser")
                .required(),
            SettingsField::checkbox("test_mode", "Test mode")
                .with_description("Use Stripe test keys and sandbox charges"),
        ])
        .with_default("test_mode", json!(false));

        Self { descriptor, schema }
    }
}

impl Default for StripeModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDefinition for StripeModule {
    fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    fn settings_schema(&self) -> &SettingsSchema {
        &self.schema
    }

    fn register_hooks(&self, registrar: &mut HookRegistrar, ctx: &CapabilityContext) {
        if !ctx.can_use_premium() {
            return;
        }
        registrar.bind(PROCESS_PAYMENT_HOOK, |mut payload| {
            if let Some(booking) = payload.as_object_mut() {
                booking.insert("gateway".to_string(), json!("stripe"));
                booking.insert("captured".to_string(), json!(true));
            }
            payload
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_identity() {
        let module = StripeModule::new();
        let descriptor = module.descriptor();

        assert_eq!(descriptor.id.as_str(), "stripe");
        assert_eq!(descriptor.category, ModuleCategory::Payment);
        assert_eq!(descriptor.access_level, AccessLevel::Premium);
        assert!(descriptor.has_admin_page);
    }

    #[test]
    fn free_tier_never_binds_payment_hook() {
        let module = StripeModule::new();
        let mut registrar = HookRegistrar::new();
        module.register_hooks(&mut registrar, &CapabilityContext::free());
        assert!(!registrar.has_hook(PROCESS_PAYMENT_HOOK));
        assert!(registrar.is_empty());
    }

    #[test]
    fn premium_tier_binds_and_processes_payment() {
        let module = StripeModule::new();
        let mut registrar = HookRegistrar::new();
        module.register_hooks(&mut registrar, &CapabilityContext::premium());
        assert!(registrar.has_hook(PROCESS_PAYMENT_HOOK));

        let charged = registrar.dispatch(
            PROCESS_PAYMENT_HOOK,
            json!({"booking_id": 7, "amount": 4200}),
        );
        assert_eq!(charged["gateway"], "stripe");
        assert_eq!(charged["captured"], true);
        assert_eq!(charged["amount"], 4200);
    }

    #[test]
    fn defaults_match_schema() {
        let module = StripeModule::new();
        assert!(module.settings_schema().check().is_ok());
    }
}
