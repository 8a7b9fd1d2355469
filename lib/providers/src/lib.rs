//! Built-in provider modules for the slotwise platform.
//!
//! Each module wires a descriptor, a settings schema, and lifecycle hooks
//! into the module contract. Wire-level probe implementations live with the
//! surrounding transport, not here.

pub mod openai;
pub mod shareai;
pub mod stripe;

pub use openai::OpenAiModule;
pub use shareai::ShareAiModule;
pub use stripe::StripeModule;

use slotwise_module::{Registry, RegistryError};
use std::sync::Arc;

/// Registers the built-in modules.
///
/// # Errors
///
/// Returns the first registration error; with a fresh registry this only
/// happens if a built-in module is already registered.
pub fn register_defaults(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Arc::new(ShareAiModule::new()))?;
    registry.register(Arc::new(OpenAiModule::new()))?;
    registry.register(Arc::new(StripeModule::new()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotwise_core::ModuleId;
    use slotwise_module::ModuleCategory;

    #[test]
    fn defaults_register_cleanly() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).expect("built-ins should register");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn ai_providers_listed_in_priority_order() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).expect("built-ins should register");

        let ids: Vec<&str> = registry
            .list_by_category(ModuleCategory::AiProvider)
            .map(|m| m.descriptor().id.as_str())
            .collect();
        assert_eq!(ids, ["shareai", "openai"]);
    }

    #[test]
    fn registering_defaults_twice_fails_on_duplicate() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).expect("first pass should register");
        let err = register_defaults(&mut registry).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateModuleId { .. }));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_by_key() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).expect("built-ins should register");

        let stripe = registry
            .get(&ModuleId::new("stripe").expect("valid key"))
            .expect("stripe should resolve");
        assert_eq!(stripe.descriptor().name, "Stripe");
    }

    mod verification_flow {
        use super::*;
        use async_trait::async_trait;
        use slotwise_licensing::CapabilityContext;
        use slotwise_verify::{
            CredentialsRef, Probe, ProbeOutcome, SessionTokens, VerificationController,
            VerificationOutcome, VerificationRequest, VerificationStatus,
        };

        struct AcceptingProbe;

        #[async_trait]
        impl Probe for AcceptingProbe {
            async fn probe(&self, _credentials: &CredentialsRef) -> ProbeOutcome {
                ProbeOutcome::Authorized
            }
        }

        fn controller() -> (Arc<VerificationController>, Arc<SessionTokens>) {
            let mut registry = Registry::new();
            register_defaults(&mut registry).expect("built-ins should register");
            let tokens = Arc::new(SessionTokens::new());
            let controller = Arc::new(VerificationController::new(
                Arc::new(registry),
                tokens.clone(),
            ));
            (controller, tokens)
        }

        #[tokio::test]
        async fn shareai_round_trip_renders_success_notice() {
            let (controller, tokens) = controller();
            let id = ModuleId::new("shareai").expect("valid key");
            controller.bind_trigger(id.clone(), "Test ShareAI Connection");
            controller.connect_probe(id.clone(), Arc::new(AcceptingProbe));

            let request = VerificationRequest::new(
                id.clone(),
                CredentialsRef::new("settings:shareai:api_key"),
                tokens.issue(),
            );
            let outcome = controller
                .run(&request, &CapabilityContext::free())
                .await
                .expect("verification should not hard-fail");

            match outcome {
                VerificationOutcome::Rendered(result) => {
                    assert_eq!(result.status, VerificationStatus::Success);
                    assert_eq!(result.message, "ShareAI connection successful!");
                }
                other => panic!("expected Rendered, got {other:?}"),
            }

            let panel = controller.panel(&id).expect("panel should be bound");
            assert!(panel.enabled);
            assert_eq!(panel.label, "Test ShareAI Connection");
            assert!(panel.notice.is_some());
        }

        #[tokio::test]
        async fn stripe_on_free_tier_is_silently_denied() {
            let (controller, tokens) = controller();
            let id = ModuleId::new("stripe").expect("valid key");
            controller.bind_trigger(id.clone(), "Test Stripe Connection");
            controller.connect_probe(id.clone(), Arc::new(AcceptingProbe));

            let request = VerificationRequest::new(
                id.clone(),
                CredentialsRef::new("settings:stripe:secret_key"),
                tokens.issue(),
            );
            let outcome = controller
                .run(&request, &CapabilityContext::free())
                .await
                .expect("gate denial is never an error");

            assert_eq!(outcome, VerificationOutcome::Denied);
            let panel = controller.panel(&id).expect("panel should be bound");
            assert!(panel.enabled);
            assert!(panel.notice.is_none());
        }
    }
}
