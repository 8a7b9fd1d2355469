//! The module contract.
//!
//! Every provider module implements [`ModuleDefinition`], supplying its
//! static descriptor, its settings schema, and its lifecycle hook bindings.

use crate::descriptor::ModuleDescriptor;
use crate::hooks::HookRegistrar;
use crate::settings::SettingsSchema;
use slotwise_licensing::CapabilityContext;

/// Contract implemented by every provider module.
///
/// Implementations are pure data carriers: the descriptor and schema are
/// built once at construction and never mutated afterwards.
pub trait ModuleDefinition: Send + Sync {
    /// Returns the module's static descriptor.
    fn descriptor(&self) -> &ModuleDescriptor;

    /// Returns the module's settings schema.
    ///
    /// Modules without settings return an empty schema.
    fn settings_schema(&self) -> &SettingsSchema;

    /// Binds the module's lifecycle hooks.
    ///
    /// Premium-gated hooks must check `ctx.can_use_premium()` first and
    /// silently skip binding when denied; activation never fails because of
    /// licensing.
    fn register_hooks(&self, _registrar: &mut HookRegistrar, _ctx: &CapabilityContext) {}
}
