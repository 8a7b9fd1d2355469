//! The module registry.
//!
//! Process-wide collection of every registered provider module. Initialized
//! once at startup, injected into consumers, and never torn down during
//! normal operation; modules are not unregistered.

use crate::definition::ModuleDefinition;
use crate::descriptor::{ModuleCategory, Visibility};
use crate::error::RegistryError;
use crate::hooks::HookRegistrar;
use slotwise_core::ModuleId;
use slotwise_licensing::CapabilityContext;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of provider modules.
///
/// Registration order is preserved and used as the tie-breaker when listing
/// modules of equal priority.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Arc<dyn ModuleDefinition>>,
    index: HashMap<ModuleId, usize>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module.
    ///
    /// On any error the registry is left unchanged and the module does not
    /// become available; other modules are unaffected.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidDescriptor`] for a descriptor missing
    ///   required fields or a structurally broken settings schema
    /// - [`RegistryError::SchemaMismatch`] when a default-settings key has no
    ///   matching field
    /// - [`RegistryError::DuplicateModuleId`] when the id is already taken
    pub fn register(&mut self, module: Arc<dyn ModuleDefinition>) -> Result<(), RegistryError> {
        let descriptor = module.descriptor();
        descriptor.validate()?;
        let id = descriptor.id.clone();

        let schema = module.settings_schema();
        if let Some(key) = schema.first_unknown_default() {
            return Err(RegistryError::SchemaMismatch {
                id,
                key: key.to_string(),
            });
        }
        if let Err(err) = schema.check() {
            return Err(RegistryError::InvalidDescriptor {
                id,
                reason: format!("settings schema: {err}"),
            });
        }

        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateModuleId { id });
        }

        debug!(module = %id, category = ?descriptor.category, "module registered");
        self.index.insert(id, self.entries.len());
        self.entries.push(module);
        Ok(())
    }

    /// Registers a batch of modules, skipping the ones that fail.
    ///
    /// A failed registration is fatal to that module only; it is logged for
    /// operators and returned, and the remaining modules still register.
    pub fn register_all(
        &mut self,
        modules: impl IntoIterator<Item = Arc<dyn ModuleDefinition>>,
    ) -> Vec<RegistryError> {
        let mut rejected = Vec::new();
        for module in modules {
            if let Err(err) = self.register(module) {
                warn!(error = %err, "module registration rejected");
                rejected.push(err);
            }
        }
        rejected
    }

    /// Looks up a module by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModuleNotFound`] if no module has the id.
    pub fn get(&self, id: &ModuleId) -> Result<&Arc<dyn ModuleDefinition>, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| RegistryError::ModuleNotFound { id: id.clone() })
    }

    /// Returns all modules in priority order.
    ///
    /// Lower priority sorts first; ties keep registration order. The
    /// iterator is finite and a fresh one can be obtained at any time.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ModuleDefinition>> {
        let mut ordered: Vec<&Arc<dyn ModuleDefinition>> = self.entries.iter().collect();
        ordered.sort_by_key(|m| m.descriptor().priority);
        ordered.into_iter()
    }

    /// Returns the modules of one category in priority order.
    pub fn list_by_category(
        &self,
        category: ModuleCategory,
    ) -> impl Iterator<Item = &Arc<dyn ModuleDefinition>> {
        let mut ordered: Vec<&Arc<dyn ModuleDefinition>> = self
            .entries
            .iter()
            .filter(|m| m.descriptor().category == category)
            .collect();
        ordered.sort_by_key(|m| m.descriptor().priority);
        ordered.into_iter()
    }

    /// Returns the visible modules in priority order.
    pub fn visible(&self) -> impl Iterator<Item = &Arc<dyn ModuleDefinition>> {
        self.iter()
            .filter(|m| m.descriptor().visibility == Visibility::Visible)
    }

    /// Runs hook registration for every module under the given context.
    ///
    /// Modules are activated in priority order. Capability gating happens
    /// inside each module's `register_hooks`.
    pub fn activate_all(&self, registrar: &mut HookRegistrar, ctx: &CapabilityContext) {
        for module in self.iter() {
            module.register_hooks(registrar, ctx);
        }
        debug!(hooks = registrar.len(), "module hooks bound");
    }

    /// Returns the number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no modules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.entries.iter().map(|m| m.descriptor().id.as_str()).collect();
        f.debug_struct("Registry").field("modules", &ids).finish()
    }
}
