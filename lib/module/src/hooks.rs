//! Lifecycle hook registration.
//!
//! During activation each module binds named hooks (e.g.
//! `process_stripe_payment`) into a [`HookRegistrar`]. The surrounding
//! platform later dispatches payloads through the bound callbacks. Premium
//! hooks must pass the capability gate before binding, so on a free tier the
//! corresponding hook names simply never appear in the registrar.

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A bound hook callback.
///
/// Hooks receive the current payload and return the (possibly transformed)
/// payload, filter-style.
pub type HookFn = Arc<dyn Fn(JsonValue) -> JsonValue + Send + Sync>;

/// Collects named hook bindings during module activation.
///
/// Multiple callbacks may bind to one name; dispatch threads the payload
/// through them in binding order.
#[derive(Default)]
pub struct HookRegistrar {
    hooks: HashMap<String, Vec<HookFn>>,
}

impl HookRegistrar {
    /// Creates an empty registrar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a callback to a hook name.
    pub fn bind<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(JsonValue) -> JsonValue + Send + Sync + 'static,
    {
        self.hooks
            .entry(name.into())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Returns true if at least one callback is bound to the name.
    #[must_use]
    pub fn has_hook(&self, name: &str) -> bool {
        self.hooks.get(name).is_some_and(|cbs| !cbs.is_empty())
    }

    /// Returns how many callbacks are bound to the name.
    #[must_use]
    pub fn hook_count(&self, name: &str) -> usize {
        self.hooks.get(name).map_or(0, Vec::len)
    }

    /// Returns the bound hook names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Threads a payload through every callback bound to the name.
    ///
    /// With no bound callbacks the payload passes through unchanged.
    #[must_use]
    pub fn dispatch(&self, name: &str, payload: JsonValue) -> JsonValue {
        match self.hooks.get(name) {
            Some(callbacks) => callbacks.iter().fold(payload, |value, cb| cb(value)),
            None => payload,
        }
    }

    /// Returns the number of distinct bound hook names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookRegistrar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.names() {
            map.entry(&name, &self.hook_count(name));
        }
        map.finish()
    }
}
