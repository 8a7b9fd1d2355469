//! The verification controller.
//!
//! Orchestrates one "test connection" round trip per trigger: flips the
//! trigger control into its testing state, dispatches the probe through the
//! category verifier, renders the normalized result, and restores the
//! trigger on every path.
//!
//! Per-module trigger state:
//!
//! ```text
//! Idle -> Testing -> (Success | Failure | TransportError) -> Idle
//! ```
//!
//! The result states are transient: rendering and the unconditional return
//! to `Idle` happen in one step, so the observable phases are `Idle` and
//! `Testing`. One verification may be outstanding per module at a time,
//! enforced by the disabled trigger rather than a lock; verifications for
//! different modules are independent and may overlap.

use crate::error::ControllerError;
use crate::probe::Probe;
use crate::request::VerificationRequest;
use crate::token::TokenValidator;
use crate::verifier::{CategoryVerifier, ConnectionVerifier, VerificationResult};
use rootcause::prelude::Report;
use slotwise_core::ModuleId;
use slotwise_licensing::CapabilityContext;
use slotwise_module::Registry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Observable phase of a module's trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    /// The trigger is enabled and waiting for the user.
    Idle,
    /// A verification is in flight; the trigger is disabled.
    Testing,
}

/// How a trigger request was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// The verification ran and its result was rendered.
    Rendered(VerificationResult),
    /// A verification was already in flight for this module.
    Ignored,
    /// The freshness token was missing or stale; refused before any
    /// state transition.
    Refused,
    /// The module requires premium access the context does not license.
    /// Silent no-op: nothing is rendered and no error is raised.
    Denied,
    /// The verification completed after its trigger was unbound; the
    /// result was dropped. Not a fault.
    Discarded,
}

/// Snapshot of a module's trigger panel for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    /// Current phase.
    pub phase: TriggerPhase,
    /// Whether the trigger control accepts clicks.
    pub enabled: bool,
    /// Label currently shown on the trigger control.
    pub label: String,
    /// The at-most-one rendered result notice.
    pub notice: Option<VerificationResult>,
}

struct Panel {
    original_label: String,
    label: String,
    enabled: bool,
    phase: TriggerPhase,
    notice: Option<VerificationResult>,
}

impl Panel {
    fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original_label: label.clone(),
            label,
            enabled: true,
            phase: TriggerPhase::Idle,
            notice: None,
        }
    }

    fn restore(&mut self) {
        self.phase = TriggerPhase::Idle;
        self.enabled = true;
        self.label = self.original_label.clone();
    }

    fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            phase: self.phase,
            enabled: self.enabled,
            label: self.label.clone(),
            notice: self.notice.clone(),
        }
    }
}

/// Controller for per-module connection verification.
///
/// The registry is injected and read-only during verification; the
/// controller holds no other shared state between modules.
pub struct VerificationController {
    registry: Arc<Registry>,
    tokens: Arc<dyn TokenValidator>,
    probes: Mutex<HashMap<ModuleId, Arc<dyn Probe>>>,
    panels: Mutex<HashMap<ModuleId, Panel>>,
    timeout: Duration,
    testing_label: String,
}

impl VerificationController {
    /// Label used when a trigger fires without an explicit binding.
    pub const DEFAULT_TRIGGER_LABEL: &'static str = "Test Connection";

    /// Label shown on the trigger while a verification is in flight.
    pub const DEFAULT_TESTING_LABEL: &'static str = "Testing...";

    /// Message rendered when the probe exceeds the bounded timeout.
    pub const TIMEOUT_MESSAGE: &'static str =
        "The connection test timed out. Please try again.";

    /// Default bound on a single probe.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// Creates a controller over the given registry and token validator.
    #[must_use]
    pub fn new(registry: Arc<Registry>, tokens: Arc<dyn TokenValidator>) -> Self {
        Self {
            registry,
            tokens,
            probes: Mutex::new(HashMap::new()),
            panels: Mutex::new(HashMap::new()),
            timeout: Self::DEFAULT_TIMEOUT,
            testing_label: Self::DEFAULT_TESTING_LABEL.to_string(),
        }
    }

    /// Sets the probe timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the in-flight trigger label.
    #[must_use]
    pub fn with_testing_label(mut self, label: impl Into<String>) -> Self {
        self.testing_label = label.into();
        self
    }

    /// Connects the probe for a module, replacing any previous one.
    pub fn connect_probe(&self, id: ModuleId, probe: Arc<dyn Probe>) {
        self.lock_probes().insert(id, probe);
    }

    /// Binds the trigger control for a module.
    ///
    /// Rebinding is idempotent: there is exactly one active trigger per
    /// module, and binding again replaces the previous panel (including any
    /// rendered notice) with a fresh idle one.
    pub fn bind_trigger(&self, id: ModuleId, label: impl Into<String>) {
        self.lock_panels().insert(id, Panel::new(label));
    }

    /// Unbinds the trigger control for a module.
    ///
    /// An in-flight verification for the module keeps running; its result is
    /// discarded on completion since there is no target to render into.
    pub fn unbind_trigger(&self, id: &ModuleId) {
        self.lock_panels().remove(id);
    }

    /// Returns the current panel state for a module, if bound.
    #[must_use]
    pub fn panel(&self, id: &ModuleId) -> Option<PanelSnapshot> {
        self.lock_panels().get(id).map(Panel::snapshot)
    }

    /// Runs one verification round trip for the given request.
    ///
    /// Recoverable provider outcomes are rendered and returned as
    /// [`VerificationOutcome::Rendered`]; the remaining variants report why
    /// no result was rendered. On every completed path, including timeout
    /// and hard error, the trigger ends up re-enabled with its original
    /// label.
    ///
    /// # Errors
    ///
    /// Hard errors only: unknown module, no probe connected, or malformed
    /// verifier input. The trigger is restored before the error propagates.
    #[instrument(skip(self, request, ctx), fields(module = %request.module_id))]
    pub async fn run(
        &self,
        request: &VerificationRequest,
        ctx: &CapabilityContext,
    ) -> Result<VerificationOutcome, Report<ControllerError>> {
        if !self.tokens.is_fresh(&request.token) {
            warn!("verification refused: missing or stale freshness token");
            return Ok(VerificationOutcome::Refused);
        }

        let descriptor = self
            .registry
            .get(&request.module_id)
            .map_err(ControllerError::Registry)?
            .descriptor()
            .clone();

        if !ctx.allows(descriptor.access_level) {
            debug!("verification skipped: premium access not licensed");
            return Ok(VerificationOutcome::Denied);
        }

        // Idle -> Testing. Clearing the previous notice here is idempotent;
        // the disabled trigger is what prevents a duplicate in-flight run.
        {
            let mut panels = self.lock_panels();
            let panel = panels
                .entry(request.module_id.clone())
                .or_insert_with(|| Panel::new(Self::DEFAULT_TRIGGER_LABEL));
            if panel.phase == TriggerPhase::Testing {
                debug!("verification ignored: already testing");
                return Ok(VerificationOutcome::Ignored);
            }
            panel.phase = TriggerPhase::Testing;
            panel.enabled = false;
            panel.label = self.testing_label.clone();
            panel.notice = None;
        }

        let probe = self.lock_probes().get(&request.module_id).cloned();
        let Some(probe) = probe else {
            self.restore(&request.module_id);
            return Err(ControllerError::ProbeNotConnected {
                id: request.module_id.clone(),
            }
            .into());
        };

        let verifier = CategoryVerifier::for_category(descriptor.category, probe);
        let result = match tokio::time::timeout(
            self.timeout,
            verifier.verify(&descriptor, &request.credentials),
        )
        .await
        {
            Err(_elapsed) => {
                debug!(timeout = ?self.timeout, "probe exceeded timeout");
                VerificationResult::transport_error(Self::TIMEOUT_MESSAGE)
            }
            Ok(Err(err)) => {
                self.restore(&request.module_id);
                return Err(ControllerError::Verify(err).into());
            }
            Ok(Ok(result)) => result,
        };

        // Testing -> result -> Idle, in one step: render the single notice
        // and unconditionally restore the trigger.
        let mut panels = self.lock_panels();
        let Some(panel) = panels.get_mut(&request.module_id) else {
            debug!("discarding result: trigger no longer bound");
            return Ok(VerificationOutcome::Discarded);
        };
        panel.notice = Some(result.clone());
        panel.restore();
        debug!(status = ?result.status, "verification result rendered");
        Ok(VerificationOutcome::Rendered(result))
    }

    fn restore(&self, id: &ModuleId) {
        if let Some(panel) = self.lock_panels().get_mut(id) {
            panel.restore();
        }
    }

    fn lock_panels(&self) -> MutexGuard<'_, HashMap<ModuleId, Panel>> {
        self.panels.lock().unwrap()
    }

    fn lock_probes(&self) -> MutexGuard<'_, HashMap<ModuleId, Arc<dyn Probe>>> {
        self.probes.lock().unwrap()
    }
}

impl std::fmt::Debug for VerificationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationController")
            .field("modules", &self.registry.len())
            .field("probes", &self.lock_probes().len())
            .field("panels", &self.lock_panels().len())
            .field("timeout", &self.timeout)
            .finish()
    }
}
