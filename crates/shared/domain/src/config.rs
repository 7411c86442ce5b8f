use crate::capability::CapabilitySet;
use serde::Deserialize;

/// Display gate configuration.
///
/// Deliberately explicit: a gate is built from this config (or a detected
/// capability set) rather than from process-wide mutable state, so two gates
/// with different capabilities can coexist in one process.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Capabilities available in the current runtime environment.
    pub capabilities: CapabilitySet,
    /// Emit a warning when a gated result is suppressed.
    pub warn_on_suppress: bool,
}

// --- Default ---

impl Default for GateConfig {
    fn default() -> Self {
        // Conservative: suppress unless the environment was positively
        // detected or configured.
        Self { capabilities: CapabilitySet::empty(), warn_on_suppress: true }
    }
}
