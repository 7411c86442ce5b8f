use nbgate_domain::capability::CapabilitySet;
use nbgate_domain::config::GateConfig;
use tracing::warn;

/// Gates rich display output on runtime capabilities.
///
/// A gate carries an explicit [`CapabilitySet`]; there is no process-wide
/// flag. Call sites that produce rich display objects (inline maps, widgets)
/// run through [`DisplayGate::run`]: when the required capability is present
/// the produced value is returned unchanged, otherwise the call still runs
/// for its side effects but the value is suppressed and `None` is returned.
#[derive(Debug, Clone, Copy)]
pub struct DisplayGate {
    capabilities: CapabilitySet,
    warn_on_suppress: bool,
}

impl DisplayGate {
    /// Creates a gate over an explicit capability set.
    #[must_use]
    pub const fn new(capabilities: CapabilitySet) -> Self {
        Self { capabilities, warn_on_suppress: true }
    }

    /// Creates a gate from a [`GateConfig`].
    #[must_use]
    pub const fn from_config(config: &GateConfig) -> Self {
        Self { capabilities: config.capabilities, warn_on_suppress: config.warn_on_suppress }
    }

    /// Creates a gate from process-environment detection (see [`crate::detect()`]).
    #[must_use]
    pub fn detected() -> Self {
        Self::new(crate::detect::detect())
    }

    /// Capabilities this gate was built with.
    #[must_use]
    pub const fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// Returns `true` when every capability in `required` is available.
    #[must_use]
    pub const fn supports(&self, required: CapabilitySet) -> bool {
        self.capabilities.contains(required)
    }

    /// Runs `f` and returns its result only when `required` is available.
    ///
    /// `f` runs in both branches so its side effects happen either way; when a
    /// required capability is missing the result is discarded, a warning is
    /// emitted (unless disabled via [`GateConfig::warn_on_suppress`]), and
    /// `None` is returned. Panics raised by `f` propagate unchanged, and a
    /// `Result`-returning `f` surfaces as `Option<Result<..>>` untouched.
    pub fn run<T>(&self, required: CapabilitySet, f: impl FnOnce() -> T) -> Option<T> {
        if self.supports(required) {
            return Some(f());
        }

        let _ = f();
        if self.warn_on_suppress {
            warn!(
                required = ?required,
                available = ?self.capabilities,
                "rich display output suppressed: capability not available"
            );
        }
        None
    }

    /// Decorator form of [`DisplayGate::run`]: wraps `f` into a reusable gated
    /// closure.
    pub fn wrap<T, F>(self, required: CapabilitySet, f: F) -> impl Fn() -> Option<T>
    where
        F: Fn() -> T,
    {
        move || self.run(required, &f)
    }
}

impl Default for DisplayGate {
    /// A gate with no capabilities: everything gated is suppressed.
    fn default() -> Self {
        Self::new(CapabilitySet::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_checks_subset() {
        let gate = DisplayGate::new(CapabilitySet::RICH_DISPLAY);

        assert!(gate.supports(CapabilitySet::RICH_DISPLAY));
        assert!(gate.supports(CapabilitySet::empty()));
        assert!(!gate.supports(CapabilitySet::ALL));
    }

    #[test]
    fn default_gate_suppresses_everything() {
        let gate = DisplayGate::default();

        assert_eq!(gate.run(CapabilitySet::RICH_DISPLAY, || 42), None);
        assert!(gate.capabilities().is_empty());
    }
}
