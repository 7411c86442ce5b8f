use nbgate_domain::capability::CapabilitySet;
use std::env;
use tracing::debug;

/// Environment variable naming capabilities to force on, comma-separated
/// (e.g., `NBGATE_CAPABILITIES=rich-display,interactive-map` or `*`).
pub const CAPABILITIES_ENV: &str = "NBGATE_CAPABILITIES";

// Markers set by Jupyter-family frontends for spawned kernels.
const FRONTEND_MARKERS: &[&str] = &["JPY_SESSION_NAME", "JPY_PARENT_PID", "JUPYTER_SERVER_URL"];

/// Detects display capabilities from the process environment.
///
/// An attached notebook frontend enables all display capabilities; the
/// [`CAPABILITIES_ENV`] override additionally enables the named ones.
#[must_use]
pub fn detect() -> CapabilitySet {
    detect_with(|key| env::var(key).ok())
}

/// Detection against an arbitrary variable lookup.
///
/// [`detect`] calls this with the process environment; tests and embedders can
/// supply their own lookup.
pub fn detect_with<F>(lookup: F) -> CapabilitySet
where
    F: Fn(&str) -> Option<String>,
{
    let mut caps = CapabilitySet::empty();

    if FRONTEND_MARKERS.iter().any(|key| lookup(key).is_some()) {
        caps |= CapabilitySet::ALL;
    }

    if let Some(names) = lookup(CAPABILITIES_ENV) {
        for name in names.split(',') {
            caps |= CapabilitySet::from(name.trim());
        }
    }

    debug!(capabilities = ?caps, "display capability detection finished");
    caps
}
