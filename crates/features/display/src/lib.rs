//! Display gate feature slice.
//!
//! Decides whether rich interactive-notebook output (inline maps, widgets) is
//! surfaced or suppressed. The gate holds an explicit capability set; when a
//! required capability is missing, gated calls still run for their side
//! effects but return `None` instead of the produced value, with a warning.
//!
//! ## Usage
//! ```rust
//! use nbgate_display::{CapabilitySet, DisplayGate};
//!
//! let gate = DisplayGate::new(CapabilitySet::RICH_DISPLAY);
//! assert_eq!(gate.run(CapabilitySet::RICH_DISPLAY, || "map"), Some("map"));
//!
//! let headless = DisplayGate::default();
//! assert_eq!(headless.run(CapabilitySet::RICH_DISPLAY, || "map"), None);
//! ```
//!
//! Capabilities come from explicit configuration ([`GateConfig`], see
//! [`load_config`]) or from environment detection ([`detect()`]).

mod config;
mod detect;
mod error;
mod gate;

pub use crate::config::load_config;
pub use crate::detect::{CAPABILITIES_ENV, detect, detect_with};
pub use crate::error::{DisplayError, DisplayErrorExt};
pub use crate::gate::DisplayGate;
pub use nbgate_domain as domain;
pub use nbgate_domain::capability::CapabilitySet;
pub use nbgate_domain::config::GateConfig;
