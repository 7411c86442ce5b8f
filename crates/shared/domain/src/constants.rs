//! Canonical capability name strings shared between config files, the
//! `NBGATE_CAPABILITIES` override, and log output.

pub const RICH_DISPLAY: &str = "rich-display";
pub const INTERACTIVE_MAP: &str = "interactive-map";
