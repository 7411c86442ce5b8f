use crate::constants::{INTERACTIVE_MAP, RICH_DISPLAY};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Represents a set of runtime display capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CapabilitySet: u32 {
        const RICH_DISPLAY = 1 << 0;
        const INTERACTIVE_MAP = 1 << 1;

        const ALL = Self::RICH_DISPLAY.bits() | Self::INTERACTIVE_MAP.bits();
    }
}

impl From<&str> for CapabilitySet {
    fn from(s: &str) -> Self {
        match s {
            RICH_DISPLAY => Self::RICH_DISPLAY,
            INTERACTIVE_MAP => Self::INTERACTIVE_MAP,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for CapabilitySet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
