use crate::constants::{HOW_TO, LINK_LIST};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

bitflags! {
    /// Represents the set of page sections the root component renders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SectionSet: u32 {
        const LINK_LIST = 1 << 0;
        const HOW_TO = 1 << 1;

        const ALL = Self::LINK_LIST.bits() | Self::HOW_TO.bits();
    }
}

impl Default for SectionSet {
    /// Every section is visible unless configured otherwise.
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for SectionSet {
    fn from(s: &str) -> Self {
        match s {
            LINK_LIST => Self::LINK_LIST,
            HOW_TO => Self::HOW_TO,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for SectionSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for SectionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for SectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
