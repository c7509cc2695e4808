//! Layer affinity of entities

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TraceError};

bitflags! {
    /// Which reference image(s) an entity belongs to.
    ///
    /// An entity with `BOTH` is drawn on every layer; one with exactly `TOP`
    /// or `BOTTOM` is drawn only when that layer is being rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerAffinity: u8 {
        /// No layer.
        const NONE = 0;
        /// Top side image.
        const TOP = 1;
        /// Bottom side image.
        const BOTTOM = 2;
        /// Both images.
        const BOTH = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl LayerAffinity {
    /// Textual name used by the persistence format
    pub fn name(&self) -> &'static str {
        match self.bits() {
            0 => "NONE",
            1 => "TOP",
            2 => "BOTTOM",
            _ => "BOTH",
        }
    }

    /// Whether an entity with this affinity is drawn on `target`
    pub fn is_drawn_on(&self, target: LayerAffinity) -> bool {
        *self == LayerAffinity::BOTH || *self == target
    }
}

impl Default for LayerAffinity {
    fn default() -> Self {
        LayerAffinity::BOTH
    }
}

impl fmt::Display for LayerAffinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerAffinity {
    type Err = TraceError;

    /// Parse a layer name (`NONE`, `TOP`, `BOTTOM`, `BOTH`) or its numeric value
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NONE" => Ok(LayerAffinity::NONE),
            "TOP" => Ok(LayerAffinity::TOP),
            "BOTTOM" => Ok(LayerAffinity::BOTTOM),
            "BOTH" => Ok(LayerAffinity::BOTH),
            _ => s
                .parse::<u8>()
                .ok()
                .and_then(LayerAffinity::from_bits)
                .ok_or_else(|| TraceError::InvalidLayer {
                    token: s.to_string(),
                }),
        }
    }
}
