//! Fixed series color palette.

use serde::{Deserialize, Serialize};

/// RGB color attached to a chart dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    /// CSS-style hex form, e.g. `#1f77b4`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Five-color palette cycled by dataset sequence number.
pub const PALETTE: [SeriesColor; 5] = [
    SeriesColor {
        r: 0x1f,
        g: 0x77,
        b: 0xb4,
    },
    SeriesColor {
        r: 0xff,
        g: 0x7f,
        b: 0x0e,
    },
    SeriesColor {
        r: 0x2c,
        g: 0xa0,
        b: 0x2c,
    },
    SeriesColor {
        r: 0xd6,
        g: 0x27,
        b: 0x28,
    },
    SeriesColor {
        r: 0x94,
        g: 0x67,
        b: 0xbd,
    },
];

/// Deterministic palette assignment for a 1-based dataset sequence number.
///
/// Cycles after five; with the five-dataset session cap the cycle is never
/// reached in practice.
pub fn color_for_sequence(seq: u32) -> SeriesColor {
    PALETTE[(seq.saturating_sub(1) as usize) % PALETTE.len()]
}
