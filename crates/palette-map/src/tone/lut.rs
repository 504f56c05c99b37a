//! Gamma lookup table
//!
//! Gamma is a per-sample function of an 8-bit value, so it is evaluated
//! once for each of the 256 possible inputs and applied by table lookup.

use crate::color::quantize;

/// 256-entry table of `v ** exponent` for `v` in `0..=255`, rounded half to
/// even and clamped to `[0, 255]`.
///
/// The exponent is applied on the 0–255 scale, not to normalised values:
/// `128 ** 1.1` is about 208, not `255 * 0.5 ** 1.1`. Unlike the contrast and
/// saturation blends, table entries are rounded rather than truncated.
#[derive(Debug, Clone)]
pub struct GammaLut {
    table: [u8; 256],
}

impl GammaLut {
    /// Build the table for `exponent`.
    pub fn new(exponent: f64) -> Self {
        let mut table = [0u8; 256];
        for (v, entry) in table.iter_mut().enumerate() {
            *entry = quantize((v as f64).powf(exponent).round_ties_even());
        }
        Self { table }
    }

    /// Look up one sample.
    #[inline]
    pub fn apply(&self, value: u8) -> u8 {
        self.table[value as usize]
    }
}
