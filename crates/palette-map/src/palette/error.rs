//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use thiserror::Error;

use crate::color::Color;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string has the wrong number of digits or
/// contains characters that are not hexadecimal digits. Both variants carry
/// the offending input so a caller can point at it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length in {0:?} (expected 3 or 6 digits)")]
    InvalidLength(String),
    /// Non-hexadecimal character encountered
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}

/// Error type for palette validation.
///
/// Every variant is a configuration error: it is raised while the palette is
/// being built, before any image is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Invalid hex color string at the given position of the input list
    #[error("invalid color at position {index}: {source}")]
    ParseColor {
        /// Position of the offending entry
        index: usize,
        /// The underlying parse failure
        #[source]
        source: ParseColorError,
    },
    /// A color component is NaN or infinite, which has no position in the
    /// nearest-color ordering
    #[error("palette color at position {index} has a non-finite component")]
    NonFiniteColor {
        /// Position of the offending entry
        index: usize,
    },
}

impl PaletteError {
    /// Check that `colors` can be matched against: at least one color and
    /// every component finite.
    pub(crate) fn check_colors(colors: &[Color]) -> Result<(), PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        match colors.iter().position(|c| !c.is_finite()) {
            Some(index) => Err(PaletteError::NonFiniteColor { index }),
            None => Ok(()),
        }
    }
}
