//! Unified error type for the palette-map public API.
//!
//! Every variant is a validation failure raised before any pixel is
//! processed; the pipeline itself cannot fail once its inputs are accepted.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::palette::PaletteError;
use crate::tone::ToneError;

/// Unified error type for the palette-map public API.
///
/// Wraps the crate's validation errors for convenient `?` propagation.
///
/// # Example
///
/// ```
/// use palette_map::{MapError, Palette};
///
/// fn load_palette(list: &str) -> Result<Palette, MapError> {
///     Ok(Palette::parse_list(list)?)
/// }
///
/// assert!(matches!(load_palette(""), Err(MapError::InvalidPalette(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Empty palette or unparsable palette entry
    #[error("invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),

    /// Zero, negative or non-finite tone parameter
    #[error(transparent)]
    InvalidToneParameter(#[from] ToneError),

    /// Blend weight outside `[0, 1]` or not finite
    #[error("blend weight {0} is outside [0, 1]")]
    InvalidBlendWeight(f64),

    /// Pixel buffer shape does not match its samples
    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(#[from] BufferError),
}
