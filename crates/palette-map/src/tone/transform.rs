//! Contrast, saturation and gamma stages over a [`PixelBuffer`].
//!
//! Contrast and saturation are both blends toward a grey reference,
//! `grey + factor * (value - grey)`; they differ only in where the grey comes
//! from. Contrast uses one grey for the whole image (its mean luma),
//! saturation uses each pixel's own luma. A factor of 1.0 reproduces the
//! input exactly, 0.0 collapses to the reference.

use super::lut::GammaLut;
use super::params::{ToneError, ToneParameters, ToneRole};
use crate::buffer::PixelBuffer;
use crate::color::{luma, quantize};

#[inline]
fn blend_toward(grey: f64, value: u8, factor: f64) -> u8 {
    quantize(grey + factor * (value as f64 - grey))
}

/// Mean luma of the image, rounded half up. `None` for an empty image.
///
/// # Example
///
/// ```
/// use palette_map::PixelBuffer;
/// use palette_map::tone::mean_luma;
///
/// let image = PixelBuffer::from_rgb(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
/// assert_eq!(mean_luma(&image), Some(128));
/// ```
pub fn mean_luma(buffer: &PixelBuffer) -> Option<u8> {
    let count = buffer.pixel_count();
    if count == 0 {
        return None;
    }
    let sum: u64 = buffer.rgb().map(|[r, g, b]| luma(r, g, b) as u64).sum();
    let mean = sum as f64 / count as f64;
    Some((mean + 0.5).floor() as u8)
}

/// Scale every channel's distance from the image's mean grey by `factor`.
pub fn apply_contrast(buffer: &PixelBuffer, factor: f64) -> PixelBuffer {
    let Some(grey) = mean_luma(buffer) else {
        return buffer.clone();
    };
    let grey = grey as f64;
    buffer.map_rgb(|_, [r, g, b]| {
        [
            blend_toward(grey, r, factor),
            blend_toward(grey, g, factor),
            blend_toward(grey, b, factor),
        ]
    })
}

/// Scale every channel's distance from its own pixel's luma by `factor`.
pub fn apply_saturation(buffer: &PixelBuffer, factor: f64) -> PixelBuffer {
    buffer.map_rgb(|_, [r, g, b]| {
        let grey = luma(r, g, b) as f64;
        [
            blend_toward(grey, r, factor),
            blend_toward(grey, g, factor),
            blend_toward(grey, b, factor),
        ]
    })
}

/// Raise every color sample to `exponent` on the 0–255 scale, rounding to
/// the nearest byte.
pub fn apply_gamma(buffer: &PixelBuffer, exponent: f64) -> PixelBuffer {
    let lut = GammaLut::new(exponent);
    buffer.map_rgb(|_, [r, g, b]| [lut.apply(r), lut.apply(g), lut.apply(b)])
}

/// Forward shaping: contrast, then saturation, then gamma.
///
/// # Errors
///
/// Returns a [`ToneError`] (named `enhance`, `saturation` or `gamma`) before
/// touching any pixel if a parameter is not a finite positive number.
pub fn apply_forward(buffer: &PixelBuffer, tone: &ToneParameters) -> Result<PixelBuffer, ToneError> {
    tone.validate(ToneRole::Forward)?;
    let contrasted = apply_contrast(buffer, tone.contrast);
    let saturated = apply_saturation(&contrasted, tone.saturation);
    Ok(apply_gamma(&saturated, tone.gamma))
}

/// Restoring shaping: contrast by `1 / back.contrast`, then saturation by
/// `back.saturation`, then gamma by `1 / back.gamma`.
///
/// The stages run in forward order (contrast first, gamma last), not in the
/// reverse order a strict inverse would use.
///
/// # Errors
///
/// Returns a [`ToneError`] (named `back_enhance`, `back_saturation` or
/// `back_gamma`) before touching any pixel if a parameter is not a finite
/// positive number.
pub fn apply_restoring(
    buffer: &PixelBuffer,
    back: &ToneParameters,
) -> Result<PixelBuffer, ToneError> {
    back.validate(ToneRole::Restoring)?;
    let contrasted = apply_contrast(buffer, 1.0 / back.contrast);
    let saturated = apply_saturation(&contrasted, back.saturation);
    Ok(apply_gamma(&saturated, 1.0 / back.gamma))
}
