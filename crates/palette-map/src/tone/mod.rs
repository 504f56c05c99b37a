//! Tone shaping applied around palette matching.
//!
//! Before the nearest-color search the image is reshaped with contrast,
//! saturation and gamma adjustments; after blending, a second set of
//! adjustments restores the original look:
//!
//! ```text
//! forward:    contrast(c)      -> saturation(s)  -> gamma(g)
//! restoring:  contrast(1 / c') -> saturation(s') -> gamma(1 / g')
//! ```
//!
//! The restoring chain runs in the same stage order as the forward chain,
//! not in reverse. Because gamma is not linear, the pair is only an
//! approximate inverse even when `c' = c`, `s' = s` and `g' = g`.
//!
//! Every stage stores its result as 8-bit samples clamped to `[0, 255]`, so
//! intermediate values never leave the byte range. Contrast and saturation
//! truncate toward zero; gamma rounds to the nearest value.
//!
//! # Example
//!
//! ```
//! use palette_map::{PixelBuffer, ToneParameters};
//! use palette_map::tone::{apply_forward, apply_gamma};
//!
//! let image = PixelBuffer::from_rgb(1, 1, vec![250, 250, 250]).unwrap();
//!
//! // Gamma works on the 0-255 scale, so it saturates quickly
//! assert_eq!(apply_gamma(&image, 1.3).samples(), &[255, 255, 255]);
//!
//! let neutral = apply_forward(&image, &ToneParameters::neutral()).unwrap();
//! assert_eq!(neutral, image);
//! ```

mod lut;
mod params;
mod transform;

pub use lut::GammaLut;
pub use params::{ToneError, ToneParameters, ToneRole};
pub use transform::{
    apply_contrast, apply_forward, apply_gamma, apply_restoring, apply_saturation, mean_luma,
};
