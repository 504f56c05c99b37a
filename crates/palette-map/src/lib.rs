#![allow(clippy::module_inception)]

//! palette-map: pull an image's colors toward a fixed palette
//!
//! Every pixel is matched to its nearest palette color (Euclidean distance in
//! RGB) and blended toward it by a weight. The match happens in a tone-shaped
//! copy of the image; a second set of tone adjustments afterwards brings the
//! result back toward the original look.
//!
//! # Quick Start
//!
//! ```
//! use palette_map::{map, BlendWeight, Palette, PixelBuffer, ToneParameters};
//!
//! let palette = Palette::parse_list("#FFE5EC, #FFC2D1, #FB6F92").unwrap();
//! let image = PixelBuffer::from_rgb(2, 1, vec![250, 200, 210, 30, 30, 30]).unwrap();
//!
//! let out = map(
//!     &image,
//!     palette.colors(),
//!     BlendWeight::new(0.5).unwrap(),
//!     ToneParameters::neutral(),
//!     ToneParameters::neutral(),
//! )
//! .unwrap();
//! assert_eq!(out.width(), 2);
//! ```
//!
//! For many images with the same settings, build a [`PaletteMapper`] once.
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer ─┬─ alpha ─────────────────────────────────────────┐
//!              └─ rgb ─> forward tone ─> nearest ─> blend ─> restoring tone ─> PixelBuffer
//!                        (c, s, g)       (k-d tree)  (w)     (1/c', s', 1/g')
//! ```
//!
//! All arithmetic is per pixel in `f64`. Each stage stores bytes clamped to
//! `[0, 255]`. Gamma rounds to the nearest value; every other stage truncates
//! toward zero.
//!
//! # Nearest Color Ties
//!
//! When two palette entries are equally close, the lower palette index wins,
//! both in [`ColorSpaceIndex`] and in the linear [`Palette::find_nearest`].
//!
//! # Errors
//!
//! Everything is validated before any pixel is touched:
//!
//! - empty palette, or a palette color with a NaN or infinite component:
//!   [`MapError::InvalidPalette`]
//! - non-finite or non-positive tone parameter: [`MapError::InvalidToneParameter`]
//! - weight outside `[0, 1]`: [`MapError::InvalidBlendWeight`] (from [`BlendWeight::new`])

pub mod api;
pub mod buffer;
pub mod color;
pub mod palette;
pub mod tone;


pub use api::{map, BlendWeight, MapError, PaletteMapper};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{luma, quantize, Color};
pub use palette::{ColorSpaceIndex, Palette, PaletteError, ParseColorError};
pub use tone::{ToneError, ToneParameters, ToneRole};
