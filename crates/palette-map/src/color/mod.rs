//! Color types and conversion utilities
//!
//! All color math in this crate happens on the 0–255 scale of 8-bit samples,
//! held in `f64` while a computation is in flight and stored back into bytes
//! with clamping and truncation toward zero.
//!
//! # Example
//!
//! ```
//! use palette_map::Color;
//!
//! let pink: Color = "#FFE5EC".parse().unwrap();
//! assert_eq!(pink.to_bytes(), [0xFF, 0xE5, 0xEC]);
//!
//! // Arithmetic results are clamped and truncated when stored
//! let hot = Color::new(300.0, 127.9, -4.0);
//! assert_eq!(hot.to_bytes(), [255, 127, 0]);
//! ```

mod rgb;

pub use rgb::{luma, quantize, Color};
