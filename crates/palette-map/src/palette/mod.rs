//! Palette types and utilities
//!
//! This module provides the [`Palette`] type, the [`ColorSpaceIndex`] used
//! for batched nearest-color lookups, and error types for parsing and
//! validation.

mod error;
mod index;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use index::ColorSpaceIndex;
pub use palette::Palette;
