//! Public API for the palette-map crate.
//!
//! This module provides the high-level API: the [`map()`] function, the
//! reusable [`PaletteMapper`] builder, [`BlendWeight`] and the unified
//! [`MapError`] type.

mod error;
mod mapper;
mod weight;

pub use error::MapError;
pub use mapper::{map, PaletteMapper};
pub use weight::BlendWeight;
