//! recolor - snap images to a color palette
//!
//! Command-line front end for the `palette-map` crate: PNG input/output,
//! YAML presets and parameter resolution.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
