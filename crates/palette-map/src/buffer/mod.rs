//! Pixel buffer data model shared by every pipeline stage.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
