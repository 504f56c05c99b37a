use thiserror::Error;

/// A pixel buffer whose shape does not describe its samples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Only RGB (3) and RGBA (4) layouts are supported
    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(u8),

    /// `width * height * channels` does not fit in memory
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },

    /// An alpha plane was attached to a buffer that already has one
    #[error("buffer already has an alpha channel")]
    AlphaPresent,

    /// Sample count does not equal `width * height * channels`
    #[error("expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
