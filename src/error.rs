use palette_map::{MapError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("No palette given (use --palette or a preset with a palette)")]
    MissingPalette,

    #[error("Mapping error: {0}")]
    Map(#[from] MapError),
}

impl From<PaletteError> for AppError {
    fn from(e: PaletteError) -> Self {
        AppError::Map(MapError::InvalidPalette(e))
    }
}
