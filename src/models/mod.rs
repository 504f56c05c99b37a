pub mod config;
pub mod settings;

pub use config::{AppConfig, PresetConfig, DEFAULT_PALETTE};
pub use settings::{MapSettings, OutOfRange, ParamRange, SettingsOverrides};
