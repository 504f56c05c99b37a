use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::settings::SettingsOverrides;
use crate::error::AppError;

/// Palette used by the built-in `neutral` preset.
pub const DEFAULT_PALETTE: &str = "#FFE5EC,#FFC2D1,#FFB3C6,#FF8FAB,#FB6F92";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Named parameter presets
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,

    /// Preset used when `--preset` is not given
    #[serde(default)]
    pub default_preset: Option<String>,
}

/// A named set of mapping parameters. Every field is optional; unset fields
/// keep the built-in defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    /// Comma-separated hex colors, e.g. `"#000000,#FFFFFF"`
    pub palette: Option<String>,
    pub weight: Option<f64>,
    pub enhance: Option<f64>,
    pub back_enhance: Option<f64>,
    pub saturation: Option<f64>,
    pub back_saturation: Option<f64>,
    pub gamma: Option<f64>,
    pub back_gamma: Option<f64>,
}

impl PresetConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            weight: self.weight,
            enhance: self.enhance,
            back_enhance: self.back_enhance,
            saturation: self.saturation,
            back_saturation: self.back_saturation,
            gamma: self.gamma,
            back_gamma: self.back_gamma,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from a file, falling back to defaults if the file
    /// is missing or invalid.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                return Self::default();
            }
        };

        match Self::from_yaml_str(&content) {
            Ok(config) => {
                tracing::info!(
                    presets = config.presets.len(),
                    path = %path.display(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a preset by name, or the default preset when `name` is `None`.
    ///
    /// Returns `Ok(None)` when no name is given and no default is configured.
    pub fn preset(&self, name: Option<&str>) -> Result<Option<&PresetConfig>, AppError> {
        let Some(name) = name.or(self.default_preset.as_deref()) else {
            return Ok(None);
        };
        self.presets
            .get(name)
            .map(Some)
            .ok_or_else(|| AppError::UnknownPreset(name.to_string()))
    }

    /// Preset names in sorted order.
    pub fn preset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut presets = HashMap::new();
        presets.insert(
            "neutral".to_string(),
            PresetConfig {
                palette: Some(DEFAULT_PALETTE.to_string()),
                ..Default::default()
            },
        );

        Self {
            presets,
            default_preset: Some("neutral".to_string()),
        }
    }
}
