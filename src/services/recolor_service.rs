use crate::error::AppError;
use crate::models::{AppConfig, MapSettings, SettingsOverrides};
use crate::rendering::{read_png, write_png};
use palette_map::{Palette, PaletteMapper, PixelBuffer};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One recolor job as requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct RecolorRequest {
    pub input: PathBuf,
    /// Defaults to `<stem>_recolored.png` next to the input
    pub output: Option<PathBuf>,
    /// Comma-separated hex colors; overrides the preset palette
    pub palette: Option<String>,
    pub preset: Option<String>,
    pub overrides: SettingsOverrides,
}

/// What a finished job produced.
#[derive(Debug, Clone)]
pub struct RecolorOutcome {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub palette_size: usize,
    pub elapsed: Duration,
}

/// Resolves presets and flags into a palette and settings, then runs the
/// mapping on PNG files.
pub struct RecolorService {
    config: AppConfig,
}

impl RecolorService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Combine built-in defaults, the selected preset and explicit overrides,
    /// in that order of precedence (lowest first).
    pub fn resolve(
        &self,
        preset: Option<&str>,
        palette: Option<&str>,
        overrides: &SettingsOverrides,
    ) -> Result<(Palette, MapSettings), AppError> {
        let preset = self.config.preset(preset)?;

        let palette_list = palette
            .or_else(|| preset.and_then(|p| p.palette.as_deref()))
            .ok_or(AppError::MissingPalette)?;
        let palette = Palette::parse_list(palette_list)?;

        let mut settings = MapSettings::default();
        if let Some(preset) = preset {
            settings = settings.apply(&preset.overrides());
        }
        settings = settings.apply(overrides);

        Ok((palette, settings))
    }

    /// Map an in-memory image.
    pub fn recolor_buffer(
        &self,
        image: &PixelBuffer,
        palette: Palette,
        settings: &MapSettings,
    ) -> Result<PixelBuffer, AppError> {
        let weight = settings.validate()?;

        for warning in settings.out_of_range() {
            tracing::warn!(
                parameter = warning.range.name,
                value = warning.value,
                min = warning.range.min,
                max = warning.range.max,
                "Parameter outside recommended range"
            );
        }
        for (first, repeat) in palette.duplicates() {
            tracing::warn!(
                color = %palette.color(first),
                first,
                repeat,
                "Duplicate palette color, the first entry wins"
            );
        }

        let mapper = PaletteMapper::new(palette)
            .weight(weight)
            .tone(settings.tone)
            .back_tone(settings.back_tone);
        Ok(mapper.map(image)?)
    }

    /// Read, map and write one PNG.
    pub fn recolor_file(&self, request: &RecolorRequest) -> Result<RecolorOutcome, AppError> {
        let (palette, settings) = self.resolve(
            request.preset.as_deref(),
            request.palette.as_deref(),
            &request.overrides,
        )?;
        settings.validate()?;

        let output = request
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&request.input));

        let image = read_png(&request.input)?;
        tracing::debug!(
            input = %request.input.display(),
            width = image.width(),
            height = image.height(),
            channels = image.channels(),
            "Decoded input"
        );

        let palette_size = palette.len();
        let start = Instant::now();
        let mapped = self.recolor_buffer(&image, palette, &settings)?;
        let elapsed = start.elapsed();

        write_png(&output, &mapped)?;

        tracing::info!(
            output = %output.display(),
            width = mapped.width(),
            height = mapped.height(),
            palette_size,
            elapsed_ms = elapsed.as_millis() as u64,
            "Recolored image"
        );

        Ok(RecolorOutcome {
            output,
            width: mapped.width(),
            height: mapped.height(),
            palette_size,
            elapsed,
        })
    }
}

/// `<dir>/<stem>_recolored.png` for an input at `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_recolored.png"))
}
