//! The mapping pipeline and its reusable [`PaletteMapper`] builder.
//!
//! [`map()`] is the one-shot entry point; [`PaletteMapper`] holds a palette
//! and settings so several images can be mapped with the same configuration.

use std::time::Instant;

use super::error::MapError;
use super::weight::BlendWeight;
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::palette::{ColorSpaceIndex, Palette};
use crate::tone::{apply_forward, apply_restoring, ToneParameters, ToneRole};

/// Pull every pixel of `image` toward its nearest color in `palette`.
///
/// Pipeline:
/// 1. Validate palette, tone parameters and weight (nothing is computed on
///    invalid input)
/// 2. Forward tone shaping (contrast, saturation, gamma)
/// 3. Nearest palette color per shaped pixel
/// 4. Blend shaped pixel and palette color by `weight`
/// 5. Restoring tone shaping
///
/// Alpha, when present, is split off before step 2 and reattached unchanged.
///
/// # Errors
///
/// - [`MapError::InvalidPalette`] if `palette` is empty or a palette color
///   has a NaN or infinite component
/// - [`MapError::InvalidToneParameter`] if any tone or back-tone parameter
///   is not a finite positive number
///
/// # Example
///
/// ```
/// use palette_map::{map, BlendWeight, Color, PixelBuffer, ToneParameters};
///
/// let image = PixelBuffer::from_rgb(1, 1, vec![10, 10, 10]).unwrap();
/// let palette = [Color::from_u8(0, 0, 0), Color::from_u8(255, 255, 255)];
///
/// let out = map(
///     &image,
///     &palette,
///     BlendWeight::FULL,
///     ToneParameters::neutral(),
///     ToneParameters::neutral(),
/// )
/// .unwrap();
/// assert_eq!(out.samples(), &[0, 0, 0]);
/// ```
pub fn map(
    image: &PixelBuffer,
    palette: &[Color],
    weight: BlendWeight,
    tone: ToneParameters,
    back_tone: ToneParameters,
) -> Result<PixelBuffer, MapError> {
    let palette = Palette::new(palette)?;
    validate_tones(&tone, &back_tone)?;
    let index = ColorSpaceIndex::from_palette(&palette);
    run(image, &palette, &index, weight, &tone, &back_tone)
}

/// Reusable palette mapping configuration.
///
/// The constructor takes a [`Palette`], which is never empty, so the only
/// remaining failure is an invalid tone parameter, reported by
/// [`map()`](Self::map). Settings methods consume and return `self`;
/// `map()` takes `&self`, so one mapper can process many images.
///
/// # Example
///
/// ```
/// use palette_map::{BlendWeight, Palette, PaletteMapper, PixelBuffer, ToneParameters};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let mapper = PaletteMapper::new(palette)
///     .weight(BlendWeight::new(0.25).unwrap())
///     .tone(ToneParameters::new(1.2, 1.0, 1.0));
///
/// let image = PixelBuffer::from_rgb(2, 1, vec![40, 40, 40, 220, 220, 220]).unwrap();
/// let out = mapper.map(&image).unwrap();
/// assert_eq!(out.width(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteMapper {
    palette: Palette,
    index: ColorSpaceIndex,
    weight: BlendWeight,
    tone: ToneParameters,
    back_tone: ToneParameters,
}

impl PaletteMapper {
    /// Create a mapper with weight 0.5 and neutral tone settings.
    pub fn new(palette: Palette) -> Self {
        let index = ColorSpaceIndex::from_palette(&palette);
        Self {
            palette,
            index,
            weight: BlendWeight::default(),
            tone: ToneParameters::neutral(),
            back_tone: ToneParameters::neutral(),
        }
    }

    /// Set the blend weight.
    #[inline]
    pub fn weight(mut self, weight: BlendWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the forward tone parameters.
    #[inline]
    pub fn tone(mut self, tone: ToneParameters) -> Self {
        self.tone = tone;
        self
    }

    /// Set the restoring tone parameters.
    #[inline]
    pub fn back_tone(mut self, back_tone: ToneParameters) -> Self {
        self.back_tone = back_tone;
        self
    }

    /// The palette this mapper matches against.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Map one image. See [`map()`](crate::map) for the pipeline.
    pub fn map(&self, image: &PixelBuffer) -> Result<PixelBuffer, MapError> {
        validate_tones(&self.tone, &self.back_tone)?;
        run(
            image,
            &self.palette,
            &self.index,
            self.weight,
            &self.tone,
            &self.back_tone,
        )
    }
}

fn validate_tones(tone: &ToneParameters, back_tone: &ToneParameters) -> Result<(), MapError> {
    tone.validate(ToneRole::Forward)?;
    back_tone.validate(ToneRole::Restoring)?;
    Ok(())
}

fn run(
    image: &PixelBuffer,
    palette: &Palette,
    index: &ColorSpaceIndex,
    weight: BlendWeight,
    tone: &ToneParameters,
    back_tone: &ToneParameters,
) -> Result<PixelBuffer, MapError> {
    let start = Instant::now();
    let (rgb, alpha) = image.split_alpha();

    let shaped = apply_forward(&rgb, tone)?;
    let matches = index.query_batch(&shaped.colors());
    let w = weight.value();
    let blended = shaped.map_rgb(|i, px| {
        let (idx, _) = matches[i];
        Color::from_bytes(px).mix(palette.color(idx), w).to_bytes()
    });
    let restored = apply_restoring(&blended, back_tone)?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        palette_size = palette.len(),
        weight = w,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Mapped image to palette"
    );

    Ok(restored.attach_alpha(alpha)?)
}
