//! Test fixtures and constants.

use palette_map::PixelBuffer;

/// Palettes used across tests
pub mod palettes {
    /// Black and white
    pub const MONO: &str = "#000000,#FFFFFF";

    /// Pure primaries
    pub const PRIMARIES: &str = "#FF0000,#00FF00,#0000FF";

    /// Pink ramp from the built-in preset
    pub const PINK: &str = "#FFE5EC,#FFC2D1,#FFB3C6,#FF8FAB,#FB6F92";
}

/// Config with two presets, `mono` as default.
pub const PRESETS_YAML: &str = r##"
default_preset: mono
presets:
  mono:
    palette: "#000000,#FFFFFF"
    weight: 1.0
  soft:
    palette: "#FF0000,#00FF00,#0000FF"
    weight: 0.25
    enhance: 1.5
    back_enhance: 1.5
"##;

/// A horizontal gray ramp, `width` pixels wide and one row high.
pub fn gray_ramp(width: u32) -> PixelBuffer {
    let samples = (0..width)
        .flat_map(|x| {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            [v, v, v]
        })
        .collect();
    PixelBuffer::from_rgb(width, 1, samples).unwrap()
}

/// A small RGBA image with a distinct alpha value per pixel.
pub fn rgba_checker() -> PixelBuffer {
    PixelBuffer::from_rgba(
        2,
        2,
        vec![
            250, 10, 10, 0, //
            10, 250, 10, 85, //
            10, 10, 250, 170, //
            128, 128, 128, 255,
        ],
    )
    .unwrap()
}

/// Encode raw 8-bit samples as a PNG with the given color type.
pub fn raw_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    buf
}
