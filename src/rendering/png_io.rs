use crate::error::AppError;
use palette_map::PixelBuffer;
use std::io::Cursor;
use std::path::Path;

/// Decode a PNG into an 8-bit RGB or RGBA [`PixelBuffer`].
///
/// Palette images are expanded, 16-bit samples are stripped to 8 bits and
/// grayscale is widened to RGB (keeping alpha when present).
pub fn decode_png(data: &[u8]) -> Result<PixelBuffer, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::Decode(format!(
            "unexpected bit depth {:?} after normalization",
            info.bit_depth
        )));
    }

    let (channels, samples) = match info.color_type {
        png::ColorType::Rgb => (3, buf),
        png::ColorType::Rgba => (4, buf),
        png::ColorType::Grayscale => (3, buf.iter().flat_map(|&v| [v, v, v]).collect()),
        png::ColorType::GrayscaleAlpha => (
            4,
            buf.chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect(),
        ),
        png::ColorType::Indexed => {
            return Err(AppError::Decode(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    PixelBuffer::new(info.width, info.height, channels, samples)
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Encode a [`PixelBuffer`] as an 8-bit RGB or RGBA PNG.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, AppError> {
    let color_type = if image.has_alpha() {
        png::ColorType::Rgba
    } else {
        png::ColorType::Rgb
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.samples())
            .map_err(|e| AppError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

pub fn read_png(path: &Path) -> Result<PixelBuffer, AppError> {
    let data = std::fs::read(path)?;
    decode_png(&data)
}

pub fn write_png(path: &Path, image: &PixelBuffer) -> Result<(), AppError> {
    let data = encode_png(image)?;
    std::fs::write(path, data)?;
    Ok(())
}
