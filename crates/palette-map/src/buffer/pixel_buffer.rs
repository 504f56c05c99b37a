//! Interleaved 8-bit pixel buffer with optional alpha.
//!
//! [`PixelBuffer`] is what callers hand to the mapper and what they get back.
//! Buffers are never mutated in place by the pipeline: every stage reads one
//! buffer and returns a new one.

use super::error::BufferError;
use crate::color::Color;

/// An interleaved, row-major image with 3 (RGB) or 4 (RGBA) channels of
/// 8-bit samples.
///
/// # Example
///
/// ```
/// use palette_map::PixelBuffer;
///
/// let image = PixelBuffer::new(2, 1, 4, vec![255, 0, 0, 255, 0, 0, 255, 128]).unwrap();
/// assert!(image.has_alpha());
/// assert_eq!(image.pixel(1, 0), &[0, 0, 255, 128]);
///
/// let (rgb, alpha) = image.split_alpha();
/// assert_eq!(rgb.channels(), 3);
/// assert_eq!(alpha.as_deref(), Some(&[255, 128][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, validating the layout.
    ///
    /// # Errors
    ///
    /// - [`BufferError::UnsupportedChannels`] unless `channels` is 3 or 4
    /// - [`BufferError::TooLarge`] if the sample count overflows `usize`
    /// - [`BufferError::LengthMismatch`] if `samples.len()` is not
    ///   `width * height * channels`
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Result<Self, BufferError> {
        if channels != 3 && channels != 4 {
            return Err(BufferError::UnsupportedChannels(channels));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or(BufferError::TooLarge { width, height })?;
        if samples.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Create an RGB buffer.
    pub fn from_rgb(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, BufferError> {
        Self::new(width, height, 3, samples)
    }

    /// Create an RGBA buffer.
    pub fn from_rgba(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, BufferError> {
        Self::new(width, height, 4, samples)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel: 3 or 4.
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Whether the fourth channel is alpha.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Raw interleaved samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the buffer, returning its samples.
    #[inline]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Samples of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let c = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * c;
        &self.samples[start..start + c]
    }

    /// RGB triples of every pixel, row-major. Alpha is skipped.
    pub fn rgb(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.samples
            .chunks_exact(self.channels as usize)
            .map(|px| [px[0], px[1], px[2]])
    }

    /// RGB of every pixel as [`Color`] query points, row-major.
    pub fn colors(&self) -> Vec<Color> {
        self.rgb().map(Color::from_bytes).collect()
    }

    /// Build a new buffer by rewriting the RGB triple of every pixel.
    ///
    /// `f` receives the pixel position and its RGB samples. Alpha samples,
    /// if present, are copied through untouched.
    pub fn map_rgb(&self, mut f: impl FnMut(usize, [u8; 3]) -> [u8; 3]) -> PixelBuffer {
        let c = self.channels as usize;
        let mut samples = self.samples.clone();
        for (i, px) in samples.chunks_exact_mut(c).enumerate() {
            let [r, g, b] = f(i, [px[0], px[1], px[2]]);
            px[0] = r;
            px[1] = g;
            px[2] = b;
        }
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: self.channels,
            samples,
        }
    }

    /// Split into an RGB buffer and the alpha plane (if any).
    pub fn split_alpha(&self) -> (PixelBuffer, Option<Vec<u8>>) {
        if !self.has_alpha() {
            return (self.clone(), None);
        }

        let pixels = self.pixel_count();
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for px in self.samples.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
            alpha.push(px[3]);
        }

        (
            PixelBuffer {
                width: self.width,
                height: self.height,
                channels: 3,
                samples: rgb,
            },
            Some(alpha),
        )
    }

    /// Reattach an alpha plane to an RGB buffer.
    ///
    /// With `None` the buffer is returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`BufferError::AlphaPresent`] if `self` already has alpha
    /// - [`BufferError::LengthMismatch`] if `alpha` does not hold one sample
    ///   per pixel
    pub fn attach_alpha(self, alpha: Option<Vec<u8>>) -> Result<PixelBuffer, BufferError> {
        let Some(alpha) = alpha else {
            return Ok(self);
        };
        if self.has_alpha() {
            return Err(BufferError::AlphaPresent);
        }
        if alpha.len() != self.pixel_count() {
            return Err(BufferError::LengthMismatch {
                expected: self.pixel_count(),
                actual: alpha.len(),
            });
        }

        let mut samples = Vec::with_capacity(alpha.len() * 4);
        for (px, a) in self.samples.chunks_exact(3).zip(alpha) {
            samples.extend_from_slice(px);
            samples.push(a);
        }

        Ok(PixelBuffer {
            width: self.width,
            height: self.height,
            channels: 4,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_validates_channels() {
        assert_eq!(
            PixelBuffer::new(1, 1, 2, vec![0, 0]),
            Err(BufferError::UnsupportedChannels(2))
        );
        assert_eq!(
            PixelBuffer::new(1, 1, 1, vec![0]),
            Err(BufferError::UnsupportedChannels(1))
        );
    }

    #[test]
    fn test_new_validates_length() {
        assert_eq!(
            PixelBuffer::from_rgb(2, 2, vec![0; 11]),
            Err(BufferError::LengthMismatch {
                expected: 12,
                actual: 11
            })
        );
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_empty_image_is_valid() {
        let image = PixelBuffer::from_rgb(0, 7, Vec::new()).unwrap();
        assert_eq!(image.pixel_count(), 0);
        assert!(image.colors().is_empty());
    }

    #[test]
    fn test_pixel_accessor_row_major() {
        let samples: Vec<u8> = (0..18).collect();
        let image = PixelBuffer::from_rgb(3, 2, samples).unwrap();
        assert_eq!(image.pixel(0, 0), &[0, 1, 2]);
        assert_eq!(image.pixel(2, 0), &[6, 7, 8]);
        assert_eq!(image.pixel(0, 1), &[9, 10, 11]);
        assert_eq!(image.pixel(2, 1), &[15, 16, 17]);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 image")]
    fn test_pixel_accessor_out_of_bounds() {
        let image = PixelBuffer::from_rgb(3, 2, vec![0; 18]).unwrap();
        image.pixel(3, 0);
    }

    #[test]
    fn test_rgb_skips_alpha() {
        let image = PixelBuffer::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let rgb: Vec<[u8; 3]> = image.rgb().collect();
        assert_eq!(rgb, vec![[1, 2, 3], [5, 6, 7]]);
    }

    #[test]
    fn test_map_rgb_keeps_alpha_and_input() {
        let image = PixelBuffer::from_rgba(2, 1, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap();
        let mapped = image.map_rgb(|i, [r, g, b]| [r + i as u8, g, b / 2]);
        assert_eq!(mapped.samples(), &[10, 20, 15, 40, 51, 60, 35, 80]);
        // Input untouched
        assert_eq!(image.samples(), &[10, 20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_split_and_attach_alpha_round_trip() {
        let samples = vec![1, 2, 3, 255, 4, 5, 6, 0, 7, 8, 9, 128];
        let image = PixelBuffer::from_rgba(3, 1, samples.clone()).unwrap();

        let (rgb, alpha) = image.split_alpha();
        assert_eq!(rgb.channels(), 3);
        assert_eq!(rgb.samples(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(alpha, Some(vec![255, 0, 128]));

        let joined = rgb.attach_alpha(alpha).unwrap();
        assert_eq!(joined, image);
    }

    #[test]
    fn test_split_alpha_rgb_is_identity() {
        let image = PixelBuffer::from_rgb(1, 1, vec![9, 8, 7]).unwrap();
        let (rgb, alpha) = image.split_alpha();
        assert_eq!(rgb, image);
        assert!(alpha.is_none());
        assert_eq!(rgb.attach_alpha(None).unwrap(), image);
    }

    #[test]
    fn test_attach_alpha_rejects_second_alpha() {
        let rgba = PixelBuffer::from_rgba(1, 1, vec![0, 0, 0, 1]).unwrap();
        assert_eq!(
            rgba.attach_alpha(Some(vec![2])),
            Err(BufferError::AlphaPresent)
        );
    }

    #[test]
    fn test_attach_alpha_rejects_wrong_length() {
        let rgb = PixelBuffer::from_rgb(2, 1, vec![0; 6]).unwrap();
        assert_eq!(
            rgb.attach_alpha(Some(vec![255])),
            Err(BufferError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
