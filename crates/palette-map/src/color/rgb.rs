//! RGB color type
//!
//! [`Color`] is the value type shared by palettes, the nearest-neighbor index
//! and the blend stage of the mapping pipeline.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Store an in-flight channel value into an 8-bit sample.
///
/// Clamps to `[0, 255]` and truncates toward zero. NaN maps to 0 and
/// positive infinity to 255, so degenerate arithmetic never escapes as an
/// out-of-range sample.
///
/// # Example
/// ```
/// use palette_map::quantize;
///
/// assert_eq!(quantize(254.99), 254);
/// assert_eq!(quantize(-3.0), 0);
/// assert_eq!(quantize(f64::INFINITY), 255);
/// assert_eq!(quantize(f64::NAN), 0);
/// ```
#[inline]
pub fn quantize(value: f64) -> u8 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

/// ITU-R 601-2 luma of an 8-bit RGB triple, in fixed point.
///
/// `L = R * 299/1000 + G * 587/1000 + B * 114/1000`, computed with 16-bit
/// fractional weights and rounded, so pure greys map to themselves.
///
/// # Example
/// ```
/// use palette_map::luma;
///
/// assert_eq!(luma(200, 200, 200), 200);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// A color as an RGB triple on the 0–255 scale.
///
/// Components are `f64` so intermediate results of blends and tone
/// adjustments keep their precision until they are stored with
/// [`to_bytes()`](Color::to_bytes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Color {
    /// Create a new color from float values on the 0–255 scale.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`, clamping and truncating each
    /// channel with [`quantize`].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Channel value along a k-d tree axis (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn component(self, axis: usize) -> f64 {
        match axis {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }

    /// `true` when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_squared(self, other: Color) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Linear interpolation toward `target`: `self * (1 - t) + target * t`.
    ///
    /// The result is not clamped.
    #[inline]
    pub fn mix(self, target: Color, t: f64) -> Color {
        let keep = 1.0 - t;
        Color {
            r: self.r * keep + target.r * t,
            g: self.g * keep + target.g * t,
            b: self.b * keep + target.b * t,
        }
    }
}

impl fmt::Display for Color {
    /// Formats as `#RRGGBB` using the stored byte values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_map::Color;
    ///
    /// let red: Color = "#F00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseColorError::InvalidHex(s.to_string()))
        };

        match digits.len() {
            // Shorthand: 0xF -> 0xFF
            3 => Ok(Self::from_u8(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(ParseColorError::InvalidLength(s.to_string())),
        }
    }
}
