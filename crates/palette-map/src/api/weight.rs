use super::error::MapError;

/// How strongly pixels are pulled toward their nearest palette color.
///
/// `0.0` keeps the original color, `1.0` replaces it with the palette
/// color. Construction rejects values outside `[0, 1]`, so a `BlendWeight`
/// is always usable.
///
/// # Example
///
/// ```
/// use palette_map::{BlendWeight, MapError};
///
/// let half = BlendWeight::new(0.5).unwrap();
/// assert_eq!(half.value(), 0.5);
/// assert_eq!(BlendWeight::default(), half);
///
/// assert_eq!(BlendWeight::new(1.2), Err(MapError::InvalidBlendWeight(1.2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BlendWeight(f64);

impl BlendWeight {
    /// Keep the original colors.
    pub const ORIGINAL: BlendWeight = BlendWeight(0.0);
    /// Replace every pixel with its nearest palette color.
    pub const FULL: BlendWeight = BlendWeight(1.0);

    /// Validate and wrap a weight.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidBlendWeight`] if `value` is NaN or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, MapError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MapError::InvalidBlendWeight(value))
        }
    }

    /// The weight as a number in `[0, 1]`.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for BlendWeight {
    /// Halfway between original and palette color.
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for BlendWeight {
    type Error = MapError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
