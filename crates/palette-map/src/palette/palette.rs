//! Palette struct with hex parsing and brute-force nearest-color matching.
//!
//! A [`Palette`] is the ordered list of target colors an image is snapped
//! toward. Order matters: lookups report positions in this list and resolve
//! equal distances to the lowest position.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Color;

/// An ordered, non-empty list of finite target colors.
///
/// Construction is the only place a palette is validated, so every
/// `Palette` value in the program is usable for mapping.
///
/// Duplicate entries are accepted. They are harmless for mapping (the first
/// occurrence always wins a tie) and [`duplicates()`](Palette::duplicates)
/// reports them for callers that want to warn about them.
///
/// # Example
///
/// ```
/// use palette_map::{Color, Palette};
///
/// let palette = Palette::new(&[Color::from_u8(0, 0, 0), Color::from_u8(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let pinks = Palette::parse_list("#FFE5EC,#FFC2D1,#FFB3C6,#FF8FAB,#FB6F92").unwrap();
/// assert_eq!(pinks.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty, or
    /// [`PaletteError::NonFiniteColor`] naming the first color with a NaN or
    /// infinite component.
    pub fn new(colors: &[Color]) -> Result<Self, PaletteError> {
        PaletteError::check_colors(colors)?;
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from `[R, G, B]` byte triples.
    pub fn from_bytes(colors: &[[u8; 3]]) -> Result<Self, PaletteError> {
        let colors: Vec<Color> = colors.iter().map(|&c| Color::from_bytes(c)).collect();
        Self::new(&colors)
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] naming the first entry that fails
    /// to parse, or [`PaletteError::EmptyPalette`] for an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_map::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF"]).unwrap();
    /// assert_eq!(palette.color(1).to_bytes(), [255, 255, 255]);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Color::from_str(s).map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// Parse a comma-separated list of hex colors.
    ///
    /// Whitespace around entries is ignored, as are empty entries, so a
    /// trailing comma or newline from a text field is harmless. A list with
    /// no entries at all is [`PaletteError::EmptyPalette`].
    ///
    /// # Example
    ///
    /// ```
    /// use palette_map::{Palette, PaletteError};
    ///
    /// let palette = Palette::parse_list(" #FFE5EC, #FB6F92,\n").unwrap();
    /// assert_eq!(palette.len(), 2);
    ///
    /// assert_eq!(Palette::parse_list(" , "), Err(PaletteError::EmptyPalette));
    /// ```
    pub fn parse_list(list: &str) -> Result<Self, PaletteError> {
        let entries: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        Self::from_hex(&entries)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    ///
    /// Construction rejects empty input, so this is `false` for every
    /// `Palette`. It exists alongside [`len`](Self::len) for the usual
    /// collection API.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given palette position.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// All colors, in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Pairs `(first, repeat)` of positions holding byte-identical colors.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_map::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFF", "#000000"]).unwrap();
    /// assert_eq!(palette.duplicates(), vec![(0, 2)]);
    /// ```
    pub fn duplicates(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (repeat, color) in self.colors.iter().enumerate() {
            let bytes = color.to_bytes();
            if let Some(first) = self.colors[..repeat]
                .iter()
                .position(|c| c.to_bytes() == bytes)
            {
                pairs.push((first, repeat));
            }
        }
        pairs
    }

    /// Find the nearest palette color by linear scan.
    ///
    /// Returns `(index, distance)` with Euclidean RGB distance. Equal
    /// distances resolve to the lowest index. This is the reference
    /// behavior [`ColorSpaceIndex`](super::ColorSpaceIndex) reproduces with
    /// a k-d tree; prefer the index when querying many points.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_map::{Color, Palette};
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
    /// let (idx, dist) = palette.find_nearest(Color::from_u8(10, 10, 10));
    /// assert_eq!(idx, 0);
    /// assert!((dist - 17.32).abs() < 0.01);
    /// ```
    pub fn find_nearest(&self, color: Color) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = candidate.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist.sqrt())
    }
}
