//! Static 3-d tree over palette colors for batched nearest-color queries.
//!
//! Palettes are small (tens of colors) but images are large, so the tree is
//! built once per mapping call and queried once per pixel.
//!
//! # Determinism
//!
//! Candidates are ranked by `(squared distance, palette index)`, and the
//! search visits the far side of a split whenever the splitting plane is not
//! farther than the current best. Equal-distance entries on either side of a
//! split are therefore always compared, and ties resolve to the lowest
//! palette index regardless of tree shape.

use super::error::PaletteError;
use super::palette::Palette;
use crate::color::Color;

#[derive(Debug, Clone)]
struct Node {
    point: Color,
    palette_index: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Best candidate seen so far during a descent.
#[derive(Debug, Clone, Copy)]
struct Best {
    index: usize,
    distance_squared: f64,
}

impl Best {
    fn new() -> Self {
        Self {
            index: usize::MAX,
            distance_squared: f64::INFINITY,
        }
    }

    #[inline]
    fn offer(&mut self, index: usize, distance_squared: f64) {
        if self.index == usize::MAX
            || distance_squared < self.distance_squared
            || (distance_squared == self.distance_squared && index < self.index)
        {
            self.index = index;
            self.distance_squared = distance_squared;
        }
    }
}

/// Immutable nearest-neighbor index over an ordered list of colors.
///
/// Distances are Euclidean in RGB space. Results refer to positions in the
/// color list the index was built from.
///
/// # Example
///
/// ```
/// use palette_map::{Color, ColorSpaceIndex};
///
/// let index = ColorSpaceIndex::build(&[
///     Color::from_u8(0, 0, 0),
///     Color::from_u8(255, 255, 255),
/// ]).unwrap();
///
/// let results = index.query_batch(&[Color::from_u8(10, 10, 10), Color::from_u8(200, 210, 220)]);
/// assert_eq!(results[0].0, 0);
/// assert_eq!(results[1].0, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ColorSpaceIndex {
    nodes: Vec<Node>,
    root: usize,
}

impl ColorSpaceIndex {
    /// Build an index over `colors`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty, or
    /// [`PaletteError::NonFiniteColor`] if a component is NaN or infinite.
    pub fn build(colors: &[Color]) -> Result<Self, PaletteError> {
        PaletteError::check_colors(colors)?;
        Ok(Self::from_nonempty(colors))
    }

    /// Build an index over a validated palette. Cannot fail.
    pub fn from_palette(palette: &Palette) -> Self {
        Self::from_nonempty(palette.colors())
    }

    fn from_nonempty(colors: &[Color]) -> Self {
        let mut entries: Vec<(Color, usize)> =
            colors.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let mut nodes = Vec::with_capacity(colors.len());
        let root = build_subtree(&mut entries, 0, &mut nodes).unwrap_or(0);

        Self { nodes, root }
    }

    /// Number of indexed colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no colors. Construction rejects empty input,
    /// so this is `false` for every `ColorSpaceIndex`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nearest indexed color to `point`: `(palette_index, distance)`.
    pub fn query(&self, point: Color) -> (usize, f64) {
        let mut best = Best::new();
        self.descend(Some(self.root), point, &mut best);
        (best.index, best.distance_squared.sqrt())
    }

    /// Nearest indexed color for every point, in input order.
    pub fn query_batch(&self, points: &[Color]) -> Vec<(usize, f64)> {
        points.iter().map(|&p| self.query(p)).collect()
    }

    fn descend(&self, node: Option<usize>, point: Color, best: &mut Best) {
        let Some(i) = node else {
            return;
        };
        let node = &self.nodes[i];

        best.offer(node.palette_index, node.point.distance_squared(point));

        let diff = point.component(node.axis) - node.point.component(node.axis);
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.descend(near, point, best);
        if diff * diff <= best.distance_squared {
            self.descend(far, point, best);
        }
    }
}

/// Median split on `depth % 3`; returns the slot of the subtree root.
fn build_subtree(
    entries: &mut [(Color, usize)],
    depth: usize,
    nodes: &mut Vec<Node>,
) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }

    let axis = depth % 3;
    entries.sort_by(|a, b| {
        a.0.component(axis)
            .total_cmp(&b.0.component(axis))
            .then(a.1.cmp(&b.1))
    });

    let mid = entries.len() / 2;
    let (point, palette_index) = entries[mid];
    let slot = nodes.len();
    nodes.push(Node {
        point,
        palette_index,
        axis,
        left: None,
        right: None,
    });

    let (lower, upper) = entries.split_at_mut(mid);
    let left = build_subtree(lower, depth + 1, nodes);
    let right = build_subtree(&mut upper[1..], depth + 1, nodes);
    nodes[slot].left = left;
    nodes[slot].right = right;

    Some(slot)
}
