//! Assertion helpers for tests.

use palette_map::{Palette, PixelBuffer};
use pretty_assertions::assert_eq;

/// Assert two images have the same dimensions and channel count
pub fn assert_same_shape(actual: &PixelBuffer, expected: &PixelBuffer) {
    assert_eq!(
        (actual.width(), actual.height(), actual.channels()),
        (expected.width(), expected.height(), expected.channels()),
        "Image shape changed"
    );
}

/// Assert every RGB triple of `image` is one of the palette colors
pub fn assert_only_palette_colors(image: &PixelBuffer, palette: &Palette) {
    let allowed: Vec<[u8; 3]> = palette.colors().iter().map(|c| c.to_bytes()).collect();
    for (i, px) in image.rgb().enumerate() {
        assert!(
            allowed.contains(&px),
            "Pixel {i} is {px:?}, not one of {allowed:?}"
        );
    }
}

/// Assert the alpha channels of two RGBA images are byte-identical
pub fn assert_alpha_preserved(actual: &PixelBuffer, expected: &PixelBuffer) {
    let alpha = |b: &PixelBuffer| -> Vec<u8> {
        b.samples()
            .chunks_exact(b.channels() as usize)
            .map(|px| px[3])
            .collect()
    };
    assert!(expected.has_alpha(), "Reference image has no alpha");
    assert!(actual.has_alpha(), "Alpha channel was dropped");
    assert_eq!(alpha(actual), alpha(expected), "Alpha channel changed");
}

/// Assert every sample differs by at most `tolerance`
pub fn assert_close(actual: &PixelBuffer, expected: &PixelBuffer, tolerance: u8) {
    assert_same_shape(actual, expected);
    for (i, (a, e)) in actual.samples().iter().zip(expected.samples()).enumerate() {
        assert!(
            a.abs_diff(*e) <= tolerance,
            "Sample {i}: got {a}, expected {e} (tolerance {tolerance})"
        );
    }
}
