//! End-to-end tests: PNG file in, recolored PNG file out.

mod common;

use common::{fixtures, fixtures::palettes, TestWorkspace};
use palette_map::{map, BlendWeight, Palette, ToneParameters};
use pretty_assertions::assert_eq;
use recolor::error::AppError;
use recolor::models::{AppConfig, SettingsOverrides};
use recolor::services::{RecolorRequest, RecolorService};

fn full_weight() -> SettingsOverrides {
    SettingsOverrides {
        weight: Some(1.0),
        ..Default::default()
    }
}

#[test]
fn test_mono_palette_snaps_gray_ramp() {
    let ws = TestWorkspace::new();
    let input = ws.write_image("ramp.png", &fixtures::gray_ramp(16));
    let service = RecolorService::new(AppConfig::default());

    let outcome = service
        .recolor_file(&RecolorRequest {
            input,
            output: Some(ws.path("out.png")),
            palette: Some(palettes::MONO.to_string()),
            overrides: full_weight(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(outcome.output, ws.path("out.png"));
    assert_eq!((outcome.width, outcome.height), (16, 1));
    assert_eq!(outcome.palette_size, 2);

    let out = ws.read_image("out.png");
    common::assert_only_palette_colors(&out, &Palette::parse_list(palettes::MONO).unwrap());
    // 0..=119 map to black, 136..=255 to white
    let firsts: Vec<u8> = out.rgb().map(|px| px[0]).collect();
    assert_eq!(&firsts[..8], &[0; 8]);
    assert_eq!(&firsts[8..], &[255; 8]);
}

#[test]
fn test_default_output_next_to_input() {
    let ws = TestWorkspace::new();
    let input = ws.write_image("photo.png", &fixtures::gray_ramp(4));
    let service = RecolorService::new(AppConfig::default());

    let outcome = service
        .recolor_file(&RecolorRequest {
            input,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(outcome.output, ws.path("photo_recolored.png"));
    assert!(outcome.output.exists());
}

#[test]
fn test_rgba_alpha_and_ties() {
    let ws = TestWorkspace::new();
    let image = fixtures::rgba_checker();
    let input = ws.write_image("checker.png", &image);
    let service = RecolorService::new(AppConfig::default());

    service
        .recolor_file(&RecolorRequest {
            input,
            output: Some(ws.path("out.png")),
            palette: Some(palettes::PRIMARIES.to_string()),
            overrides: full_weight(),
            ..Default::default()
        })
        .unwrap();

    let out = ws.read_image("out.png");
    common::assert_alpha_preserved(&out, &image);
    // Mid gray is equally far from all three primaries; red comes first
    assert_eq!(
        out.samples(),
        &[
            255, 0, 0, 0, //
            0, 255, 0, 85, //
            0, 0, 255, 170, //
            255, 0, 0, 255,
        ]
    );
}

#[test]
fn test_weight_zero_keeps_image() {
    let ws = TestWorkspace::new();
    let image = fixtures::gray_ramp(32);
    let input = ws.write_image("ramp.png", &image);
    let service = RecolorService::new(AppConfig::default());

    service
        .recolor_file(&RecolorRequest {
            input,
            output: Some(ws.path("out.png")),
            palette: Some(palettes::PINK.to_string()),
            overrides: SettingsOverrides {
                weight: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap();

    assert_eq!(ws.read_image("out.png"), image);
}

#[test]
fn test_round_trip_tones_near_neutral() {
    let ws = TestWorkspace::new();
    let samples = (60u8..=80).step_by(4).flat_map(|v| [v, v, v]).collect();
    let image = palette_map::PixelBuffer::from_rgb(6, 1, samples).unwrap();
    let input = ws.write_image("grey.png", &image);
    let service = RecolorService::new(AppConfig::default());

    service
        .recolor_file(&RecolorRequest {
            input,
            output: Some(ws.path("out.png")),
            palette: Some(palettes::MONO.to_string()),
            overrides: SettingsOverrides {
                weight: Some(0.0),
                enhance: Some(2.0),
                back_enhance: Some(2.0),
                saturation: Some(1.5),
                back_saturation: Some(1.5),
                gamma: Some(1.1),
                back_gamma: Some(1.1),
            },
            ..Default::default()
        })
        .unwrap();

    common::assert_close(&ws.read_image("out.png"), &image, 2);
}

#[test]
fn test_file_output_matches_library() {
    let ws = TestWorkspace::new();
    let image = fixtures::rgba_checker();
    let input = ws.write_image("in.png", &image);
    let service = ws.service_with_config(fixtures::PRESETS_YAML);

    service
        .recolor_file(&RecolorRequest {
            input,
            output: Some(ws.path("out.png")),
            preset: Some("soft".to_string()),
            ..Default::default()
        })
        .unwrap();

    let palette = Palette::parse_list(palettes::PRIMARIES).unwrap();
    let tone = ToneParameters::new(1.5, 1.0, 1.0);
    let expected = map(
        &image,
        palette.colors(),
        BlendWeight::new(0.25).unwrap(),
        tone,
        tone,
    )
    .unwrap();
    assert_eq!(ws.read_image("out.png"), expected);
}

#[test]
fn test_grayscale_png_input() {
    let ws = TestWorkspace::new();
    let data = fixtures::raw_png(3, 1, png::ColorType::Grayscale, &[10, 128, 250]);
    let input = ws.write_bytes("gray.png", &data);
    let service = RecolorService::new(AppConfig::default());

    service
        .recolor_file(&RecolorRequest {
            input,
            output: Some(ws.path("out.png")),
            palette: Some(palettes::MONO.to_string()),
            overrides: full_weight(),
            ..Default::default()
        })
        .unwrap();

    let out = ws.read_image("out.png");
    assert_eq!(out.channels(), 3);
    assert_eq!(out.samples(), &[0, 0, 0, 255, 255, 255, 255, 255, 255]);
}

#[test]
fn test_missing_input_is_io_error() {
    let ws = TestWorkspace::new();
    let service = RecolorService::new(AppConfig::default());

    let result = service.recolor_file(&RecolorRequest {
        input: ws.path("missing.png"),
        ..Default::default()
    });
    assert!(matches!(result, Err(AppError::Io(_))));
    assert!(!ws.path("missing_recolored.png").exists());
}

#[test]
fn test_not_a_png_is_decode_error() {
    let ws = TestWorkspace::new();
    let input = ws.write_bytes("fake.png", b"GIF89a not really");
    let service = RecolorService::new(AppConfig::default());

    let result = service.recolor_file(&RecolorRequest {
        input,
        ..Default::default()
    });
    assert!(matches!(result, Err(AppError::Decode(_))));
}

#[test]
fn test_bad_palette_reports_position() {
    let ws = TestWorkspace::new();
    let input = ws.write_image("in.png", &fixtures::gray_ramp(2));
    let service = RecolorService::new(AppConfig::default());

    let err = service
        .recolor_file(&RecolorRequest {
            input,
            palette: Some("#000000,#GGGGGG".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("position 1"), "unexpected message: {message}");
}
