//! Temporary directory with helpers for PNG and config files.

use palette_map::PixelBuffer;
use recolor::models::AppConfig;
use recolor::rendering::{read_png, write_png};
use recolor::services::RecolorService;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory that is removed when dropped.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as PNG and return its path.
    pub fn write_image(&self, name: &str, image: &PixelBuffer) -> PathBuf {
        let path = self.path(name);
        write_png(&path, image).expect("Failed to write test PNG");
        path
    }

    /// Write raw bytes and return the path.
    pub fn write_bytes(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, data).expect("Failed to write test file");
        path
    }

    pub fn read_image(&self, name: &str) -> PixelBuffer {
        read_png(&self.path(name)).expect("Failed to read output PNG")
    }

    /// Service using a config parsed from `yaml`.
    pub fn service_with_config(&self, yaml: &str) -> RecolorService {
        let path = self.write_bytes("config.yaml", yaml.as_bytes());
        RecolorService::new(AppConfig::load(&path))
    }
}
