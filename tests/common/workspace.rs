//! Scratch directory holding source images and the output directory.

use halftone::{BlockSize, Halftoner, Settings};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory for one test
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Output directory inside the workspace (not created)
    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write a source image as PNG and return its path
    pub fn add_png(&self, name: &str, image: &image::DynamicImage) -> PathBuf {
        self.add_file(name, &super::fixtures::encode(image, image::ImageFormat::Png))
    }

    /// Write raw bytes and return the path
    pub fn add_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// Default settings writing into this workspace's output directory
    pub fn settings(&self) -> Settings {
        Settings {
            out_dir: self.out_dir(),
            ..Settings::default()
        }
    }

    /// Halftoner with default settings writing into this workspace
    pub fn halftoner(&self) -> Halftoner {
        Halftoner::new(self.settings()).expect("Default settings must be valid")
    }

    /// Files currently in the output directory, sorted
    pub fn outputs(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(self.out_dir()) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

pub fn bs(n: usize) -> BlockSize {
    BlockSize::new(n).expect("Block size must be positive")
}
