//! Output naming and all-or-nothing file commits.

use crate::error::HalftoneError;
use halftone_grid::BlockSize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default directory for rendered files, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "out";

/// `<out_dir>/<source stem>-<blocksize>`, without extension.
///
/// Only the file name of `source` is used; its directories are not
/// mirrored under `out_dir`.
pub fn output_stem(out_dir: &Path, source: &Path, blocksize: BlockSize) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    out_dir.join(format!("{stem}-{blocksize}"))
}

/// Paths of the two files produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub png: PathBuf,
    pub svg: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path, source: &Path, blocksize: BlockSize) -> Self {
        let stem = output_stem(out_dir, source, blocksize);
        Self {
            png: append_extension(&stem, "png"),
            svg: append_extension(&stem, "svg"),
        }
    }

    /// Write both files, or neither.
    ///
    /// The output directory is created if missing. Both files are staged in
    /// sibling temporary files before either is renamed into place, so a
    /// failed write leaves any previous pair untouched. If the SVG rename
    /// fails after the PNG was committed, the new PNG is removed again.
    pub fn commit(&self, png: &[u8], svg: &[u8]) -> Result<(), HalftoneError> {
        if let Some(dir) = self.png.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| HalftoneError::io(dir, e))?;
        }

        let png_staged = stage(&self.png, png)?;
        let svg_staged = match stage(&self.svg, svg) {
            Ok(staged) => staged,
            Err(e) => {
                discard(&png_staged);
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&png_staged, &self.png) {
            discard(&png_staged);
            discard(&svg_staged);
            return Err(HalftoneError::io(&self.png, e));
        }
        if let Err(e) = fs::rename(&svg_staged, &self.svg) {
            discard(&svg_staged);
            discard(&self.png);
            return Err(HalftoneError::io(&self.svg, e));
        }
        Ok(())
    }
}

// `Path::with_extension` would clobber a dotted stem such as `my.cat-8`
fn append_extension(stem: &Path, extension: &str) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".partial");
    PathBuf::from(staging)
}

/// Write `bytes` to a temporary sibling of `path` and return its location.
fn stage(path: &Path, bytes: &[u8]) -> Result<PathBuf, HalftoneError> {
    let staging = staging_path(path);
    let result = fs::File::create(&staging).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });

    match result {
        Ok(()) => Ok(staging),
        Err(e) => {
            discard(&staging);
            Err(HalftoneError::io(path, e))
        }
    }
}

/// Remove a file left over by a failed commit.
fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(cleanup) => {
            tracing::warn!(
                path = %path.display(),
                %cleanup,
                "Failed to remove partial output"
            );
        }
    }
}
