//! Shared test utilities for the imgshrink test suite.
//!
//! Fixtures are synthesized with the `image` crate into temp directories, so
//! tests never depend on checked-in binary files.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_tree(tmp.path(), &[("root/a/b/img1.png", (64, 32))]);
//! assert_eq!(relative_files(&tmp.path().join("root")), vec!["a/b/img1.png"]);
//! ```

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a small gradient PNG with an alpha channel.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Write a small gradient JPEG.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(path, image::ImageFormat::Jpeg).unwrap();
}

/// Create every file in `files` under `root`, making parent directories.
///
/// The format is picked from the extension: `.jpg`/`.jpeg` become JPEGs,
/// everything else a PNG.
pub fn write_tree(root: &Path, files: &[(&str, (u32, u32))]) {
    for (relative, (width, height)) in files {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let is_jpeg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));
        if is_jpeg {
            create_test_jpeg(&path, *width, *height);
        } else {
            create_test_png(&path, *width, *height);
        }
    }
}

// =========================================================================
// Output inspection
// =========================================================================

/// All regular files under `root`, as sorted `/`-joined relative paths.
pub fn relative_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}
