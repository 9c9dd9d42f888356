//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the three steps of a resize that touch
//! pixels or codecs: decode, scale, encode. Everything else (dimension
//! resolution, naming, traversal, progress output) is backend-agnostic.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::{Quality, Scaler};
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("Unsupported image format {format} in {path} (only png and jpeg are handled)")]
    UnsupportedFormat { path: String, format: String },
    #[error("Failed to encode {path}: {message}")]
    Encode { path: String, message: String },
    #[error("No height given for width {0}; height is only inferred at the default width")]
    UnresolvedHeight(u32),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Format tag recorded at decode time. The encoder for the output is always
/// picked from this tag, never from the destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
}

impl SourceFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Png => "png",
            SourceFormat::Jpeg => "jpeg",
        }
    }
}

/// A decoded pixel grid plus the format it came from.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub pixels: DynamicImage,
    pub format: SourceFormat,
}

impl ImageAsset {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Open and decode the file at `path`, sniffing its format from content.
    fn decode(&self, path: &Path) -> Result<ImageAsset, BackendError>;

    /// Stretch `asset` onto a fresh grid of exactly `target` size.
    /// The returned asset keeps the source format tag.
    fn scale(&self, asset: &ImageAsset, target: Dimensions, scaler: Scaler) -> ImageAsset;

    /// Encode `asset` in its own format and write it to `output`.
    fn encode(&self, asset: &ImageAsset, output: &Path, quality: Quality)
    -> Result<(), BackendError>;
}
