//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image::ImageReader` with content sniffing |
//! | Scale | `image::imageops::resize` onto an RGBA grid |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality 100) |

use super::backend::{BackendError, Dimensions, ImageAsset, ImageBackend, SourceFormat};
use super::params::{Quality, Scaler};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn source_format(path: &Path, format: Option<ImageFormat>) -> Result<SourceFormat, BackendError> {
    match format {
        Some(ImageFormat::Png) => Ok(SourceFormat::Png),
        Some(ImageFormat::Jpeg) => Ok(SourceFormat::Jpeg),
        Some(other) => Err(BackendError::UnsupportedFormat {
            path: path.display().to_string(),
            format: format!("{other:?}"),
        }),
        None => Err(BackendError::Decode {
            path: path.display().to_string(),
            message: "unrecognized image data".to_string(),
        }),
    }
}

/// Write `img` with the encoder matching `format`.
///
/// JPEG has no alpha channel, so the RGBA grid is flattened to RGB first.
fn save_image(
    img: &DynamicImage,
    path: &Path,
    format: SourceFormat,
    quality: Quality,
) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = BufWriter::new(file);
    let encode_err = |e: image::ImageError| BackendError::Encode {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    match format {
        SourceFormat::Png => img
            .write_with_encoder(PngEncoder::new(writer))
            .map_err(encode_err),
        SourceFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, quality.value()))
                .map_err(encode_err)
        }
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<ImageAsset, BackendError> {
        let reader = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?;
        let format = source_format(path, reader.format())?;
        let pixels = reader.decode().map_err(|e| BackendError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(ImageAsset { pixels, format })
    }

    fn scale(&self, asset: &ImageAsset, target: Dimensions, scaler: Scaler) -> ImageAsset {
        // Drawing "over" a fully transparent canvas leaves exactly the scaled
        // source pixels, so the resized grid is used as-is.
        let scaled = image::imageops::resize(
            &asset.pixels.to_rgba8(),
            target.width,
            target.height,
            scaler.filter(),
        );
        ImageAsset {
            pixels: DynamicImage::ImageRgba8(scaled),
            format: asset.format,
        }
    }

    fn encode(
        &self,
        asset: &ImageAsset,
        output: &Path,
        quality: Quality,
    ) -> Result<(), BackendError> {
        save_image(&asset.pixels, output, asset.format, quality)
    }
}
