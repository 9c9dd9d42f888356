//! Image processing: decode, stretch, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (PNG, JPEG; content-sniffed) |
//! | **Scale** | `image::imageops::resize` (Nearest, Triangle, CatmullRom) |
//! | **Encode** | `PngEncoder`, `JpegEncoder` at quality 100 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a resize
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`resize_one`], combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageAsset, ImageBackend, SourceFormat};
pub use calculations::{DEFAULT_WIDTH, resolve_dimensions};
pub use operations::{output_path, resize_one};
pub use params::{Quality, ResizeRequest, Scaler};
pub use rust_backend::RustBackend;
