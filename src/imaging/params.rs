//! Parameter types for image operations.
//!
//! These types describe *what* to do, not *how* to do it. They are the
//! interface between the orchestration layers ([`operations`](super::operations)
//! and the tree walker) and the [`backend`](super::backend), which does the
//! actual pixel work.
//!
//! ## Types
//!
//! - [`Scaler`]: The closed set of resampling algorithms a run may select.
//! - [`Quality`]: Lossy encoding quality (1–100). Clamped on construction.
//! - [`ResizeRequest`]: One resize: source file, destination folder, scaler, target size.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Resampling algorithm used to stretch the source grid onto the target grid.
///
/// Names match the command-line and config-file spelling exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Scaler {
    #[default]
    #[value(name = "NearestNeighbor")]
    NearestNeighbor,
    #[value(name = "ApproxBiLinear")]
    ApproxBiLinear,
    #[value(name = "BiLinear")]
    BiLinear,
    #[value(name = "CatmullRom")]
    CatmullRom,
}

impl Scaler {
    pub const ALL: [Scaler; 4] = [
        Scaler::NearestNeighbor,
        Scaler::ApproxBiLinear,
        Scaler::BiLinear,
        Scaler::CatmullRom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scaler::NearestNeighbor => "NearestNeighbor",
            Scaler::ApproxBiLinear => "ApproxBiLinear",
            Scaler::BiLinear => "BiLinear",
            Scaler::CatmullRom => "CatmullRom",
        }
    }

    /// Resampling filter from the `image` crate backing this algorithm.
    ///
    /// `image` has a single triangle (bilinear) kernel, so the approximate and
    /// exact bilinear variants share it.
    pub fn filter(self) -> FilterType {
        match self {
            Scaler::NearestNeighbor => FilterType::Nearest,
            Scaler::ApproxBiLinear | Scaler::BiLinear => FilterType::Triangle,
            Scaler::CatmullRom => FilterType::CatmullRom,
        }
    }
}

impl fmt::Display for Scaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    /// JPEG output is always written at full quality.
    pub const MAX: Quality = Quality(100);

    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// A single resize: where to read, where to write, and how big.
///
/// `height: None` is the "unset" sentinel; the dimension resolver decides
/// what it becomes once the source has been decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub scaler: Scaler,
    pub width: u32,
    pub height: Option<u32>,
}
