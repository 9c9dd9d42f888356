//! # imgshrink
//!
//! Batch image resizer. Point it at one image or a directory tree and it
//! writes stretched copies at the requested size, keeping each file's format
//! and, for trees, the folder layout.
//!
//! ```text
//! imgshrink -m folder -p photos -dst small -w 400
//!
//! photos/a/b/img1.png   →   small/a/b/img1.png
//! photos/cover.jpg      →   small/cover.jpeg
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dispatch`] | Routes a validated config to a single resize or a tree walk |
//! | [`walk`] | Mirrors a source tree under the destination, resizing every file |
//! | [`imaging`] | Dimension resolution, the backend trait, and the `image`-crate backend |
//! | [`naming`] | String rules for base names and mirrored paths |
//! | [`config`] | Defaults, optional TOML file, command-line overrides, validation |
//! | [`output`] | Progress lines printed while resizing |
//!
//! # Design Decisions
//!
//! ## Stretch, Don't Fit
//!
//! The output always has exactly the requested width and height. The only
//! aspect-ratio help is narrow: with the default width (400) and no height,
//! the height follows the source's proportions. Any other width needs an
//! explicit height.
//!
//! ## Format Follows Content
//!
//! The encoder is chosen from the decoded source, so a PNG yields a `.png`
//! and a JPEG yields a `.jpeg` no matter what the source file was called.
//! JPEGs are written at quality 100.
//!
//! ## Textual Path Mirroring
//!
//! Destination paths are produced by replacing the source root's folder name
//! in each path string, so nested folders that share the root's name are
//! renamed too. Existing output trees depend on this layout. See [`naming`].
//!
//! ## Stop at the First Error
//!
//! A run is sequential and ends at the first failure. Outputs written so far
//! stay on disk; there is no resume.

pub mod config;
pub mod dispatch;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
