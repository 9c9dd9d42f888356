//! Entry point shared by the binary and tests: route a validated
//! [`ResizeConfig`] to a single resize or a tree walk.
//!
//! The first error ends the run. Nothing is retried and files already
//! written are kept.

use crate::config::{Mode, ResizeConfig};
use crate::imaging::{BackendError, ImageBackend, ResizeRequest, resize_one};
use crate::output::Progress;
use crate::walk::{TreeRequest, WalkError, WalkSummary, walk_and_resize};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Imaging(#[from] BackendError),
    #[error(transparent)]
    Walk(#[from] WalkError),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    Image(PathBuf),
    Folder(WalkSummary),
}

/// Run the resize described by `config`.
///
/// `config` is expected to have passed [`ResizeConfig::validate`].
pub fn run<W: Write>(
    backend: &impl ImageBackend,
    config: &ResizeConfig,
    progress: &mut Progress<W>,
) -> Result<RunSummary, DispatchError> {
    match config.mode {
        Mode::Image => {
            let request = ResizeRequest {
                source: PathBuf::from(&config.path),
                destination: PathBuf::from(&config.dst),
                scaler: config.scaler,
                width: config.width,
                height: config.target_height(),
            };
            let written = resize_one(backend, &request, progress)?;
            Ok(RunSummary::Image(written))
        }
        Mode::Folder => {
            let request = TreeRequest {
                source_root: config.path.clone(),
                destination_name: config.dst.clone(),
                scaler: config.scaler,
                width: config.width,
                height: config.target_height(),
            };
            let summary = walk_and_resize(backend, &request, progress)?;
            tracing::info!(
                directories = summary.directories,
                resized = summary.resized.len(),
                skipped = summary.skipped.len(),
                "folder run complete"
            );
            Ok(RunSummary::Folder(summary))
        }
    }
}
