//! High-level image operations.
//!
//! These functions combine calculations with backend execution: they take a
//! request, resolve the target size, and drive the backend through decode,
//! scale and encode while reporting progress.

use super::backend::{BackendError, ImageBackend, SourceFormat};
use super::calculations::resolve_dimensions;
use super::params::{Quality, ResizeRequest};
use crate::naming::base_name;
use crate::output::{Progress, ProgressEvent};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Where a resized copy of `source` lands: `<destination>/<base>.<ext>`,
/// with the extension taken from the decoded format.
pub fn output_path(destination: &Path, source: &Path, format: SourceFormat) -> PathBuf {
    destination.join(format!("{}.{}", base_name(source), format.extension()))
}

/// Resize one image file and write the result into the request's
/// destination folder, which must already exist.
///
/// Any failure (unreadable source, unsupported data, unwritable output) is
/// returned as-is; callers treat it as fatal for the whole run. A file that
/// fails mid-write is left on disk.
///
/// Returns the path of the written file.
pub fn resize_one<W: Write>(
    backend: &impl ImageBackend,
    request: &ResizeRequest,
    progress: &mut Progress<W>,
) -> Result<PathBuf> {
    progress.emit(ProgressEvent::Opening(request.source.clone()))?;
    let source = backend.decode(&request.source)?;
    progress.emit(ProgressEvent::Done)?;

    let original = source.dimensions();
    let target = resolve_dimensions(request.width, request.height, original)
        .ok_or(BackendError::UnresolvedHeight(request.width))?;

    progress.emit(ProgressEvent::Resizing)?;
    let resized = backend.scale(&source, target, request.scaler);
    drop(source);
    progress.emit(ProgressEvent::Done)?;

    let output = output_path(&request.destination, &request.source, resized.format);
    progress.emit(ProgressEvent::Saving(output.clone()))?;
    backend.encode(&resized, &output, Quality::MAX)?;
    progress.emit(ProgressEvent::Done)?;

    tracing::debug!(
        source = %request.source.display(),
        output = %output.display(),
        from = ?(original.width, original.height),
        to = ?(target.width, target.height),
        scaler = %request.scaler,
        "resized image"
    );
    Ok(output)
}
