//! Directory mirroring.
//!
//! Walks a source tree depth-first, directories before their contents and
//! siblings in file-name order, and rebuilds it under a destination folder:
//!
//! ```text
//! photos/                    small/
//! ├── a/                     ├── a/
//! │   └── b/            →    │   └── b/
//! │       └── img1.png       │       └── img1.png   (resized)
//! └── cover.jpg              └── cover.jpeg         (resized)
//! ```
//!
//! ## Path Mirroring
//!
//! The destination of every entry comes from [`naming::destination_path`]:
//! each occurrence of the root folder's name in the entry path is replaced
//! by the destination name. Outputs therefore land next to the source root
//! (`/data/photos/...` → `/data/small/...`), and a directory deeper in the
//! tree that shares the root's name is renamed as well.
//!
//! ## Entry Kinds
//!
//! - **Directories** are created (with parents) before anything inside them
//!   is visited.
//! - **Regular files** are handed to [`resize_one`]. Every regular file must
//!   be a PNG or JPEG; anything else aborts the walk.
//! - **Everything else** (symlinks, sockets, devices) is skipped. Links are
//!   never followed.
//!
//! ## Failure
//!
//! The walk stops at the first error: an entry that cannot be read, a
//! directory that cannot be created, or a failed resize. Work already written
//! stays on disk.

use crate::imaging::{BackendError, ImageBackend, ResizeRequest, Scaler, resize_one};
use crate::naming::{self, root_folder_name};
use crate::output::{Progress, ProgressEvent};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Source path {0:?} has no final folder name to mirror (remove the trailing '/')")]
    EmptyRootName(String),
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
    #[error("Failed to access {path}: {source}")]
    Access {
        path: String,
        source: walkdir::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// A folder-mode run: which tree to mirror, and how to resize its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRequest {
    /// Source root exactly as given; its final segment is the name replaced
    /// in every mirrored path.
    pub source_root: String,
    /// Bare folder name substituted for the root's name.
    pub destination_name: String,
    pub scaler: Scaler,
    pub width: u32,
    pub height: Option<u32>,
}

/// What a walk did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Destination directories created (or already present).
    pub directories: usize,
    /// Files written, in visit order.
    pub resized: Vec<PathBuf>,
    /// Source entries that were neither directories nor regular files.
    pub skipped: Vec<PathBuf>,
}

/// Mirror `request.source_root` under `request.destination_name`, resizing
/// every regular file on the way.
pub fn walk_and_resize<W: Write>(
    backend: &impl ImageBackend,
    request: &TreeRequest,
    progress: &mut Progress<W>,
) -> Result<WalkSummary, WalkError> {
    let root_name = root_folder_name(&request.source_root);
    if root_name.is_empty() {
        return Err(WalkError::EmptyRootName(request.source_root.clone()));
    }

    let mut summary = WalkSummary::default();

    for entry in WalkDir::new(&request.source_root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| request.source_root.clone());
            tracing::warn!(%path, error = %err, "cannot access path, stopping walk");
            WalkError::Access { path, source: err }
        })?;

        let entry_path = entry
            .path()
            .to_str()
            .ok_or_else(|| WalkError::NonUtf8Path(entry.path().to_path_buf()))?;
        let destination = PathBuf::from(naming::destination_path(
            entry_path,
            root_name,
            &request.destination_name,
        ));

        let file_type = entry.file_type();
        if file_type.is_dir() {
            create_mirror_dir(&destination)?;
            summary.directories += 1;
        } else if file_type.is_file() {
            let folder = destination
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let resize = ResizeRequest {
                source: entry.path().to_path_buf(),
                destination: folder.to_path_buf(),
                scaler: request.scaler,
                width: request.width,
                height: request.height,
            };
            let written = resize_one(backend, &resize, progress)?;
            progress.emit(ProgressEvent::ItemFinished)?;
            summary.resized.push(written);
        } else {
            tracing::debug!(path = %entry_path, "skipping entry that is not a regular file");
            summary.skipped.push(entry.path().to_path_buf());
        }
    }

    Ok(summary)
}

/// `mkdir -p` with mode 0755 on unix. Existing directories are fine.
fn create_mirror_dir(path: &Path) -> Result<(), WalkError> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path).map_err(|source| WalkError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
