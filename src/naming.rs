//! String rules for naming outputs.
//!
//! Both rules are deliberately textual rather than structural, and tree mode
//! depends on that:
//!
//! - The output base name is everything before the *first* dot of the file
//!   name: `holiday.2024.png` → `holiday`.
//! - A mirrored path is the source path with *every* occurrence of the root
//!   folder's name replaced by the destination name. For a root named `root`,
//!   `root/a/root/x.png` becomes `small/a/small/x.png`, not
//!   `small/a/root/x.png`.

use std::path::Path;

/// Final `/`-separated segment of the source root as typed.
///
/// This is string-based: `photos/` yields an empty name, and `.` stays `.`.
pub fn root_folder_name(source_root: &str) -> &str {
    source_root.rsplit('/').next().unwrap_or(source_root)
}

/// Replace every literal occurrence of `root_name` in `entry_path`.
///
/// `root_name` must be non-empty; an empty pattern would match between every
/// character.
pub fn destination_path(entry_path: &str, root_name: &str, destination_name: &str) -> String {
    debug_assert!(!root_name.is_empty(), "root folder name must not be empty");
    entry_path.replace(root_name, destination_name)
}

/// Output base name: the file name up to its first `.`.
///
/// - `"a/b/img1.png"` → `"img1"`
/// - `"a/photo.final.jpg"` → `"photo"`
/// - `"a/README"` → `"README"`
/// - `"a/.hidden"` → `""`
pub fn base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}
