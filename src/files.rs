// src/files.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively enumerate every file under `root`, lazily.
///
/// A missing root, or a root that is not a directory, yields an empty
/// sequence rather than an error. Entries that fail to read mid-walk
/// (access denied, overlong paths) are skipped and the walk continues
/// with their siblings. Symbolic links are not followed.
pub fn enumerate_files(root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    if !root.is_dir() {
        log::debug!("directory not found, yielding nothing: {}", root.display());
    }

    root.is_dir()
        .then(|| WalkDir::new(root).follow_links(false).into_iter())
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
}
