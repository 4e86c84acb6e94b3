//! Filesystem helpers for trace bundles.
//!
//! A `.trace` bundle is a directory package on macOS, but may also be a
//! single file (or a stub written by tests).

use std::fs;
use std::io;
use std::path::Path;

/// Total size in bytes of a bundle: file length, or the sum of all
/// regular files below a bundle directory
pub fn bundle_size(path: &Path) -> io::Result<u64> {
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let mut total = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            total += bundle_size(&entry.path())?;
        } else if file_type.is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
