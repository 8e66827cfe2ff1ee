//! Atomic manifest I/O
//!
//! Writes go to a temp sibling in the target directory, then an atomic
//! rename publishes the content. A reader observes either the previous
//! complete file or the new complete file, never a truncated one.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::{Error, Result};

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename in the target's own directory so the
/// rename never crosses a filesystem boundary. An advisory exclusive lock
/// is held on the temp file while writing. The parent directory is not
/// created; a missing parent is the caller's failure to report.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    // Flush to disk before the rename publishes it
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    fs2::FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Best-effort check that a directory exists and accepts writes.
///
/// Inherently racy (TOCTOU); the atomic rename is the actual correctness
/// guarantee. This only lets the reconciler fail fast on an obviously
/// unusable target.
pub fn dir_writable(dir: &Path) -> bool {
    match fs::metadata(dir) {
        Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
        Err(_) => false,
    }
}
