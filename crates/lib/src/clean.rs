//! The `clean` task.
//!
//! Removes the declared output directory recursively. The target must lie
//! strictly inside the project root; the root itself and anything reached
//! through `..`, an unrelated absolute path or a symlinked parent directory
//! are refused.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::report::{OutputRecord, OutputStatus};
use crate::util::path::{is_strictly_inside, parent_resolves_inside, resolve};

/// Remove `target` (relative to `root`). An already-absent target is a no-op.
pub fn clean(target: &Path, root: &Path) -> Result<OutputRecord> {
  if !is_strictly_inside(root, target) {
    return Err(Error::UnsafeCleanTarget(target.to_path_buf()));
  }

  let path = resolve(root, target);
  let metadata = match fs::symlink_metadata(&path) {
    Ok(metadata) => metadata,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
      debug!(path = %target.display(), "nothing to clean");
      return Ok(OutputRecord {
        path: target.to_path_buf(),
        status: OutputStatus::Absent,
        bytes: 0,
        sha256: None,
      });
    }
    Err(e) => return Err(Error::io(&path)(e)),
  };

  // The last component itself may be a symlink; it is unlinked, not followed.
  if !parent_resolves_inside(root, &path).map_err(Error::io(&path))? {
    return Err(Error::UnsafeCleanTarget(target.to_path_buf()));
  }

  let bytes = if metadata.is_dir() {
    let bytes = total_file_bytes(&path);
    fs::remove_dir_all(&path).map_err(Error::io(&path))?;
    bytes
  } else {
    fs::remove_file(&path).map_err(Error::io(&path))?;
    metadata.len()
  };

  info!(path = %target.display(), bytes, "cleaned");

  Ok(OutputRecord {
    path: target.to_path_buf(),
    status: OutputStatus::Removed,
    bytes,
    sha256: None,
  })
}

/// Sum of regular file sizes below `dir`. Unreadable entries count as zero.
fn total_file_bytes(dir: &Path) -> u64 {
  WalkDir::new(dir)
    .into_iter()
    .filter_map(|entry| entry.ok())
    .filter(|entry| entry.file_type().is_file())
    .filter_map(|entry| entry.metadata().ok())
    .map(|metadata| metadata.len())
    .sum()
}
