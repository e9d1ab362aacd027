//! Output file writes.
//!
//! Outputs are compared with what is already on disk before writing, so a
//! rebuild with unchanged inputs leaves every file untouched.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// What happened to an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
  /// The file was created or its content replaced.
  Written,
  /// The file already held exactly these bytes.
  Unchanged,
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
      fs::create_dir_all(parent).map_err(Error::io(parent))
    }
    _ => Ok(()),
  }
}

/// Returns true when `path` is a regular file whose content equals `content`.
pub fn same_content(path: &Path, content: &[u8]) -> bool {
  match fs::metadata(path) {
    Ok(meta) if meta.is_file() && meta.len() == content.len() as u64 => {
      fs::read(path).map(|existing| existing == content).unwrap_or(false)
    }
    _ => false,
  }
}

/// Write `content` to `path`, creating parents and overwriting any previous file.
///
/// Skips the write when the file already holds the same bytes.
pub fn write_if_changed(path: &Path, content: &[u8]) -> Result<WriteOutcome> {
  if same_content(path, content) {
    debug!(path = %path.display(), "output unchanged");
    return Ok(WriteOutcome::Unchanged);
  }

  ensure_parent(path)?;
  fs::write(path, content).map_err(Error::io(path))?;
  Ok(WriteOutcome::Written)
}
