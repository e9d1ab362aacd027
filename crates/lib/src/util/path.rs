//! Path resolution against the project root.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve a configured path against the project root.
///
/// Absolute paths are returned as-is.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
  if path.is_absolute() {
    path.to_path_buf()
  } else {
    root.join(path)
  }
}

/// Lexically check that `path` names something strictly below `root`.
///
/// Works on paths that do not exist yet, so nothing is canonicalized: any
/// `..` component is rejected outright, and `.` components are ignored.
pub fn is_strictly_inside(root: &Path, path: &Path) -> bool {
  let relative = if path.is_absolute() {
    match path.strip_prefix(root) {
      Ok(rest) => rest,
      Err(_) => return false,
    }
  } else {
    path
  };

  let mut depth = 0usize;
  for component in relative.components() {
    match component {
      Component::Normal(_) => depth += 1,
      Component::CurDir => {}
      Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
    }
  }
  depth > 0
}

/// Check that the parent of an existing `path` resolves, following symlinks,
/// to `root` or a directory below it.
///
/// Complements [`is_strictly_inside`]: a lexically safe path can still leave
/// the root through a symlinked directory.
pub fn parent_resolves_inside(root: &Path, path: &Path) -> io::Result<bool> {
  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  let root = fs::canonicalize(root)?;
  Ok(fs::canonicalize(parent)?.starts_with(root))
}
