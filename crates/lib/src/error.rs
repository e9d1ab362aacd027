//! Error types for assetline-lib.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a configuration or running tasks.
///
/// Every variant is fatal for the current run: the orchestrator stops at the
/// first error and never retries.
#[derive(Debug, Error)]
pub enum Error {
  /// The configuration file could not be read.
  #[error("failed to read config {}: {source}", .path.display())]
  ConfigRead {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The configuration file is not valid JSON or has the wrong shape.
  #[error("failed to parse config {}: {source}", .path.display())]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// The configuration parsed but describes something that cannot run.
  #[error("invalid config: {0}")]
  ConfigInvalid(String),

  /// The package descriptor could not be read.
  #[error("failed to read package descriptor {}: {source}", .path.display())]
  PackageRead {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The package descriptor is not valid JSON.
  #[error("failed to parse package descriptor {}: {source}", .path.display())]
  PackageParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// An input file named by a task does not exist.
  #[error("source not found: {}", .0.display())]
  SourceMissing(PathBuf),

  /// The stylesheet failed to compile (syntax or import resolution).
  #[error("failed to compile {}: {message}", .path.display())]
  Style { path: PathBuf, message: String },

  /// A transformed copy was requested for a file that is not UTF-8 text.
  #[error("cannot transform {}: not valid UTF-8", .0.display())]
  Transform(PathBuf),

  /// I/O failure on a specific path.
  #[error("io error on {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// `clean` was pointed at the project root or outside of it.
  #[error("refusing to clean {}: path must be inside the project root", .0.display())]
  UnsafeCleanTarget(PathBuf),

  /// A task name that is not in the registry.
  #[error("unknown task '{0}' (expected one of: styles, copy, clean)")]
  UnknownTask(String),

  /// A known task that the loaded configuration does not declare.
  #[error("task '{0}' is not configured")]
  TaskNotConfigured(String),
}

impl Error {
  /// Build a closure that wraps an `io::Error` with the path it happened on.
  pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
      path: path.to_path_buf(),
      source,
    }
  }
}

/// Result type for assetline operations
pub type Result<T> = std::result::Result<T, Error>;
