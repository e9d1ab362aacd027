//! Package descriptor metadata.
//!
//! The descriptor (typically `package.json`) is read once at the start of a
//! run and kept as an opaque JSON value. Nothing downstream depends on its
//! content; `name` and `version` are surfaced for logs and summaries only.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Opaque metadata loaded from the package descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageMetadata {
  raw: Value,
}

/// The parts of the descriptor shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
  pub name: Option<String>,
  pub version: Option<String>,
}

impl PackageMetadata {
  pub fn load(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path).map_err(|source| Error::PackageRead {
      path: path.to_path_buf(),
      source,
    })?;
    let raw = serde_json::from_str(&text).map_err(|source| Error::PackageParse {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(Self { raw })
  }

  pub fn raw(&self) -> &Value {
    &self.raw
  }

  pub fn name(&self) -> Option<&str> {
    self.raw.get("name").and_then(Value::as_str)
  }

  pub fn version(&self) -> Option<&str> {
    self.raw.get("version").and_then(Value::as_str)
  }

  pub fn info(&self) -> PackageInfo {
    PackageInfo {
      name: self.name().map(str::to_string),
      version: self.version().map(str::to_string),
    }
  }
}
