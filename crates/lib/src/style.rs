//! The `styles` task.
//!
//! Compiles one Sass/SCSS entry into one CSS file using `grass`. Imports are
//! resolved relative to the entry first, then through each load path in the
//! configured order.

use std::path::Path;

use tracing::{debug, info};

use crate::config::{OutputStyle, StyleTask};
use crate::error::{Error, Result};
use crate::report::OutputRecord;
use crate::util::fs::write_if_changed;
use crate::util::hash::hash_bytes;
use crate::util::path::resolve;

impl From<OutputStyle> for grass::OutputStyle {
  fn from(style: OutputStyle) -> Self {
    match style {
      OutputStyle::Compressed => grass::OutputStyle::Compressed,
      OutputStyle::Expanded => grass::OutputStyle::Expanded,
    }
  }
}

/// Compile the entry stylesheet to a CSS string without writing anything.
pub fn compile(task: &StyleTask, root: &Path) -> Result<String> {
  let source = resolve(root, &task.source);
  if !source.is_file() {
    return Err(Error::SourceMissing(source));
  }

  let mut options = grass::Options::default().style(task.style.into());
  for load_path in &task.load_paths {
    let load_path = resolve(root, load_path);
    if !load_path.is_dir() {
      debug!(path = %load_path.display(), "load path does not exist");
    }
    options = options.load_path(load_path);
  }

  grass::from_path(&source, &options).map_err(|e| Error::Style {
    path: source.clone(),
    message: e.to_string(),
  })
}

/// Compile the entry stylesheet and write it to the configured destination.
pub fn compile_styles(task: &StyleTask, root: &Path) -> Result<OutputRecord> {
  info!(source = %task.source.display(), dest = %task.dest.display(), "compiling styles");

  let css = compile(task, root)?;
  let dest = resolve(root, &task.dest);
  let outcome = write_if_changed(&dest, css.as_bytes())?;

  Ok(OutputRecord {
    path: task.dest.clone(),
    status: outcome.into(),
    bytes: css.len() as u64,
    sha256: Some(hash_bytes(css.as_bytes())),
  })
}
