//! The `copy` task.
//!
//! Entries are processed strictly in order and the first failure aborts the
//! rest. Entries without a transform are copied byte for byte; entries with
//! one are read as UTF-8 text, transformed, and written back as text.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{CopyEntry, CopyTask};
use crate::error::{Error, Result};
use crate::report::{OutputRecord, OutputStatus};
use crate::util::fs::write_if_changed;
use crate::util::hash::hash_bytes;
use crate::util::path::resolve;

/// Run every copy instruction in order.
pub fn copy_files(task: &CopyTask, root: &Path) -> Result<Vec<OutputRecord>> {
  info!(count = task.files.len(), "copying files");

  let mut outputs = Vec::with_capacity(task.files.len());
  for entry in &task.files {
    outputs.push(copy_entry(entry, root)?);
  }
  Ok(outputs)
}

/// Run a single copy instruction.
pub fn copy_entry(entry: &CopyEntry, root: &Path) -> Result<OutputRecord> {
  let source = resolve(root, &entry.source);
  let dest = resolve(root, &entry.dest);

  if !source.is_file() {
    return Err(Error::SourceMissing(source));
  }

  let content = fs::read(&source).map_err(Error::io(&source))?;

  let content = match &entry.transform {
    None => content,
    Some(transform) => {
      let text = String::from_utf8(content).map_err(|_| Error::Transform(source.clone()))?;
      debug!(source = %entry.source.display(), transform = %transform.describe(), "transforming");
      transform.apply(&text).into_bytes()
    }
  };

  let status: OutputStatus = write_if_changed(&dest, &content)?.into();
  let sha256 = hash_bytes(&content);

  info!(
    source = %entry.source.display(),
    dest = %entry.dest.display(),
    ?status,
    %sha256,
    "copied"
  );

  Ok(OutputRecord {
    path: entry.dest.clone(),
    status,
    bytes: content.len() as u64,
    sha256: Some(sha256),
  })
}
