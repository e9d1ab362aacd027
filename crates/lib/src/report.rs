//! Build reports.
//!
//! Every task returns a [`TaskReport`] describing each output it touched; the
//! orchestrator collects them, in execution order, into a [`BuildReport`].

use std::path::PathBuf;

use serde::Serialize;

use crate::package::PackageInfo;
use crate::task::TaskName;
use crate::util::fs::WriteOutcome;
use crate::util::hash::ContentHash;

/// Final state of one output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStatus {
  /// Created or overwritten with new content.
  Written,
  /// Already held the produced bytes.
  Unchanged,
  /// Deleted by `clean`.
  Removed,
  /// `clean` found nothing to delete.
  Absent,
}

impl From<WriteOutcome> for OutputStatus {
  fn from(outcome: WriteOutcome) -> Self {
    match outcome {
      WriteOutcome::Written => OutputStatus::Written,
      WriteOutcome::Unchanged => OutputStatus::Unchanged,
    }
  }
}

/// One output path touched by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
  pub path: PathBuf,
  pub status: OutputStatus,
  /// Size of the written file, or total size of removed files for `clean`.
  pub bytes: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sha256: Option<ContentHash>,
}

/// The outcome of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
  pub task: TaskName,
  pub outputs: Vec<OutputRecord>,
  pub elapsed_ms: u64,
}

/// The outcome of a whole run, tasks in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub package: Option<PackageInfo>,
  pub tasks: Vec<TaskReport>,
}

impl BuildReport {
  pub fn outputs(&self) -> impl Iterator<Item = &OutputRecord> {
    self.tasks.iter().flat_map(|task| task.outputs.iter())
  }

  pub fn count(&self, status: OutputStatus) -> usize {
    self.outputs().filter(|output| output.status == status).count()
  }

  /// Tasks in the order they ran.
  pub fn task_names(&self) -> Vec<TaskName> {
    self.tasks.iter().map(|task| task.task).collect()
  }
}
