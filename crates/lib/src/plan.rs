//! Dry-run planning.
//!
//! A [`Plan`] lists, in execution order, every path a task sequence would
//! write or remove. Computing it never touches the filesystem beyond
//! existence checks.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::task::TaskName;
use crate::util::path::{is_strictly_inside, resolve};

/// What a step would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlannedAction {
  /// Compile `source` into `dest`.
  Compile { source: PathBuf, dest: PathBuf },
  /// Copy `source` to `dest`, optionally through a transform.
  Copy {
    source: PathBuf,
    dest: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform: Option<String>,
  },
  /// Remove `path` recursively.
  Remove { path: PathBuf },
}

/// A single planned step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
  pub task: TaskName,
  #[serde(flatten)]
  pub action: PlannedAction,
  /// Whether the input (or, for `clean`, the target) exists right now.
  pub input_present: bool,
}

impl PlannedStep {
  /// The path this step writes or removes.
  pub fn target(&self) -> &Path {
    match &self.action {
      PlannedAction::Compile { dest, .. } | PlannedAction::Copy { dest, .. } => dest,
      PlannedAction::Remove { path } => path,
    }
  }

  pub fn description(&self) -> String {
    match &self.action {
      PlannedAction::Compile { source, .. } => format!("compile {}", source.display()),
      PlannedAction::Copy {
        source,
        transform: None,
        ..
      } => format!("copy from {}", source.display()),
      PlannedAction::Copy {
        source,
        transform: Some(transform),
        ..
      } => format!("copy from {} ({})", source.display(), transform),
      PlannedAction::Remove { .. } => "remove directory".to_string(),
    }
  }
}

/// Every step a task sequence would perform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
  pub steps: Vec<PlannedStep>,
}

impl Plan {
  /// Steps whose inputs are missing; running the sequence would fail at the first one.
  pub fn missing_inputs(&self) -> impl Iterator<Item = &PlannedStep> {
    self
      .steps
      .iter()
      .filter(|step| !step.input_present && !matches!(step.action, PlannedAction::Remove { .. }))
  }
}

/// Compute the plan for `tasks` against `root`.
pub fn compute_plan(config: &BuildConfig, tasks: &[TaskName], root: &Path) -> Result<Plan> {
  let mut plan = Plan::default();

  for task in tasks {
    match task {
      TaskName::Styles => {
        let styles = &config.styles;
        plan.steps.push(PlannedStep {
          task: *task,
          action: PlannedAction::Compile {
            source: styles.source.clone(),
            dest: styles.dest.clone(),
          },
          input_present: resolve(root, &styles.source).is_file(),
        });
      }
      TaskName::Copy => {
        let copy = config
          .copy
          .as_ref()
          .ok_or_else(|| Error::TaskNotConfigured(task.to_string()))?;
        for entry in &copy.files {
          plan.steps.push(PlannedStep {
            task: *task,
            action: PlannedAction::Copy {
              source: entry.source.clone(),
              dest: entry.dest.clone(),
              transform: entry.transform.as_ref().map(|t| t.describe()),
            },
            input_present: resolve(root, &entry.source).is_file(),
          });
        }
      }
      TaskName::Clean => {
        if !is_strictly_inside(root, &config.clean) {
          return Err(Error::UnsafeCleanTarget(config.clean.clone()));
        }
        plan.steps.push(PlannedStep {
          task: *task,
          action: PlannedAction::Remove {
            path: config.clean.clone(),
          },
          input_present: resolve(root, &config.clean).exists(),
        });
      }
    }
  }

  Ok(plan)
}
