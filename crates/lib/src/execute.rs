//! Task execution.
//!
//! The [`Orchestrator`] owns a validated [`BuildConfig`] and a project root,
//! and runs tasks strictly in the order given. The first failing task aborts
//! the sequence; later tasks never start.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::clean::clean;
use crate::config::BuildConfig;
use crate::copy::copy_files;
use crate::error::{Error, Result};
use crate::package::PackageMetadata;
use crate::report::{BuildReport, TaskReport};
use crate::style::compile_styles;
use crate::task::TaskName;
use crate::util::path::resolve;

/// Runs tasks from one immutable configuration.
#[derive(Debug, Clone)]
pub struct Orchestrator {
  config: BuildConfig,
  root: PathBuf,
}

impl Orchestrator {
  /// Validate `config` and bind it to a project root.
  pub fn new(config: BuildConfig, root: impl Into<PathBuf>) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      config,
      root: root.into(),
    })
  }

  pub fn config(&self) -> &BuildConfig {
    &self.config
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Load the package descriptor, if one is declared.
  pub fn load_package(&self) -> Result<Option<PackageMetadata>> {
    self
      .config
      .package
      .as_ref()
      .map(|path| PackageMetadata::load(&resolve(&self.root, path)))
      .transpose()
  }

  /// Run the default sequence.
  pub fn run_default(&self) -> Result<BuildReport> {
    self.run(&self.config.default_sequence())
  }

  /// Run `tasks` in order, stopping at the first error.
  pub fn run(&self, tasks: &[TaskName]) -> Result<BuildReport> {
    // Every requested task must be runnable before the first one starts.
    for task in tasks {
      if !self.config.is_configured(*task) {
        return Err(Error::TaskNotConfigured(task.to_string()));
      }
    }

    let package = self.load_package()?;
    if let Some(package) = &package {
      info!(
        name = package.name().unwrap_or("-"),
        version = package.version().unwrap_or("-"),
        "loaded package descriptor"
      );
    }

    if tasks.is_empty() {
      warn!("no tasks to run");
    }

    let mut report = BuildReport {
      package: package.as_ref().map(PackageMetadata::info),
      tasks: Vec::with_capacity(tasks.len()),
    };

    for task in tasks {
      let task_report = self.run_task(*task)?;
      report.tasks.push(task_report);
    }

    Ok(report)
  }

  /// Run a single task.
  pub fn run_task(&self, task: TaskName) -> Result<TaskReport> {
    info!(%task, "running task");
    let started = Instant::now();

    let outputs = match task {
      TaskName::Styles => vec![compile_styles(&self.config.styles, &self.root)?],
      TaskName::Copy => {
        let copy = self
          .config
          .copy
          .as_ref()
          .ok_or_else(|| Error::TaskNotConfigured(task.to_string()))?;
        copy_files(copy, &self.root)?
      }
      TaskName::Clean => vec![clean(&self.config.clean, &self.root)?],
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    info!(%task, outputs = outputs.len(), elapsed_ms, "task finished");

    Ok(TaskReport {
      task,
      outputs,
      elapsed_ms,
    })
  }
}
