mod build;
mod clean;
mod config;
mod plan;
mod tasks;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assetline_lib::{BuildConfig, ConfigSource, Orchestrator, TaskName};

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use config::cmd_config;
pub use plan::cmd_plan;
pub use tasks::cmd_tasks;

/// A project root together with its effective configuration.
pub struct Project {
  pub root: PathBuf,
  pub config: BuildConfig,
  pub source: ConfigSource,
}

impl Project {
  /// Resolve the root to an absolute path (defaults to the current directory)
  /// and load its config.
  pub fn load(root: Option<&Path>, config: Option<&Path>) -> Result<Self> {
    let root = match root {
      Some(root) => {
        std::path::absolute(root).with_context(|| format!("Failed to resolve project root {}", root.display()))?
      }
      None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let (config, source) =
      BuildConfig::discover(&root, config).with_context(|| format!("Failed to load config for {}", root.display()))?;

    Ok(Self { root, config, source })
  }

  pub fn orchestrator(&self) -> Result<Orchestrator> {
    Orchestrator::new(self.config.clone(), &self.root).context("Invalid build configuration")
  }

  /// Parse task names from the command line, falling back to the default sequence.
  pub fn tasks(&self, names: &[String]) -> Result<Vec<TaskName>> {
    if names.is_empty() {
      return Ok(self.config.default_sequence());
    }
    TaskName::parse_list(names).context("Invalid task list")
  }
}
