//! Task registry.
//!
//! The set of tasks is closed and known at compile time. Names are parsed
//! from the command line or the config's `default` list into [`TaskName`],
//! and the orchestrator dispatches on it with a plain `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A registered task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskName {
  /// Compile the stylesheet entry to CSS.
  #[serde(alias = "sass")]
  Styles,
  /// Copy vendor files into the assets directory.
  Copy,
  /// Remove the declared output directory.
  Clean,
}

impl TaskName {
  /// Every registered task, in registry order.
  pub const ALL: [TaskName; 3] = [TaskName::Styles, TaskName::Copy, TaskName::Clean];

  pub fn as_str(self) -> &'static str {
    match self {
      TaskName::Styles => "styles",
      TaskName::Copy => "copy",
      TaskName::Clean => "clean",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      TaskName::Styles => "Compile the stylesheet entry into a single CSS file",
      TaskName::Copy => "Copy vendor files into the output directory",
      TaskName::Clean => "Remove the declared output directory",
    }
  }

  /// Parse a list of task names, keeping their order.
  pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<TaskName>, Error> {
    names.iter().map(|name| name.as_ref().parse()).collect()
  }
}

impl fmt::Display for TaskName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TaskName {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "styles" | "sass" => Ok(TaskName::Styles),
      "copy" => Ok(TaskName::Copy),
      "clean" => Ok(TaskName::Clean),
      _ => Err(Error::UnknownTask(s.to_string())),
    }
  }
}
