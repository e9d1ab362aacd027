//! Implementation of the `assetline tasks` command.

use anyhow::Result;
use assetline_lib::TaskName;
use serde::Serialize;

use super::Project;
use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct TaskEntry {
  name: &'static str,
  description: &'static str,
  configured: bool,
  default: bool,
}

pub fn cmd_tasks(project: &Project, format: OutputFormat) -> Result<()> {
  let defaults = project.config.default_sequence();
  let entries: Vec<TaskEntry> = TaskName::ALL
    .iter()
    .map(|task| TaskEntry {
      name: task.as_str(),
      description: task.description(),
      configured: project.config.is_configured(*task),
      default: defaults.contains(task),
    })
    .collect();

  if format.is_json() {
    return print_json(&entries);
  }

  println!("Tasks:");
  for entry in &entries {
    let mut flags = Vec::new();
    if entry.default {
      flags.push("default");
    }
    if !entry.configured {
      flags.push("not configured");
    }
    let value = if flags.is_empty() {
      entry.description.to_string()
    } else {
      format!("{} [{}]", entry.description, flags.join(", "))
    };
    print_stat(entry.name, &value);
  }

  let sequence: Vec<&str> = defaults.iter().map(|t| t.as_str()).collect();
  println!("Default: {}", sequence.join(", "));

  Ok(())
}
