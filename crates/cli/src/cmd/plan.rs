//! Implementation of the `assetline plan` command.
//!
//! Shows what a build would write or remove without touching any file.

use anyhow::{Context, Result};
use assetline_lib::{PlannedAction, compute_plan};

use super::Project;
use crate::output::{OutputFormat, print_info, print_json, print_plan, print_warning};

pub fn cmd_plan(project: &Project, names: &[String], format: OutputFormat) -> Result<()> {
  let tasks = project.tasks(names)?;
  let orchestrator = project.orchestrator()?;

  let plan = compute_plan(orchestrator.config(), &tasks, orchestrator.root()).context("Failed to compute plan")?;

  if format.is_json() {
    return print_json(&plan);
  }

  let task_list: Vec<&str> = tasks.iter().map(|t| t.as_str()).collect();
  print_info(&format!("Config: {}", project.source));
  print_info(&format!("Tasks: {}", task_list.join(" → ")));
  print_plan(&plan);

  for step in plan.missing_inputs() {
    if let PlannedAction::Compile { source, .. } | PlannedAction::Copy { source, .. } = &step.action {
      print_warning(&format!("Missing input: {}", source.display()));
    }
  }

  Ok(())
}
