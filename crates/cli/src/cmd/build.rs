//! Implementation of the `assetline build` command.
//!
//! Runs the named tasks (or the default sequence) in order and prints a
//! summary of every output written.

use anyhow::{Context, Result};
use assetline_lib::OutputStatus;
use tracing::info;

use super::Project;
use crate::output::{OutputFormat, print_info, print_json, print_report, print_success};

pub fn cmd_build(project: &Project, names: &[String], format: OutputFormat) -> Result<()> {
  let tasks = project.tasks(names)?;
  let orchestrator = project.orchestrator()?;

  info!(root = %orchestrator.root().display(), config = %project.source, "starting build");

  let report = orchestrator.run(&tasks).context("Build failed")?;

  if format.is_json() {
    return print_json(&report);
  }

  print_info(&format!("Config: {}", project.source));
  print_report(&report);
  print_success(&format!(
    "Build complete: {} written, {} unchanged",
    report.count(OutputStatus::Written),
    report.count(OutputStatus::Unchanged)
  ));

  Ok(())
}
