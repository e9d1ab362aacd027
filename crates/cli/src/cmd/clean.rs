//! Implementation of the `assetline clean` command.

use anyhow::{Context, Result};
use assetline_lib::{OutputStatus, TaskName};

use super::Project;
use crate::output::{OutputFormat, format_bytes, print_json, print_success};

pub fn cmd_clean(project: &Project, format: OutputFormat) -> Result<()> {
  let orchestrator = project.orchestrator()?;
  let report = orchestrator.run(&[TaskName::Clean]).context("Clean failed")?;

  if format.is_json() {
    return print_json(&report);
  }

  for output in report.outputs() {
    match output.status {
      OutputStatus::Removed => print_success(&format!(
        "Removed {} ({})",
        output.path.display(),
        format_bytes(output.bytes)
      )),
      _ => print_success(&format!("Nothing to clean: {} does not exist", output.path.display())),
    }
  }

  Ok(())
}
