//! Implementation of the `assetline config` command.
//!
//! Prints the effective configuration as JSON, suitable as a starting point
//! for an `assetline.json` file.

use anyhow::Result;

use super::Project;
use crate::output::print_json;

pub fn cmd_config(project: &Project) -> Result<()> {
  print_json(&project.config)
}
