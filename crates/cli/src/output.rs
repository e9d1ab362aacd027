//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, human-readable byte/duration formatting, and Unicode symbols.

use std::time::Duration;

use anyhow::Context;
use assetline_lib::{BuildReport, OutputRecord, OutputStatus, Plan};
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ADD: &str = "+";
  pub const SAME: &str = "=";
  pub const REMOVE: &str = "-";
}

pub fn format_bytes(bytes: u64) -> String {
  const KB: u64 = 1024;
  const MB: u64 = KB * 1024;
  const GB: u64 = MB * 1024;

  if bytes >= GB {
    format!("{:.1} GB", bytes as f64 / GB as f64)
  } else if bytes >= MB {
    format!("{:.1} MB", bytes as f64 / MB as f64)
  } else if bytes >= KB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else {
    format!("{} B", bytes)
  }
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

fn describe_output(output: &OutputRecord) -> String {
  match output.status {
    OutputStatus::Written | OutputStatus::Unchanged => {
      let hash = output.sha256.as_ref().map(|h| h.short()).unwrap_or("-");
      let state = if output.status == OutputStatus::Written {
        "written"
      } else {
        "unchanged"
      };
      format!("{}, {}, {}", state, format_bytes(output.bytes), hash)
    }
    OutputStatus::Removed => format!("removed, {}", format_bytes(output.bytes)),
    OutputStatus::Absent => "already absent".to_string(),
  }
}

fn print_output(output: &OutputRecord) {
  let symbol = match output.status {
    OutputStatus::Written => format!("{}", symbols::ADD.if_supports_color(Stream::Stdout, |s| s.green())),
    OutputStatus::Unchanged | OutputStatus::Absent => {
      format!("{}", symbols::SAME.if_supports_color(Stream::Stdout, |s| s.dimmed()))
    }
    OutputStatus::Removed => format!("{}", symbols::REMOVE.if_supports_color(Stream::Stdout, |s| s.red())),
  };
  let detail = format!("({})", describe_output(output));
  println!(
    "  {} {} {}",
    symbol,
    output.path.display(),
    detail.if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}

pub fn print_report(report: &BuildReport) {
  if let Some(package) = &report.package {
    let name = package.name.as_deref().unwrap_or("(unnamed)");
    match &package.version {
      Some(version) => print_info(&format!("Package: {} {}", name, version)),
      None => print_info(&format!("Package: {}", name)),
    }
  }

  for task in &report.tasks {
    let elapsed = format!("({})", format_duration(Duration::from_millis(task.elapsed_ms)));
    println!(
      "{} {}",
      task.task.as_str().if_supports_color(Stream::Stdout, |s| s.bold()),
      elapsed.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
    for output in &task.outputs {
      print_output(output);
    }
  }
}

pub fn print_plan(plan: &Plan) {
  for step in &plan.steps {
    let symbol = match step.task {
      assetline_lib::TaskName::Clean => {
        format!("{}", symbols::REMOVE.if_supports_color(Stream::Stdout, |s| s.red()))
      }
      _ => format!("{}", symbols::ADD.if_supports_color(Stream::Stdout, |s| s.green())),
    };
    let detail = format!("({})", step.description());
    println!(
      "  {} {} {}",
      symbol,
      step.target().display(),
      detail.if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
  }
}
