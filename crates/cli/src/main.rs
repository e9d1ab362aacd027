mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{Project, cmd_build, cmd_clean, cmd_config, cmd_plan, cmd_tasks};
use output::OutputFormat;

/// assetline - compile stylesheets and collect vendor assets
#[derive(Parser)]
#[command(name = "assetline")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project root that relative paths resolve against (default: current directory)
  #[arg(long, global = true, value_name = "DIR")]
  root: Option<PathBuf>,

  /// Configuration file (default: assetline.json in the root, else built-in layout)
  #[arg(short, long, global = true, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Output format
  #[arg(long, global = true, value_enum, default_value_t)]
  format: OutputFormat,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run tasks in order (default: styles, then copy when configured)
  Build {
    /// Tasks to run: styles (alias sass), copy, clean
    tasks: Vec<String>,
  },

  /// Remove the declared output directory
  Clean,

  /// Show what a build would write or remove (dry-run)
  Plan {
    /// Tasks to plan: styles (alias sass), copy, clean
    tasks: Vec<String>,
  },

  /// List registered tasks and the default sequence
  Tasks,

  /// Print the effective configuration as JSON
  Config,
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let project = Project::load(cli.root.as_deref(), cli.config.as_deref())?;

  match cli.command.unwrap_or(Commands::Build { tasks: Vec::new() }) {
    Commands::Build { tasks } => cmd_build(&project, &tasks, cli.format),
    Commands::Clean => cmd_clean(&project, cli.format),
    Commands::Plan { tasks } => cmd_plan(&project, &tasks, cli.format),
    Commands::Tasks => cmd_tasks(&project, cli.format),
    Commands::Config => cmd_config(&project),
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      output::print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}
