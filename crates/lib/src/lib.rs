//! assetline-lib: static asset builds for a small site.
//!
//! A build is a fixed sequence of tasks over one immutable configuration:
//! - `styles`: compile a Sass/SCSS entry into one CSS file (compressed by default)
//! - `copy`: copy vendor files into the assets directory, optionally through a text transform
//! - `clean`: remove the declared output directory (only when asked for)
//!
//! ```rust,ignore
//! use assetline_lib::{BuildConfig, Orchestrator};
//!
//! let orchestrator = Orchestrator::new(BuildConfig::default(), ".")?;
//! let report = orchestrator.run_default()?;
//! ```

pub mod clean;
pub mod config;
pub mod copy;
pub mod error;
pub mod execute;
pub mod package;
pub mod plan;
pub mod report;
pub mod style;
pub mod task;
pub mod util;

pub use config::{BuildConfig, ConfigSource, CopyEntry, CopyTask, OutputStyle, StyleTask, Transform};
pub use error::{Error, Result};
pub use execute::Orchestrator;
pub use plan::{Plan, PlannedAction, PlannedStep, compute_plan};
pub use report::{BuildReport, OutputRecord, OutputStatus, TaskReport};
pub use task::TaskName;
