//! Build configuration.
//!
//! A [`BuildConfig`] is constructed once per invocation, either from the
//! built-in layout or from a JSON file, validated, and never mutated after
//! that. The orchestrator only ever borrows it.
//!
//! ```json
//! {
//!   "package": "package.json",
//!   "clean": "dist",
//!   "styles": {
//!     "style": "compressed",
//!     "load_paths": ["node_modules/bootstrap/scss/", "scss/"],
//!     "source": "scss/mph.scss",
//!     "dest": "assets/style.css"
//!   },
//!   "copy": {
//!     "files": [
//!       { "source": "node_modules/jquery/dist/jquery.min.js", "dest": "assets/jquery.min.js" },
//!       {
//!         "source": "node_modules/pygments-css/default.css",
//!         "dest": "assets/pygments.css",
//!         "transform": { "kind": "replace", "from": "codehilite", "to": "highlight" }
//!       }
//!     ]
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::task::TaskName;

/// File name looked up in the project root when no config is given explicitly.
pub const CONFIG_FILE_NAME: &str = "assetline.json";

/// Output style for compiled CSS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
  /// Minified: no comments and no non-semantic whitespace.
  #[default]
  Compressed,
  /// One declaration per line.
  Expanded,
}

/// The `styles` task: one stylesheet entry compiled to one CSS file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleTask {
  #[serde(default)]
  pub style: OutputStyle,
  /// Directories searched, in order, when resolving imports.
  #[serde(default)]
  pub load_paths: Vec<PathBuf>,
  pub source: PathBuf,
  pub dest: PathBuf,
}

/// A pure text transform applied to a copied file before it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Transform {
  /// Replace every literal occurrence of `from` with `to`.
  Replace { from: String, to: String },
}

impl Transform {
  pub fn apply(&self, input: &str) -> String {
    match self {
      Transform::Replace { from, to } => input.replace(from.as_str(), to),
    }
  }

  pub fn describe(&self) -> String {
    match self {
      Transform::Replace { from, to } => format!("replace '{from}' with '{to}'"),
    }
  }
}

/// One source → destination copy instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyEntry {
  pub source: PathBuf,
  pub dest: PathBuf,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub transform: Option<Transform>,
}

impl CopyEntry {
  pub fn verbatim(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
    Self {
      source: source.into(),
      dest: dest.into(),
      transform: None,
    }
  }

  pub fn transformed(source: impl Into<PathBuf>, dest: impl Into<PathBuf>, transform: Transform) -> Self {
    Self {
      source: source.into(),
      dest: dest.into(),
      transform: Some(transform),
    }
  }
}

/// The `copy` task: an ordered list of copy instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyTask {
  pub files: Vec<CopyEntry>,
}

/// The complete, immutable build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
  /// Package descriptor loaded as opaque metadata.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub package: Option<PathBuf>,
  /// Output directory removed by the `clean` task.
  pub clean: PathBuf,
  pub styles: StyleTask,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub copy: Option<CopyTask>,
  /// Explicit default sequence. Derived from the configured tasks when absent.
  #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
  pub default_tasks: Option<Vec<TaskName>>,
}

impl Default for BuildConfig {
  /// The project layout this tool was written for: Bootstrap sources on the
  /// load path, and jQuery, Bootstrap's bundle and the Pygments theme copied
  /// next to the compiled stylesheet.
  fn default() -> Self {
    Self {
      package: Some(PathBuf::from("package.json")),
      clean: PathBuf::from("dist"),
      styles: StyleTask {
        style: OutputStyle::Compressed,
        load_paths: vec![
          PathBuf::from("node_modules/bootstrap/scss/"),
          PathBuf::from("scss/"),
        ],
        source: PathBuf::from("scss/mph.scss"),
        dest: PathBuf::from("assets/style.css"),
      },
      copy: Some(CopyTask {
        files: vec![
          CopyEntry::verbatim(
            "node_modules/bootstrap/dist/js/bootstrap.min.js",
            "assets/bootstrap.min.js",
          ),
          CopyEntry::verbatim("node_modules/jquery/dist/jquery.min.js", "assets/jquery.min.js"),
          CopyEntry::transformed(
            "node_modules/pygments-css/default.css",
            "assets/pygments.css",
            Transform::Replace {
              from: "codehilite".to_string(),
              to: "highlight".to_string(),
            },
          ),
        ],
      }),
      default_tasks: None,
    }
  }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  Builtin,
  File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ConfigSource::Builtin => f.write_str("built-in defaults"),
      ConfigSource::File(path) => write!(f, "{}", path.display()),
    }
  }
}

impl BuildConfig {
  /// Parse a configuration from JSON text. Call [`BuildConfig::validate`] before use.
  pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
    serde_json::from_str(text)
  }

  /// Load and validate a configuration file.
  pub fn from_file(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
      path: path.to_path_buf(),
      source,
    })?;
    let config = Self::from_json(&text).map_err(|source| Error::ConfigParse {
      path: path.to_path_buf(),
      source,
    })?;
    config.validate()?;
    Ok(config)
  }

  /// Resolve the configuration for a project root.
  ///
  /// An explicit path wins; otherwise `assetline.json` in the root is used
  /// when present; otherwise the built-in layout.
  pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
    let candidate = match explicit {
      Some(path) => Some(path.to_path_buf()),
      None => {
        let default_path = root.join(CONFIG_FILE_NAME);
        default_path.is_file().then_some(default_path)
      }
    };

    match candidate {
      Some(path) => {
        debug!(path = %path.display(), "loading config file");
        let config = Self::from_file(&path)?;
        Ok((config, ConfigSource::File(path)))
      }
      None => {
        debug!("using built-in config");
        Ok((Self::default(), ConfigSource::Builtin))
      }
    }
  }

  /// Reject configurations that parse but cannot run.
  pub fn validate(&self) -> Result<()> {
    if self.styles.source.as_os_str().is_empty() {
      return Err(Error::ConfigInvalid("styles.source is empty".to_string()));
    }
    if self.styles.dest.as_os_str().is_empty() {
      return Err(Error::ConfigInvalid("styles.dest is empty".to_string()));
    }

    if let Some(copy) = &self.copy {
      for (index, entry) in copy.files.iter().enumerate() {
        if entry.source.as_os_str().is_empty() || entry.dest.as_os_str().is_empty() {
          return Err(Error::ConfigInvalid(format!(
            "copy.files[{index}] needs both source and dest"
          )));
        }
        if let Some(Transform::Replace { from, .. }) = &entry.transform {
          if from.is_empty() {
            return Err(Error::ConfigInvalid(format!(
              "copy.files[{index}].transform.from must not be empty"
            )));
          }
        }
      }
    }

    if let Some(tasks) = &self.default_tasks {
      for task in tasks {
        if !self.is_configured(*task) {
          return Err(Error::TaskNotConfigured(task.to_string()));
        }
      }
    }

    Ok(())
  }

  /// Whether the configuration declares what `task` needs to run.
  pub fn is_configured(&self, task: TaskName) -> bool {
    match task {
      TaskName::Styles | TaskName::Clean => true,
      TaskName::Copy => self.copy.is_some(),
    }
  }

  /// The sequence run when no task is named: `styles`, then `copy` when
  /// configured. `clean` is never part of it unless listed explicitly.
  pub fn default_sequence(&self) -> Vec<TaskName> {
    match &self.default_tasks {
      Some(tasks) => tasks.clone(),
      None => {
        let mut tasks = vec![TaskName::Styles];
        if self.copy.is_some() {
          tasks.push(TaskName::Copy);
        }
        tasks
      }
    }
  }

  /// Copy of this configuration with the copy step removed.
  pub fn without_copy(&self) -> Self {
    let mut config = self.clone();
    config.copy = None;
    if let Some(tasks) = &mut config.default_tasks {
      tasks.retain(|task| *task != TaskName::Copy);
    }
    config
  }
}
