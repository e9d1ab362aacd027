//! Shared fixtures for library integration tests.
//!
//! Lays out a project tree matching the built-in configuration: a package
//! descriptor, an SCSS entry that imports from the Bootstrap load path, and
//! the three vendor files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const THEME_CSS: &str = "\
.codehilite .hll { background-color: #ffffcc }
.codehilite  { background: #f8f8f8; }
.codehilite .c { color: #408080; font-style: italic } /* Comment */
";

pub const ENTRY_SCSS: &str = "\
// Site stylesheet
@import \"variables\";

body {
  color: $body-color;

  a {
    text-decoration: none;
  }
}
";

pub struct Project {
  pub temp: TempDir,
}

impl Project {
  /// Stylesheet sources and package descriptor, no vendor files.
  pub fn styles_only() -> Self {
    let project = Self {
      temp: TempDir::new().unwrap(),
    };
    project.write("package.json", r#"{ "name": "mph", "version": "1.0.0" }"#);
    project.write("node_modules/bootstrap/scss/_variables.scss", "$body-color: #212529 !default;\n");
    project.write("scss/mph.scss", ENTRY_SCSS);
    project
  }

  /// Everything the built-in configuration reads.
  pub fn full() -> Self {
    let project = Self::styles_only();
    project.write("node_modules/bootstrap/dist/js/bootstrap.min.js", "/*! Bootstrap */!function(){}();");
    project.write("node_modules/jquery/dist/jquery.min.js", "/*! jQuery */!function(){}();");
    project.write("node_modules/pygments-css/default.css", THEME_CSS);
    project
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.root().join(relative)
  }

  pub fn write(&self, relative: &str, content: &str) {
    let path = self.path(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
  }

  pub fn read(&self, relative: &str) -> Vec<u8> {
    fs::read(self.path(relative)).unwrap()
  }

  /// Relative paths of every file under `dir`, sorted.
  pub fn files_under(&self, dir: &str) -> Vec<String> {
    let base = self.path(dir);
    let mut files: Vec<String> = walkdir::WalkDir::new(&base)
      .into_iter()
      .filter_map(|e| e.ok())
      .filter(|e| e.file_type().is_file())
      .map(|e| e.path().strip_prefix(&base).unwrap().to_string_lossy().replace('\\', "/"))
      .collect();
    files.sort();
    files
  }
}
