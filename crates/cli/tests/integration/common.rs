//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const THEME_CSS: &str = ".codehilite .k { color: #008000 }\n.codehilite .s { color: #ba2121 }\n";

/// Isolated project tree laid out the way the built-in config expects.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Empty project directory.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Package descriptor, stylesheet sources and all three vendor files.
  pub fn full() -> Self {
    let env = Self::empty();
    env.write_file("package.json", r#"{ "name": "mph", "version": "2.1.0" }"#);
    env.write_file("node_modules/bootstrap/scss/_variables.scss", "$link-color: #007bff !default;\n");
    env.write_file("scss/_site.scss", ".site { margin: 0 auto; }\n");
    env.write_file(
      "scss/mph.scss",
      "@import \"variables\";\n@import \"site\";\n\na {\n  color: $link-color;\n}\n",
    );
    env.write_file("node_modules/bootstrap/dist/js/bootstrap.min.js", "!function(){\"use strict\"}();");
    env.write_file("node_modules/jquery/dist/jquery.min.js", "!function(e,t){}(window);");
    env.write_file("node_modules/pygments-css/default.css", THEME_CSS);
    env
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.root().join(relative)
  }

  /// Write a file relative to the project root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.path(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn read(&self, relative_path: &str) -> Vec<u8> {
    std::fs::read(self.path(relative_path)).unwrap()
  }

  /// Sorted file names directly inside `dir`.
  pub fn list(&self, dir: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(self.path(dir))
      .unwrap()
      .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
      .collect();
    names.sort();
    names
  }

  /// An assetline command rooted at this project.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("assetline");
    cmd.arg("--root").arg(self.root());
    cmd
  }
}
