use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn clean_removes_dist_then_is_noop() {
  let env = TestEnv::full();
  env.write_file("dist/index.html", "<html></html>");
  env.write_file("dist/css/style.css", "a{}");

  env
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed dist"));
  assert!(!env.path("dist").exists());

  env
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to clean"));
}

#[test]
fn build_does_not_clean() {
  let env = TestEnv::full();
  env.write_file("dist/keep.txt", "keep");

  env.cmd().assert().success();

  assert!(env.path("dist/keep.txt").exists());
}

#[test]
fn clean_refuses_project_root() {
  let env = TestEnv::full();
  env.write_file(
    "assetline.json",
    r#"{ "clean": ".", "styles": { "source": "scss/mph.scss", "dest": "assets/style.css" } }"#,
  );

  env
    .cmd()
    .arg("clean")
    .assert()
    .failure()
    .stderr(predicate::str::contains("refusing to clean"));

  assert!(env.path("scss/mph.scss").exists());
}

#[test]
fn clean_absolute_target_under_relative_root() {
  let env = TestEnv::full();
  env.write_file("dist/index.html", "<html></html>");
  let config = serde_json::json!({
    "clean": env.path("dist"),
    "styles": { "source": "scss/mph.scss", "dest": "assets/style.css" },
  });
  env.write_file("assetline.json", &config.to_string());

  let parent = env.root().parent().unwrap();
  let name = env.root().file_name().unwrap();
  cargo_bin_cmd!("assetline")
    .current_dir(parent)
    .arg("--root")
    .arg(name)
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed"));

  assert!(!env.path("dist").exists());
  assert!(env.path("scss/mph.scss").exists());
}
