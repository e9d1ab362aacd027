use assetline_lib::{BuildConfig, Error, Orchestrator, OutputStatus, TaskName};

use super::common::Project;

#[test]
fn clean_removes_output_directory_and_is_idempotent() {
  let project = Project::full();
  project.write("dist/site/index.html", "<html></html>");
  project.write("dist/site/css/style.css", "a{}");
  let orchestrator = Orchestrator::new(BuildConfig::default(), project.root()).unwrap();

  let first = orchestrator.run(&[TaskName::Clean]).unwrap();
  assert_eq!(first.count(OutputStatus::Removed), 1);
  assert!(!project.path("dist").exists());

  let second = orchestrator.run(&[TaskName::Clean]).unwrap();
  assert_eq!(second.count(OutputStatus::Absent), 1);
  assert!(project.path("scss/mph.scss").exists());
}

#[test]
fn default_sequence_never_cleans() {
  let project = Project::full();
  project.write("dist/keep.txt", "kept");

  Orchestrator::new(BuildConfig::default(), project.root())
    .unwrap()
    .run_default()
    .unwrap();

  assert!(project.path("dist/keep.txt").exists());
}

#[test]
fn clean_target_outside_root_is_refused() {
  let project = Project::full();
  let mut config = BuildConfig::default();
  config.clean = "../".into();

  let err = Orchestrator::new(config, project.root())
    .unwrap()
    .run(&[TaskName::Clean])
    .unwrap_err();

  assert!(matches!(err, Error::UnsafeCleanTarget(_)));
  assert!(project.root().exists());
}
