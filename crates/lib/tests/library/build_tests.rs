use assetline_lib::{BuildConfig, Error, Orchestrator, OutputStatus, TaskName};

use super::common::{Project, THEME_CSS};

#[test]
fn styles_only_config_produces_one_minified_file() {
  let project = Project::styles_only();
  let orchestrator = Orchestrator::new(BuildConfig::default().without_copy(), project.root()).unwrap();

  let report = orchestrator.run_default().unwrap();

  assert_eq!(report.task_names(), vec![TaskName::Styles]);
  assert_eq!(project.files_under("assets"), vec!["style.css"]);

  let css = String::from_utf8(project.read("assets/style.css")).unwrap();
  assert!(css.contains("color:#212529"));
  assert!(css.contains("text-decoration:none"));
  assert!(!css.contains("Site stylesheet"));
  assert!(!css.trim_end().contains('\n'));
}

#[test]
fn full_config_produces_four_files() {
  let project = Project::full();
  let orchestrator = Orchestrator::new(BuildConfig::default(), project.root()).unwrap();

  let report = orchestrator.run_default().unwrap();

  assert_eq!(report.task_names(), vec![TaskName::Styles, TaskName::Copy]);
  assert_eq!(report.count(OutputStatus::Written), 4);
  assert_eq!(
    project.files_under("assets"),
    vec!["bootstrap.min.js", "jquery.min.js", "pygments.css", "style.css"]
  );
  assert_eq!(
    project.read("assets/jquery.min.js"),
    project.read("node_modules/jquery/dist/jquery.min.js")
  );
}

#[test]
fn theme_copy_only_differs_by_replaced_token() {
  let project = Project::full();
  Orchestrator::new(BuildConfig::default(), project.root())
    .unwrap()
    .run_default()
    .unwrap();

  let output = String::from_utf8(project.read("assets/pygments.css")).unwrap();
  assert!(!output.contains("codehilite"));
  assert_eq!(output.matches("highlight").count(), THEME_CSS.matches("codehilite").count());
  assert_eq!(output.replace("highlight", "codehilite"), THEME_CSS);
}

#[test]
fn rebuild_is_byte_identical() {
  let project = Project::full();
  let orchestrator = Orchestrator::new(BuildConfig::default(), project.root()).unwrap();

  orchestrator.run_default().unwrap();
  let first: Vec<_> = project
    .files_under("assets")
    .iter()
    .map(|f| project.read(&format!("assets/{f}")))
    .collect();

  let report = orchestrator.run_default().unwrap();
  let second: Vec<_> = project
    .files_under("assets")
    .iter()
    .map(|f| project.read(&format!("assets/{f}")))
    .collect();

  assert_eq!(first, second);
  assert_eq!(report.count(OutputStatus::Unchanged), 4);
  assert_eq!(report.count(OutputStatus::Written), 0);
}

#[test]
fn missing_entry_aborts_before_copy() {
  let project = Project::full();
  std::fs::remove_file(project.path("scss/mph.scss")).unwrap();
  project.write("assets/jquery.min.js", "previous build");

  let err = Orchestrator::new(BuildConfig::default(), project.root())
    .unwrap()
    .run_default()
    .unwrap_err();

  assert!(matches!(err, Error::SourceMissing(_)));
  assert_eq!(project.files_under("assets"), vec!["jquery.min.js"]);
  assert_eq!(project.read("assets/jquery.min.js"), b"previous build");
}

#[test]
fn syntax_error_aborts_before_copy() {
  let project = Project::full();
  project.write("scss/mph.scss", "body { color: ;\n");

  let err = Orchestrator::new(BuildConfig::default(), project.root())
    .unwrap()
    .run_default()
    .unwrap_err();

  assert!(matches!(err, Error::Style { .. }));
  assert!(!project.path("assets").exists());
}

#[test]
fn missing_vendor_file_fails_copy() {
  let project = Project::styles_only();

  let err = Orchestrator::new(BuildConfig::default(), project.root())
    .unwrap()
    .run_default()
    .unwrap_err();

  assert!(matches!(err, Error::SourceMissing(ref path) if path.ends_with("bootstrap.min.js")));
  // styles finished before copy started
  assert_eq!(project.files_under("assets"), vec!["style.css"]);
}
