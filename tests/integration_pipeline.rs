// tests/integration_pipeline.rs
use scanmerge_core::aggregate::ProjectDataBuilder;
use scanmerge_core::config::Config;
use scanmerge_core::discovery::{self, RECORD_FILE};
use scanmerge_core::properties;
use scanmerge_core::reporting::SummaryReport;
use scanmerge_core::types::{AnalysisResult, InputRecord, ProjectStatus, ResultKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GUID: &str = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";

fn write_record(root: &Path, folder: &str, json: &str) {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(RECORD_FILE), json).unwrap();
}

fn record_json(project_dir: &Path, configuration: &str, out: &str, list: &Path) -> String {
    let source = project_dir.join("App.csproj");
    serde_json::json!({
        "identity": GUID,
        "sourcePath": source,
        "configuration": configuration,
        "platform": "AnyCPU",
        "targetFramework": "net8.0",
        "kind": "Product",
        "language": "cs",
        "encoding": "utf-8",
        "settings": [
            {"key": "sonar.cs.analyzer.projectOutPath", "value": out},
            {"key": "sonar.scanner.telemetry", "value": format!("{configuration}.telemetry.json")}
        ],
        "analysisResults": [
            {"kind": "FilesToAnalyze", "location": list},
            {"kind": "CodeCoverage", "location": "coverage.xml"}
        ]
    })
    .to_string()
}

#[test]
fn test_locates_only_first_level_records() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("src");
    write_record(temp.path(), "0", &record_json(&project, "Debug", "d", &project.join("none.txt")));
    write_record(temp.path(), "1/nested", &record_json(&project, "Debug", "d", &project.join("none.txt")));
    fs::write(temp.path().join(RECORD_FILE), "{}").unwrap();

    let files = discovery::find_record_files(temp.path()).unwrap();
    assert_eq!(files, vec![temp.path().join("0").join(RECORD_FILE)]);
}

#[test]
fn test_file_lists_are_expanded() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("src");
    fs::create_dir_all(&project).unwrap();
    let list = project.join("files.txt");
    fs::write(&list, format!("{}\n\n{}\n", project.join("A.cs").display(), project.join("B.cs").display())).unwrap();
    write_record(temp.path(), "0", &record_json(&project, "Debug", "d", &list));

    let records = discovery::locate_records(temp.path()).unwrap();
    assert_eq!(records.len(), 1);
    let kinds: Vec<ResultKind> = records[0].analysis_results.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![ResultKind::FilesToAnalyze, ResultKind::FilesToAnalyze, ResultKind::CodeCoverage]
    );
}

#[test]
fn test_missing_file_list_contributes_nothing() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("src");
    write_record(temp.path(), "0", &record_json(&project, "Debug", "d", &project.join("gone.txt")));

    let records = discovery::locate_records(temp.path()).unwrap();
    let projects = ProjectDataBuilder::new(&Config::default()).build(records, &mut Vec::<String>::new());
    assert_eq!(projects[0].status(), ProjectStatus::NoFilesToAnalyze);
}

#[test]
fn test_malformed_record_is_an_error() {
    let temp = TempDir::new().unwrap();
    write_record(temp.path(), "0", "{ not json");
    assert!(discovery::locate_records(temp.path()).is_err());
}

#[test]
fn test_missing_root_is_an_error() {
    let temp = TempDir::new().unwrap();
    assert!(discovery::locate_records(&temp.path().join("absent")).is_err());
}

#[test]
fn test_end_to_end_properties_and_summary() {
    let temp = TempDir::new().unwrap();
    let out_root = temp.path().join("out");
    let project = temp.path().join("src");
    fs::create_dir_all(&project).unwrap();
    let list = project.join("files.txt");
    fs::write(&list, "Program.cs\n").unwrap();

    write_record(&out_root, "0", &record_json(&project, "Release", "release-out", &list));
    write_record(&out_root, "1", &record_json(&project, "Debug", "debug-out", &list));

    let config = Config::default();
    let records = discovery::locate_records(&out_root).unwrap();
    let projects = ProjectDataBuilder::new(&config).build(records, &mut Vec::<String>::new());
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].status(), ProjectStatus::Valid);
    assert_eq!(
        projects[0].analyzer_output_paths(),
        &[project.join("debug-out"), project.join("release-out")]
    );
    assert_eq!(projects[0].files_to_analyze(), &[project.join("Program.cs")]);

    let text = properties::render(&projects, &config);
    assert!(text.contains(&format!("{GUID}.sonar.projectName=App")));
    assert!(text.contains(&format!("{GUID}.sonar.sourceEncoding=utf-8")));
    assert!(text.contains(&format!("{GUID}.sonar.cs.analyzer.projectOutPaths=\\")));
    assert!(text.contains("Release.telemetry.json"));
    assert!(text.trim_end().ends_with(&format!("sonar.modules={GUID}")));

    let summary = SummaryReport::from_projects(&projects);
    assert_eq!(summary.valid_product, 1);
    assert_eq!(summary.total(), 1);

    let summary_path = temp.path().join("summary.md");
    summary.write_to(&summary_path).unwrap();
    let written = fs::read_to_string(&summary_path).unwrap();
    assert!(written.contains("- Product projects: 1"));
    assert!(written.contains("- Total projects: 1"));
}

fn valid_record(identity: &str, language: Option<&str>, settings: &[(&str, &str)]) -> InputRecord {
    let mut r = InputRecord::new(Some(identity), "/src/P/P.csproj");
    r.language = language.map(str::to_string);
    r.analysis_results.push(AnalysisResult::files_to_analyze("Program.cs"));
    for (key, value) in settings {
        r.settings.push(*key, *value);
    }
    r
}

#[test]
fn test_languageless_analyzer_paths_are_written() {
    let config = Config::default();
    let r = valid_record(GUID, None, &[("sonar.cs.analyzer.projectOutPath", "out")]);
    let projects = ProjectDataBuilder::new(&config).build(vec![r], &mut Vec::<String>::new());
    let text = properties::render(&projects, &config);

    assert!(text.contains(&format!("{GUID}.sonar.cs.analyzer.projectOutPaths=\\\n/src/P/out\n")));
    assert!(!text.contains("sonar.vbnet.analyzer.projectOutPaths"));
}

#[test]
fn test_language_tag_case_does_not_drop_outputs() {
    let config = Config::default();
    let r = valid_record(
        GUID,
        Some("CS"),
        &[
            ("sonar.cs.analyzer.projectOutPath", "out"),
            ("sonar.cs.roslyn.reportFilePath", "report.json"),
        ],
    );
    let projects = ProjectDataBuilder::new(&config).build(vec![r], &mut Vec::<String>::new());
    let text = properties::render(&projects, &config);

    assert!(text.contains(&format!("{GUID}.sonar.cs.analyzer.projectOutPaths=")));
    assert!(text.contains(&format!("{GUID}.sonar.cs.roslyn.reportFilePaths=/src/P/report.json")));
}

#[test]
fn test_identity_separators_are_escaped_in_keys() {
    let config = Config::default();
    let r = valid_record("a=b:c", Some("cs"), &[]);
    let projects = ProjectDataBuilder::new(&config).build(vec![r], &mut Vec::<String>::new());
    let text = properties::render(&projects, &config);

    assert!(text.contains("a\\=b\\:c.sonar.projectKey=a\\=b\\:c\n"));
    assert!(text.trim_end().ends_with("sonar.modules=a\\=b\\:c"));
}

#[test]
fn test_invalid_projects_are_not_modules() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("src");
    let mut value: serde_json::Value =
        serde_json::from_str(&record_json(&project, "Debug", "d", &project.join("none.txt"))).unwrap();
    value["exclude"] = serde_json::Value::Bool(true);
    write_record(temp.path(), "0", &value.to_string());

    let config = Config::default();
    let records = discovery::locate_records(temp.path()).unwrap();
    let projects = ProjectDataBuilder::new(&config).build(records, &mut Vec::<String>::new());
    let summary = SummaryReport::from_projects(&projects);

    assert_eq!(summary.excluded, 1);
    assert!(!summary.has_valid_projects());
    assert_eq!(properties::render(&projects, &config).trim_end(), "sonar.modules=");
}
