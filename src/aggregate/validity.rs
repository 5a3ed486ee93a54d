//! Classifies a logical project into its validity state.
//!
//! Checks run in a fixed precedence order; the first one returning a
//! verdict wins and a project passing every check is `Valid`.

use super::grouping::LogicalProject;
use crate::types::ProjectStatus;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

const ZERO_IDENTITY_PATTERN: &str = r"^[{(]?0{8}-?0{4}-?0{4}-?0{4}-?0{12}[})]?$";

static ZERO_IDENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ZERO_IDENTITY_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// A single validity check. `None` means "no verdict, continue".
type Check = fn(&LogicalProject, &[PathBuf]) -> Option<ProjectStatus>;

const CHECKS: [Check; 4] = [
    duplicate_identity,
    invalid_identity,
    exclude_flag_set,
    no_files_to_analyze,
];

/// Classifies `project` given its resolved files to analyze.
#[must_use]
pub fn classify(project: &LogicalProject, files_to_analyze: &[PathBuf]) -> ProjectStatus {
    CHECKS
        .iter()
        .find_map(|check| check(project, files_to_analyze))
        .unwrap_or(ProjectStatus::Valid)
}

fn duplicate_identity(project: &LogicalProject, _: &[PathBuf]) -> Option<ProjectStatus> {
    project
        .has_conflicting_sources()
        .then_some(ProjectStatus::DuplicateGuid)
}

fn invalid_identity(project: &LogicalProject, _: &[PathBuf]) -> Option<ProjectStatus> {
    is_invalid_identity(project.identity()).then_some(ProjectStatus::InvalidGuid)
}

fn exclude_flag_set(project: &LogicalProject, _: &[PathBuf]) -> Option<ProjectStatus> {
    project
        .records()
        .any(|r| r.exclude_flag)
        .then_some(ProjectStatus::ExcludeFlagSet)
}

fn no_files_to_analyze(_: &LogicalProject, files: &[PathBuf]) -> Option<ProjectStatus> {
    files.is_empty().then_some(ProjectStatus::NoFilesToAnalyze)
}

/// Absent, blank, or the all-zero GUID.
#[must_use]
pub fn is_invalid_identity(identity: Option<&str>) -> bool {
    match identity.map(str::trim) {
        None => true,
        Some(id) => id.is_empty() || ZERO_IDENTITY_RE.is_match(id),
    }
}

/// One warning per distinct source path of a duplicate-identity group.
#[must_use]
pub fn duplicate_warnings(project: &LogicalProject) -> Vec<String> {
    let identity = project.identity().unwrap_or_default();
    project
        .distinct_source_paths()
        .into_iter()
        .map(|path| {
            format!(
                "Duplicate ProjectGuid: \"{identity}\". The project will not be analyzed. Project file: \"{}\"",
                path.display()
            )
        })
        .collect()
}
