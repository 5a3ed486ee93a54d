//! Drives grouping, path merging and classification for a record set.

use super::data::AggregatedProjectData;
use super::grouping::{group_by_identity, LogicalProject};
use super::merge::{files_to_analyze, merge_paths};
use super::sink::WarningSink;
use super::validity::{classify, duplicate_warnings};
use crate::config::Config;
use crate::types::{InputRecord, ProjectStatus};

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// One entry per distinct identity, in first-seen order.
    pub projects: Vec<AggregatedProjectData>,
    /// Duplicate-identity warnings, one per distinct source path.
    pub duplicate_warnings: Vec<String>,
}

impl Aggregation {
    /// Projects that take part in analysis.
    pub fn valid_projects(&self) -> impl Iterator<Item = &AggregatedProjectData> {
        self.projects.iter().filter(|p| p.is_valid())
    }
}

pub struct ProjectDataBuilder<'a> {
    config: &'a Config,
}

impl<'a> ProjectDataBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Aggregates `records` and hands every duplicate warning to `sink` as
    /// one batch after all projects are built.
    pub fn build<I>(&self, records: I, sink: &mut dyn WarningSink) -> Vec<AggregatedProjectData>
    where
        I: IntoIterator<Item = InputRecord>,
    {
        let Aggregation {
            projects,
            duplicate_warnings,
        } = self.aggregate(records);
        for warning in duplicate_warnings {
            sink.warn(warning);
        }
        projects
    }

    /// Aggregates `records` without emitting anything.
    #[must_use]
    pub fn aggregate<I>(&self, records: I) -> Aggregation
    where
        I: IntoIterator<Item = InputRecord>,
    {
        let mut result = Aggregation::default();
        for group in group_by_identity(records) {
            let project = self.build_project(group, &mut result.duplicate_warnings);
            result.projects.push(project);
        }
        result
    }

    /// Builds one project. Duplicate warnings are added only for groups
    /// classified `DuplicateGuid`.
    fn build_project(&self, group: LogicalProject, warnings: &mut Vec<String>) -> AggregatedProjectData {
        let merged = merge_paths(&group, self.config);
        let files = files_to_analyze(&group);
        let status = self.status_of(&group, &files);
        if status == ProjectStatus::DuplicateGuid {
            warnings.extend(duplicate_warnings(&group));
        }

        AggregatedProjectData::new(
            group.into_representative(),
            merged.analyzer_outputs,
            merged.telemetry_paths,
            files,
            status,
        )
    }

    fn status_of(&self, group: &LogicalProject, files: &[std::path::PathBuf]) -> ProjectStatus {
        let unsupported = group
            .representative()
            .language
            .as_deref()
            .is_some_and(|lang| !self.config.supports_language(lang));
        if unsupported {
            return ProjectStatus::UnsupportedLanguage;
        }
        classify(group, files)
    }
}
