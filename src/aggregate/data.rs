//! The aggregated, classified record produced for each logical project.

use super::merge::AnalyzerOutput;
use crate::types::{InputRecord, ProjectKind, ProjectStatus, Settings};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One merged project, ready for the report and properties writers.
///
/// Built once by the builder; every field is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedProjectData {
    representative: InputRecord,
    analyzer_outputs: Vec<AnalyzerOutput>,
    telemetry_paths: Vec<PathBuf>,
    files_to_analyze: Vec<PathBuf>,
    status: ProjectStatus,
}

impl AggregatedProjectData {
    pub(crate) fn new(
        representative: InputRecord,
        analyzer_outputs: Vec<AnalyzerOutput>,
        telemetry_paths: Vec<PathBuf>,
        files_to_analyze: Vec<PathBuf>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            representative,
            analyzer_outputs,
            telemetry_paths,
            files_to_analyze,
            status,
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.representative.identity.as_deref()
    }

    /// The record supplying encoding, language, path and settings.
    #[must_use]
    pub fn representative(&self) -> &InputRecord {
        &self.representative
    }

    /// Settings of the representative record only. Other builds' settings
    /// are not merged.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.representative.settings
    }

    /// Merged analyzer outputs with the language that declared each one.
    #[must_use]
    pub fn analyzer_outputs(&self) -> &[AnalyzerOutput] {
        &self.analyzer_outputs
    }

    #[must_use]
    pub fn analyzer_output_paths(&self) -> Vec<&Path> {
        self.analyzer_outputs.iter().map(|o| o.path.as_path()).collect()
    }

    /// Analyzer output paths declared under `language`'s settings key.
    #[must_use]
    pub fn analyzer_output_paths_for(&self, language: &str) -> Vec<&Path> {
        self.analyzer_outputs
            .iter()
            .filter(|o| o.language == language)
            .map(|o| o.path.as_path())
            .collect()
    }

    #[must_use]
    pub fn telemetry_paths(&self) -> &[PathBuf] {
        &self.telemetry_paths
    }

    #[must_use]
    pub fn files_to_analyze(&self) -> &[PathBuf] {
        &self.files_to_analyze
    }

    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    #[must_use]
    pub fn kind(&self) -> ProjectKind {
        self.representative.kind
    }

    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.representative.source_path
    }

    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.representative.encoding.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.representative.language.as_deref()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}
