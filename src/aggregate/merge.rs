//! Merges the output paths declared by every build of one logical project.

use super::grouping::LogicalProject;
use crate::config::Config;
use crate::paths;
use crate::types::InputRecord;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Platforms treated as the default build platform.
const DEFAULT_PLATFORMS: [&str; 3] = ["", "anycpu", "any cpu"];

/// A resolved analyzer output path and the configured language whose
/// settings key declared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerOutput {
    pub language: String,
    pub path: PathBuf,
}

/// Analyzer output and telemetry paths merged across a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedPaths {
    pub analyzer_outputs: Vec<AnalyzerOutput>,
    pub telemetry_paths: Vec<PathBuf>,
}

/// Merges both path lists for a group.
#[must_use]
pub fn merge_paths(project: &LogicalProject, config: &Config) -> MergedPaths {
    MergedPaths {
        analyzer_outputs: analyzer_outputs(project, config),
        telemetry_paths: telemetry_paths(project, &config.telemetry_key),
    }
}

/// Whether `record` was built in the primary configuration on a default
/// platform.
#[must_use]
pub fn is_primary_variant(record: &InputRecord, primary_configuration: &str) -> bool {
    let platform = record.platform.trim().to_ascii_lowercase();
    record
        .configuration
        .trim()
        .eq_ignore_ascii_case(primary_configuration.trim())
        && DEFAULT_PLATFORMS.contains(&platform.as_str())
}

/// Records ordered so that primary variants come last.
///
/// This is a business rule, not a general ordering: the primary build's
/// analyzer output is merged after every other variant. Relative input
/// order is kept inside both partitions.
fn analyzer_merge_order<'a>(
    project: &'a LogicalProject,
    primary_configuration: &str,
) -> Vec<&'a InputRecord> {
    let mut ordered: Vec<&InputRecord> = project.records().collect();
    ordered.sort_by_key(|r| is_primary_variant(r, primary_configuration));
    ordered
}

/// Resolved analyzer output paths, primary variant last, without repeats.
#[must_use]
pub fn analyzer_outputs(project: &LogicalProject, config: &Config) -> Vec<AnalyzerOutput> {
    let languages = config.languages_for(project.representative().language.as_deref());
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out = Vec::new();

    for record in analyzer_merge_order(project, &config.primary_configuration) {
        for (name, lang) in &languages {
            let Some(declared) = record.settings.get(&lang.analyzer_output_key) else {
                continue;
            };
            let resolved = paths::resolve(record.base_dir(), Path::new(declared));
            if seen.insert(resolved.clone()) {
                out.push(AnalyzerOutput {
                    language: (*name).to_string(),
                    path: resolved,
                });
            }
        }
    }

    out
}

/// Resolved telemetry paths in input order. Repeats are kept.
#[must_use]
pub fn telemetry_paths(project: &LogicalProject, telemetry_key: &str) -> Vec<PathBuf> {
    project
        .records()
        .flat_map(|record| {
            record
                .settings
                .values(telemetry_key)
                .map(move |declared| paths::resolve(record.base_dir(), Path::new(declared)))
        })
        .collect()
}

/// Union of every record's files to analyze, first occurrence wins.
#[must_use]
pub fn files_to_analyze(project: &LogicalProject) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out = Vec::new();

    for record in project.records() {
        for file in record.files_to_analyze() {
            let resolved = paths::resolve(record.base_dir(), file);
            if seen.insert(resolved.clone()) {
                out.push(resolved);
            }
        }
    }

    out
}
