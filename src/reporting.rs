// src/reporting.rs
//! Summary report of an aggregation run.

use crate::aggregate::AggregatedProjectData;
use crate::error::{Result, ScanMergeError};
use crate::types::{ProjectKind, ProjectStatus};
use colored::Colorize;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Project counts by status and kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryReport {
    pub valid_product: usize,
    pub valid_test: usize,
    pub excluded: usize,
    pub duplicate: usize,
    pub invalid_identity: usize,
    pub no_files: usize,
    pub unsupported_language: usize,
}

impl SummaryReport {
    #[must_use]
    pub fn from_projects(projects: &[AggregatedProjectData]) -> Self {
        let mut report = Self::default();
        for project in projects {
            match (project.status(), project.kind()) {
                (ProjectStatus::Valid, ProjectKind::Product) => report.valid_product += 1,
                (ProjectStatus::Valid, ProjectKind::Test) => report.valid_test += 1,
                (ProjectStatus::ExcludeFlagSet, _) => report.excluded += 1,
                (ProjectStatus::DuplicateGuid, _) => report.duplicate += 1,
                (ProjectStatus::InvalidGuid, _) => report.invalid_identity += 1,
                (ProjectStatus::NoFilesToAnalyze, _) => report.no_files += 1,
                (ProjectStatus::UnsupportedLanguage, _) => report.unsupported_language += 1,
            }
        }
        report
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.valid_product
            + self.valid_test
            + self.excluded
            + self.duplicate
            + self.invalid_identity
            + self.no_files
            + self.unsupported_language
    }

    #[must_use]
    pub fn has_valid_projects(&self) -> bool {
        self.valid_product + self.valid_test > 0
    }

    /// Plain-text rendering written to the summary file.
    #[must_use]
    pub fn render(&self) -> String {
        let rows = [
            ("Product projects", self.valid_product),
            ("Test projects", self.valid_test),
            ("Excluded projects", self.excluded),
            ("Duplicate identity projects", self.duplicate),
            ("Invalid identity projects", self.invalid_identity),
            ("Projects with no files to analyze", self.no_files),
            ("Unsupported language projects", self.unsupported_language),
            ("Total projects", self.total()),
        ];
        let mut out = String::from("# Analysis summary\n\n");
        for (label, count) in rows {
            let _ = writeln!(out, "- {label}: {count}");
        }
        out
    }

    /// Writes `render()` to `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| ScanMergeError::io(e, path))?;
        tracing::info!(path = %path.display(), "wrote summary report");
        Ok(())
    }

    /// Short colored line for the terminal.
    #[must_use]
    pub fn console_line(&self) -> String {
        let skipped_count = self.total() - self.valid_product - self.valid_test;
        let valid = format!("{} valid", self.valid_product + self.valid_test);
        let skipped = format!("{skipped_count} skipped");
        format!(
            "{} {} ({} product, {} test), {}",
            "scanmerge:".bold(),
            if self.has_valid_projects() { valid.green() } else { valid.red() },
            self.valid_product,
            self.valid_test,
            if skipped_count == 0 { skipped.normal() } else { skipped.yellow() },
        )
    }
}
