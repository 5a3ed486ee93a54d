// src/types/mod.rs
//! Data model shared by the locator, the aggregation core and the writers.

pub mod settings;

pub use self::settings::{Setting, Settings};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether a project builds product code or tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectKind {
    #[default]
    Product,
    Test,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => f.write_str("Product"),
            Self::Test => f.write_str("Test"),
        }
    }
}

/// Kind of artifact an analysis result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultKind {
    FilesToAnalyze,
    CodeCoverage,
    TestResults,
    #[serde(other)]
    Other,
}

/// One `(kind, location)` entry produced by a build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub kind: ResultKind,
    pub location: PathBuf,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(kind: ResultKind, location: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            location: location.into(),
        }
    }

    #[must_use]
    pub fn files_to_analyze(location: impl Into<PathBuf>) -> Self {
        Self::new(ResultKind::FilesToAnalyze, location)
    }
}

/// Metadata emitted by one build invocation of a project.
///
/// Several records may share one `identity` when the same project is built
/// once per target framework, configuration or platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    #[serde(default)]
    pub identity: Option<String>,
    pub source_path: PathBuf,
    #[serde(default)]
    pub configuration: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub target_framework: String,
    #[serde(default)]
    pub kind: ProjectKind,
    #[serde(default, rename = "exclude")]
    pub exclude_flag: bool,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub analysis_results: Vec<AnalysisResult>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl InputRecord {
    /// Creates a product record with the given identity and source path.
    #[must_use]
    pub fn new(identity: Option<&str>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            identity: identity.map(str::to_string),
            source_path: source_path.into(),
            ..Self::default()
        }
    }

    /// Directory that relative paths declared by this record resolve against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.source_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Locations of every `FilesToAnalyze` result, in declaration order.
    pub fn files_to_analyze(&self) -> impl Iterator<Item = &Path> {
        self.analysis_results
            .iter()
            .filter(|r| r.kind == ResultKind::FilesToAnalyze)
            .map(|r| r.location.as_path())
    }
}

/// Validity state of an aggregated project. Only `Valid` is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectStatus {
    Valid,
    ExcludeFlagSet,
    DuplicateGuid,
    InvalidGuid,
    NoFilesToAnalyze,
    UnsupportedLanguage,
}

impl ProjectStatus {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Valid => "Valid",
            Self::ExcludeFlagSet => "ExcludeFlagSet",
            Self::DuplicateGuid => "DuplicateGuid",
            Self::InvalidGuid => "InvalidGuid",
            Self::NoFilesToAnalyze => "NoFilesToAnalyze",
            Self::UnsupportedLanguage => "UnsupportedLanguage",
        };
        f.write_str(s)
    }
}
