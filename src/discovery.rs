// src/discovery.rs
//! Locates and parses per-project record files under a build output folder.
//!
//! Each immediate sub-directory may hold one `ProjectInfo.json`. Nothing
//! deeper is inspected.

use crate::error::{Result, ScanMergeError};
use crate::paths;
use crate::types::{AnalysisResult, InputRecord, ResultKind};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const RECORD_FILE: &str = "ProjectInfo.json";

/// Finds and parses every record file, in sorted directory order.
///
/// # Errors
/// Returns error if `root` cannot be walked or a record file is malformed.
pub fn locate_records(root: &Path) -> Result<Vec<InputRecord>> {
    let files = find_record_files(root)?;
    tracing::debug!(count = files.len(), root = %root.display(), "located record files");
    files.iter().map(|f| load_record(f)).collect()
}

/// Record files one level below `root`.
///
/// # Errors
/// Returns error if `root` is missing or unreadable.
pub fn find_record_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanMergeError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            root,
        ));
    }

    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .follow_links(false)
        .sort_by_file_name();

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == RECORD_FILE {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Parses one record file and expands its file lists.
///
/// # Errors
/// Returns error if the file is unreadable or not a valid record.
pub fn load_record(path: &Path) -> Result<InputRecord> {
    let content = fs::read_to_string(path).map_err(|e| ScanMergeError::io(e, path))?;
    let mut record: InputRecord =
        serde_json::from_str(&content).map_err(|source| ScanMergeError::Json {
            source,
            path: path.to_path_buf(),
        })?;
    expand_file_lists(&mut record);
    Ok(record)
}

/// Replaces each `FilesToAnalyze` entry, which names a list file, with one
/// entry per listed file. An unreadable list contributes nothing.
pub fn expand_file_lists(record: &mut InputRecord) {
    let base = record.base_dir().to_path_buf();
    let results = std::mem::take(&mut record.analysis_results);

    for result in results {
        if result.kind != ResultKind::FilesToAnalyze {
            record.analysis_results.push(result);
            continue;
        }
        let list = paths::resolve(&base, &result.location);
        match fs::read_to_string(&list) {
            Ok(content) => record.analysis_results.extend(
                parse_file_list(&content).map(AnalysisResult::files_to_analyze),
            ),
            Err(e) => {
                tracing::warn!(path = %list.display(), error = %e, "cannot read file list");
            }
        }
    }
}

fn parse_file_list(content: &str) -> impl Iterator<Item = PathBuf> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
}
