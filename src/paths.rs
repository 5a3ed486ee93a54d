// src/paths.rs
//! Lexical path resolution. Never touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base_dir` and normalizes the result.
///
/// Absolute inputs are only normalized. `..` pops the previous component
/// and is dropped at the root.
#[must_use]
pub fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base_dir.join(path))
    }
}

/// Removes `.` components and folds `..` into its parent.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
