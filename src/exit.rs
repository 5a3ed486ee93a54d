// src/exit.rs
//! Standardized process exit codes for `scanmerge`.
//!
//! Provides a stable contract for build scripts.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScanMergeExit {
    /// Aggregation completed and at least one project is analyzable.
    Success = 0,
    /// Generic error (e.g. IO, malformed record, config).
    Error = 1,
    /// Aggregation completed but every project was rejected or skipped.
    NoValidProjects = 2,
}

impl ScanMergeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ScanMergeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
