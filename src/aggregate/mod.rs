// src/aggregate/mod.rs
//! Turns per-build project records into one classified entry per project.
//!
//! Pipeline: group by identity, merge analyzer and telemetry paths, then
//! classify. Pure computation; warnings go to a caller-supplied sink.

pub mod builder;
pub mod data;
pub mod grouping;
pub mod merge;
pub mod sink;
pub mod validity;

pub use self::builder::{Aggregation, ProjectDataBuilder};
pub use self::data::AggregatedProjectData;
pub use self::grouping::{group_by_identity, LogicalProject};
pub use self::merge::{AnalyzerOutput, MergedPaths};
pub use self::sink::{TracingSink, WarningSink};
pub use self::validity::classify;
