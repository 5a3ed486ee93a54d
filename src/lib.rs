pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod logging;
pub mod paths;
pub mod properties;
pub mod reporting;
pub mod types;
