//! Timestamped coverage report generation.
//!
//! Runs an lcov capture over a build tree, then renders the resulting
//! tracefile with genhtml. Both artifacts are named after the time the run
//! started.

pub mod config;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod runner;
pub mod tools;

pub use config::ToolConfig;
pub use error::CoverageError;
pub use naming::ReportPaths;
pub use pipeline::{generate_report, CoverageRequest};
pub use runner::{CommandRunner, ProcessRunner};
