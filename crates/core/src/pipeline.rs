//! Capture-then-render report generation.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::config::ToolConfig;
use crate::error::CoverageError;
use crate::naming::ReportPaths;
use crate::runner::CommandRunner;
use crate::tools::ToolInvocation;

/// What to capture and where to put the results.
#[derive(Debug, Clone)]
pub struct CoverageRequest {
    /// Directory tree scanned for coverage counters, passed through as given.
    pub directory: OsString,
    /// Capturer exclusion patterns.
    pub excludes: Vec<String>,
    /// Parent directory for both artifacts (`None` = working directory).
    pub output_root: Option<PathBuf>,
}

/// Capture coverage data under `request.directory` and render it to HTML.
///
/// Artifacts are named from `now`. The report generator only runs once the
/// capturer has exited successfully; the first failure is returned as-is.
pub async fn generate_report<R: CommandRunner>(
    runner: &R,
    config: &ToolConfig,
    request: &CoverageRequest,
    now: NaiveDateTime,
) -> Result<ReportPaths, CoverageError> {
    let paths = ReportPaths::for_time(now, request.output_root.as_deref());

    let capture = ToolInvocation::capture(
        config,
        &request.directory,
        &request.excludes,
        &paths.tracefile,
    );
    tracing::info!(
        directory = %request.directory.to_string_lossy(),
        tracefile = %paths.tracefile.display(),
        command = %capture,
        "Capturing coverage data",
    );
    runner.run(&capture).await?;

    let render = ToolInvocation::render(config, &paths.tracefile, &paths.html_dir);
    tracing::info!(
        html_dir = %paths.html_dir.display(),
        command = %render,
        "Generating HTML report",
    );
    runner.run(&render).await?;

    Ok(paths)
}
