//! `covgen` -- capture gcov coverage with lcov and render it with genhtml.
//!
//! Produces `<timestamp>.lcov.info` and `coverage-<timestamp>/` for the
//! given build directory. Exits with the failing tool's status if either
//! tool fails.
//!
//! # Environment variables
//!
//! | Variable  | Required | Default   | Description                         |
//! |-----------|----------|-----------|-------------------------------------|
//! | `GCOV`    | no       | `gcov`    | gcov tool passed to `--gcov-tool`   |
//! | `LCOV`    | no       | `lcov`    | Coverage-data capturer program      |
//! | `GENHTML` | no       | `genhtml` | HTML report generator program       |
//!
//! Values are used as given; an empty value counts as unset.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use covgen_core::tools::DEFAULT_EXCLUDES;
use covgen_core::{
    generate_report, CoverageError, CoverageRequest, ProcessRunner, ReportPaths, ToolConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "covgen")]
#[command(about = "Generate a timestamped lcov/genhtml coverage report")]
struct Cli {
    /// Directory tree to scan for coverage data
    #[arg(value_parser = clap::value_parser!(OsString))]
    directory: OsString,

    /// Capture exclusion pattern (repeatable; replaces the defaults)
    #[arg(long = "exclude", value_name = "PATTERN", default_values = DEFAULT_EXCLUDES)]
    excludes: Vec<String>,

    /// Directory to create the tracefile and HTML report in
    #[arg(long, value_name = "DIR")]
    output_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "covgen=info,covgen_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ToolConfig::from_env();
    let request = CoverageRequest {
        directory: cli.directory,
        excludes: cli.excludes,
        output_root: cli.output_root,
    };
    let now = chrono::Local::now().naive_local();

    tracing::debug!(?config, ?request, "Starting coverage run");

    let result = generate_report(&ProcessRunner, &config, &request, now).await;
    ExitCode::from(exit_status(&result))
}

/// Log the outcome of a run and pick the process exit status for it.
fn exit_status(result: &Result<ReportPaths, CoverageError>) -> u8 {
    match result {
        Ok(paths) => {
            tracing::info!(
                tracefile = %paths.tracefile.display(),
                html_dir = %paths.html_dir.display(),
                "Coverage report generated",
            );
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "Coverage run failed");
            e.exit_code()
        }
    }
}
