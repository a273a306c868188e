//! Command lines for the two external coverage tools.
//!
//! The argument lists are built here as plain data so the pipeline can be
//! exercised without spawning anything.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use crate::config::ToolConfig;

/// Exclusion patterns applied to the capturer when none are supplied.
pub const DEFAULT_EXCLUDES: [&str; 2] = ["/usr/*", "*/tests/*"];

/// A fully resolved external command.
///
/// Arguments are kept as OS strings so paths reach the child byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

/// `--flag=value` without a lossy UTF-8 round trip.
fn flag_value(flag: &str, value: impl AsRef<OsStr>) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push("=");
    arg.push(value);
    arg
}

impl ToolInvocation {
    /// `lcov --capture` over `directory`, writing `tracefile`.
    ///
    /// `directory` is forwarded verbatim.
    pub fn capture(
        config: &ToolConfig,
        directory: &OsStr,
        excludes: &[String],
        tracefile: &Path,
    ) -> Self {
        let mut args = vec![OsString::from("--capture")];
        args.extend(excludes.iter().map(|pattern| flag_value("--exclude", pattern)));
        args.push(flag_value("--gcov-tool", &config.gcov));
        args.push(flag_value("--directory", directory));
        args.push(flag_value("--output-file", tracefile));

        Self {
            program: config.lcov.clone(),
            args,
        }
    }

    /// `genhtml` rendering `tracefile` into `html_dir`.
    pub fn render(config: &ToolConfig, tracefile: &Path, html_dir: &Path) -> Self {
        Self {
            program: config.genhtml.clone(),
            args: vec![
                tracefile.as_os_str().to_owned(),
                flag_value("--output-directory", html_dir),
            ],
        }
    }
}

/// Lossy rendering of the command line, for logs only.
impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
