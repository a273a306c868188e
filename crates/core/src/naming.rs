//! Artifact naming.
//!
//! Both the tracefile and the HTML report directory share a label derived
//! from the clock reading taken when the run starts, so repeated runs land
//! side by side instead of overwriting each other.

use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Timelike};

/// Extension appended to the label for the captured tracefile.
pub const TRACEFILE_EXTENSION: &str = ".lcov.info";

/// Prefix prepended to the label for the HTML report directory.
pub const HTML_DIR_PREFIX: &str = "coverage-";

/// Format `time` as an ISO-8601 timestamp with sub-second precision dropped,
/// e.g. `2024-03-09T14:05:07`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use covgen_core::naming::timestamp_label;
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_micro_opt(14, 5, 7, 250_000)
///     .unwrap();
/// assert_eq!(timestamp_label(t), "2024-03-09T14:05:07");
/// ```
pub fn timestamp_label(time: NaiveDateTime) -> String {
    let truncated = time.with_nanosecond(0).unwrap_or(time);
    truncated.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Paths of the two artifacts produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Timestamp label shared by both artifacts.
    pub label: String,
    /// Tracefile written by the capturer and read by the report generator.
    pub tracefile: PathBuf,
    /// Directory the report generator renders into.
    pub html_dir: PathBuf,
}

impl ReportPaths {
    /// Build the artifact paths for a run started at `time`.
    ///
    /// With no `output_root` the paths are bare relative names, resolved
    /// against the working directory of the child processes.
    pub fn for_time(time: NaiveDateTime, output_root: Option<&Path>) -> Self {
        let label = timestamp_label(time);
        let tracefile_name = format!("{label}{TRACEFILE_EXTENSION}");
        let html_dir_name = format!("{HTML_DIR_PREFIX}{label}");

        let place = |name: String| match output_root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        };

        Self {
            tracefile: place(tracefile_name),
            html_dir: place(html_dir_name),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn reading(micros: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .expect("valid date")
            .and_hms_micro_opt(14, 5, 7, micros)
            .expect("valid time")
    }

    #[test]
    fn label_drops_fractional_seconds() {
        assert_eq!(timestamp_label(reading(987_654)), "2024-03-09T14:05:07");
    }

    #[test]
    fn label_without_fraction_is_unchanged() {
        assert_eq!(timestamp_label(reading(0)), "2024-03-09T14:05:07");
    }

    #[test]
    fn label_is_zero_padded() {
        let time = NaiveDate::from_ymd_opt(2025, 1, 2)
            .expect("valid date")
            .and_hms_opt(3, 4, 5)
            .expect("valid time");
        assert_eq!(timestamp_label(time), "2025-01-02T03:04:05");
    }

    #[test]
    fn bare_paths_without_output_root() {
        let paths = ReportPaths::for_time(reading(500_000), None);
        assert_eq!(paths.label, "2024-03-09T14:05:07");
        assert_eq!(paths.tracefile, PathBuf::from("2024-03-09T14:05:07.lcov.info"));
        assert_eq!(paths.html_dir, PathBuf::from("coverage-2024-03-09T14:05:07"));
    }

    #[test]
    fn paths_are_placed_under_output_root() {
        let root = Path::new("/tmp/reports");
        let paths = ReportPaths::for_time(reading(1), Some(root));
        assert_eq!(
            paths.tracefile,
            PathBuf::from("/tmp/reports/2024-03-09T14:05:07.lcov.info")
        );
        assert_eq!(
            paths.html_dir,
            PathBuf::from("/tmp/reports/coverage-2024-03-09T14:05:07")
        );
    }
}
