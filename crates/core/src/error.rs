/// Errors raised while driving the external coverage tools.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed ({})", describe_exit(.exit_code))]
    ToolFailed {
        program: String,
        exit_code: Option<i32>,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl CoverageError {
    /// Process exit status to report for this error.
    ///
    /// A failing tool's own exit code is passed through, clamped into
    /// `1..=255`. Spawn failures and signal terminations map to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ToolFailed {
                exit_code: Some(code),
                ..
            } => (*code).clamp(1, 255) as u8,
            _ => 1,
        }
    }
}
