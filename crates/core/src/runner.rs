//! Process execution.
//!
//! [`CommandRunner`] is the seam between the pipeline and the operating
//! system. [`ProcessRunner`] spawns the tool with inherited stdio and waits
//! for it; there is no timeout, matching how the tools are run by hand.

use std::time::Instant;

use tokio::process::Command;

use crate::error::CoverageError;
use crate::tools::ToolInvocation;

/// Runs one external command to completion.
pub trait CommandRunner: Send + Sync {
    /// Run `invocation`, returning `Ok(())` only on a zero exit status.
    fn run(
        &self,
        invocation: &ToolInvocation,
    ) -> impl std::future::Future<Output = Result<(), CoverageError>> + Send;
}

/// Runner backed by real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), CoverageError> {
        let start = Instant::now();

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .await
            .map_err(|source| CoverageError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let elapsed_ms = start.elapsed().as_millis() as u64;

        if status.success() {
            tracing::debug!(program = %invocation.program, elapsed_ms, "Tool finished");
            Ok(())
        } else {
            tracing::error!(
                program = %invocation.program,
                exit_code = ?status.code(),
                elapsed_ms,
                "Tool failed",
            );
            Err(CoverageError::ToolFailed {
                program: invocation.program.clone(),
                exit_code: status.code(),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sh(script: &str) -> ToolInvocation {
        ToolInvocation {
            program: "sh".into(),
            args: vec!["-c".into(), script.into()],
        }
    }

    #[tokio::test]
    async fn zero_exit_is_ok() {
        ProcessRunner.run(&sh("exit 0")).await.expect("run");
    }

    #[tokio::test]
    async fn nonzero_exit_reports_code() {
        let err = ProcessRunner.run(&sh("exit 3")).await.unwrap_err();
        assert_matches!(
            err,
            CoverageError::ToolFailed { ref program, exit_code: Some(3) } if program == "sh"
        );
    }

    #[tokio::test]
    async fn signal_termination_has_no_code() {
        let err = ProcessRunner.run(&sh("kill -9 $$")).await.unwrap_err();
        assert_matches!(err, CoverageError::ToolFailed { exit_code: None, .. });
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let inv = ToolInvocation {
            program: "covgen-no-such-tool-4f1c".into(),
            args: vec![],
        };
        let err = ProcessRunner.run(&inv).await.unwrap_err();
        assert_matches!(err, CoverageError::Spawn { ref program, .. } if program == "covgen-no-such-tool-4f1c");
    }
}
