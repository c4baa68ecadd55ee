//! Command execution shared by the SCM providers
//!
//! Providers query their command-line clients in the module's working copy.
//! Every invocation is wrapped in a bounded timeout; an exceeded timeout is
//! fatal to the whole run, like any other changelog failure.

use crate::error::ScmError;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Captured result of an SCM client invocation
#[derive(Debug)]
pub(crate) struct ScmCommandOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

/// Runs an SCM client in the working copy and captures its output
pub(crate) async fn run_scm_command(
    program: &str,
    args: &[&str],
    working_copy: &Path,
    timeout: Duration,
) -> Result<ScmCommandOutput, ScmError> {
    // Force the C locale so client diagnostics stay in English; empty-history
    // detection matches on message text
    let future = Command::new(program)
        .args(args)
        .current_dir(working_copy)
        .env("LC_ALL", "C")
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(timeout, future)
        .await
        .map_err(|_| ScmError::timeout(working_copy))?
        .map_err(|e| {
            ScmError::changelog(working_copy, format!("failed to run {}: {}", program, e))
        })?;

    Ok(ScmCommandOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
