//! Bounded subprocess execution.

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::{CockpitError, Result};

/// Default bound for the user's extra command.
pub const EXTRA_CMD_TIMEOUT: Duration = Duration::from_secs(2);

/// Run `cmd` and capture its stdout, killing it once `timeout` elapses.
/// A non-zero exit status is an error.
pub async fn run_capture(mut cmd: Command, timeout: Duration) -> Result<String> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| CockpitError::Timeout(timeout.as_millis() as u64))??;

    if !output.status.success() {
        return Err(CockpitError::CommandFailed(format!(
            "{:?} exited with {}",
            cmd.as_std().get_program(),
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run the extra command through `sh -c` and return its first non-empty
/// output line. Any failure yields `None`.
pub async fn run_extra_command(command: &str, timeout: Duration) -> Option<String> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);

    match run_capture(cmd, timeout).await {
        Ok(stdout) => {
            let label = first_line(&stdout);
            debug!(target: "cockpit::extra", "Extra command produced {:?}", label);
            label
        }
        Err(e) => {
            debug!(target: "cockpit::extra", "Extra command failed: {}", e);
            None
        }
    }
}

fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
