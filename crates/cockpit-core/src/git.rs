//! Git working tree status via the `git` CLI.

use cockpit_types::GitStatus;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::command::run_capture;
use crate::{CockpitError, Result};

const GIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Branch, dirty flag and upstream divergence for `cwd`. `None` outside a
/// repository or when git is unavailable.
pub async fn git_status(cwd: &Path) -> Option<GitStatus> {
    match read_status(cwd).await {
        Ok(status) => {
            debug!(
                target: "cockpit::git",
                "Git status: branch={}, dirty={}, ahead={}, behind={}",
                status.branch, status.is_dirty, status.ahead, status.behind
            );
            Some(status)
        }
        Err(e) => {
            debug!(target: "cockpit::git", "No git status for {:?}: {}", cwd, e);
            None
        }
    }
}

async fn read_status(cwd: &Path) -> Result<GitStatus> {
    let branch = git(cwd, &["rev-parse", "--abbrev-ref", "HEAD"])
        .await?
        .trim()
        .to_string();
    if branch.is_empty() {
        return Err(CockpitError::GitFailed("empty branch name".to_string()));
    }

    let porcelain = git(cwd, &["status", "--porcelain"]).await?;
    let (ahead, behind) = match upstream_divergence(cwd, &branch).await {
        Ok(counts) => counts,
        Err(e) => {
            debug!(target: "cockpit::git", "No upstream for {}: {}", branch, e);
            (0, 0)
        }
    };

    Ok(GitStatus {
        branch,
        is_dirty: !porcelain.trim().is_empty(),
        ahead,
        behind,
    })
}

async fn upstream_divergence(cwd: &Path, branch: &str) -> Result<(u32, u32)> {
    let upstream = git(
        cwd,
        &["rev-parse", "--abbrev-ref", &format!("{}@{{upstream}}", branch)],
    )
    .await?;
    let counts = git(
        cwd,
        &[
            "rev-list",
            "--left-right",
            "--count",
            &format!("{}...{}", branch, upstream.trim()),
        ],
    )
    .await?;

    parse_divergence(&counts)
        .ok_or_else(|| CockpitError::GitFailed(format!("unexpected rev-list output: {:?}", counts)))
}

async fn git(cwd: &Path, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(cwd);
    run_capture(cmd, GIT_TIMEOUT).await.map_err(|e| match e {
        CockpitError::CommandFailed(msg) => CockpitError::GitFailed(format!("{} ({})", args.join(" "), msg)),
        other => other,
    })
}

/// `"<ahead>\t<behind>"` from `rev-list --left-right --count`.
fn parse_divergence(output: &str) -> Option<(u32, u32)> {
    let mut parts = output.split_whitespace();
    let ahead = parts.next()?.parse().ok()?;
    let behind = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((ahead, behind))
}
