//! One status line invocation: snapshot in, rendered lines out.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use cockpit_core::{
    EXTRA_CMD_TIMEOUT, RenderContext, SESSION_KEY_ENV, Theme, check_alerts, count_configs,
    fetch_usage, git_status, load_transcript, render, run_extra_command,
};
use cockpit_types::SessionSnapshot;
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::{config, terminal};

/// Read the whole snapshot from stdin. An interactive stdin has no snapshot.
pub async fn read_stdin() -> Result<String> {
    if std::io::stdin().is_terminal() {
        debug!(target: "cockpit::main", "stdin is a terminal, no snapshot");
        return Ok(String::new());
    }

    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("Failed to read stdin")?;
    Ok(raw)
}

/// Build the status line for one snapshot.
///
/// `extra_cmd` comes from the command line and wins over the config file.
/// `env` stands in for the process environment. A blank snapshot renders
/// nothing.
pub async fn run(
    stdin: &str,
    extra_cmd: Option<String>,
    env: impl Fn(&str) -> Option<String>,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    if stdin.trim().is_empty() {
        debug!(target: "cockpit::main", "Empty stdin, nothing to render");
        return Ok(Vec::new());
    }

    let snapshot: SessionSnapshot =
        serde_json::from_str(stdin).context("Invalid session snapshot")?;

    let mut config = config::load(&env);
    if extra_cmd.is_some() {
        config.extra_cmd = extra_cmd;
    }

    let support = terminal::detect_glyph_support(&env);
    let width = terminal::detect_width(&env);
    let theme = Theme::load(config.theme, support);

    let transcript = load_transcript(snapshot.transcript_path.as_deref(), config.limits, now);
    let cwd = snapshot.cwd().map(PathBuf::from);
    let config_counts = count_configs(cwd.as_deref());

    let wants_usage = config.display.show_usage && config.usage.enabled;
    let session_key = env(SESSION_KEY_ENV);

    let (git, usage, extra_label) = tokio::join!(
        async {
            match cwd.as_deref() {
                Some(dir) if config.display.show_git => git_status(dir).await,
                _ => None,
            }
        },
        async {
            if wants_usage {
                fetch_usage(session_key.as_deref()).await
            } else {
                None
            }
        },
        async {
            match config.extra_cmd.as_deref() {
                Some(cmd) => run_extra_command(cmd, EXTRA_CMD_TIMEOUT).await,
                None => None,
            }
        },
    );

    let alerts = check_alerts(&snapshot, usage.as_ref(), &config.alerts);
    debug!(
        target: "cockpit::main",
        "Rendering {} at width {} ({} alerts)",
        config.theme,
        width,
        alerts.len()
    );

    let mut ctx = RenderContext::new(snapshot, theme, width, now);
    ctx.transcript = transcript;
    ctx.config = config;
    ctx.config_counts = config_counts;
    ctx.git = git;
    ctx.usage = usage;
    ctx.extra_label = extra_label;
    ctx.alerts = alerts;

    Ok(render(&ctx))
}
