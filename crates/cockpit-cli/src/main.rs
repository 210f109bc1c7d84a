//! cockpit - status line for Claude Code sessions.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cockpit_cli::{app, logging, output};

use logging::LogConfig;

/// Render the session snapshot on stdin as a status line.
#[derive(Parser, Debug)]
#[command(name = "cockpit")]
#[command(about = "Status line for Claude Code sessions")]
#[command(version)]
struct Cli {
    /// Shell command whose first output line is shown as an extra label
    #[arg(long = "extra-cmd", value_name = "CMD")]
    extra_cmd: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogConfig::from_env());
    tracing::debug!(target: "cockpit::main", "Starting");

    let env = |key: &str| std::env::var(key).ok();
    let lines = match app::read_stdin().await {
        Ok(stdin) => app::run(&stdin, cli.extra_cmd, env, Utc::now()).await,
        Err(e) => Err(e),
    };

    // A failed render prints nothing rather than a partial line
    match lines {
        Ok(lines) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = output::write_lines(&mut stdout, &lines) {
                tracing::error!(target: "cockpit::main", "Failed to write output: {}", e);
            }
        }
        Err(e) => tracing::error!(target: "cockpit::main", "{:#}", e),
    }

    Ok(())
}
