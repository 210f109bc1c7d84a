//! Logging configuration and initialization.
//!
//! Logs go to stderr since stdout carries the status line. Nothing is logged
//! unless asked for:
//! - `RUST_LOG` takes precedence when set
//! - `DEBUG=*` or `DEBUG=cockpit:*` enables debug output for every area
//! - `DEBUG=cockpit:git,cockpit:usage` enables individual areas
//! - `COCKPIT_LOG_FORMAT=json` switches to JSON lines

use std::collections::BTreeSet;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub const DEBUG_ENV: &str = "DEBUG";
pub const LOG_FORMAT_ENV: &str = "COCKPIT_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: '{}'. Use 'text' or 'json'.", s)),
        }
    }
}

/// Logging presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogPreset {
    /// Nothing at all
    #[default]
    Silent,
    /// Debug level for every cockpit area
    Debug,
}

/// Logging configuration built from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub preset: LogPreset,
    /// Targets enabled at debug level on top of the preset
    /// (e.g. "cockpit::git")
    pub targets: BTreeSet<String>,
    pub format: LogFormat,
}

impl LogConfig {
    /// Build from the `DEBUG` and `COCKPIT_LOG_FORMAT` values.
    pub fn from_env_values(debug: Option<&str>, format: Option<&str>) -> Self {
        let mut preset = LogPreset::Silent;
        let mut targets = BTreeSet::new();

        for part in debug.unwrap_or("").split(',') {
            let part = part.trim();
            match part {
                "" => {}
                "*" | "cockpit:*" | "cockpit" => preset = LogPreset::Debug,
                _ => {
                    // "cockpit:git" -> "cockpit::git"; other namespaces are not ours
                    if let Some(area) = part.strip_prefix("cockpit:").filter(|a| !a.is_empty()) {
                        targets.insert(format!("cockpit::{}", area.replace(':', "::")));
                    }
                }
            }
        }

        let format: LogFormat = format
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Self {
            preset,
            targets,
            format,
        }
    }

    /// Read the process environment.
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_ENV).ok();
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::from_env_values(debug.as_deref(), format.as_deref())
    }

    /// Filter directives for this configuration, ignoring `RUST_LOG`.
    pub fn directives(&self) -> String {
        let mut directives: Vec<String> = match self.preset {
            LogPreset::Silent => vec!["off".into()],
            LogPreset::Debug => vec!["off".into(), "cockpit=debug".into()],
        };

        for target in &self.targets {
            directives.push(format!("{}=debug", target));
        }

        directives.join(",")
    }

    /// Build an EnvFilter from this configuration.
    pub fn build_filter(&self) -> EnvFilter {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }

        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("off"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
pub fn init(config: &LogConfig) {
    let filter = config.build_filter();

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("invalid".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_silent_by_default() {
        let config = LogConfig::from_env_values(None, None);
        assert_eq!(config.preset, LogPreset::Silent);
        assert!(config.targets.is_empty());
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.directives(), "off");
    }

    #[test]
    fn test_debug_everything() {
        for value in ["*", "cockpit:*"] {
            let config = LogConfig::from_env_values(Some(value), None);
            assert_eq!(config.preset, LogPreset::Debug);
            assert_eq!(config.directives(), "off,cockpit=debug");
        }
    }

    #[test]
    fn test_debug_individual_areas() {
        let config = LogConfig::from_env_values(Some("cockpit:git, cockpit:usage,express:*"), None);
        assert_eq!(config.preset, LogPreset::Silent);
        assert_eq!(
            config.targets.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["cockpit::git", "cockpit::usage"]
        );
        assert_eq!(config.directives(), "off,cockpit::git=debug,cockpit::usage=debug");
    }

    #[test]
    fn test_foreign_namespaces_ignored() {
        let config = LogConfig::from_env_values(Some("express:router,cockpit:"), None);
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_format_from_env() {
        let config = LogConfig::from_env_values(None, Some("json"));
        assert_eq!(config.format, LogFormat::Json);

        let config = LogConfig::from_env_values(None, Some("yaml"));
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn test_directives_parse_as_filter() {
        let config = LogConfig::from_env_values(Some("*,cockpit:transcript"), None);
        assert!(EnvFilter::try_new(config.directives()).is_ok());
    }
}
