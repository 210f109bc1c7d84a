//! Loading `config.toml` and applying environment overrides.

use anyhow::{Context, Result};
use cockpit_types::{CockpitConfig, ThemeName};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Explicit config file location.
pub const CONFIG_ENV: &str = "COCKPIT_CONFIG";
pub const THEME_ENV: &str = "COCKPIT_THEME";
pub const DETAIL_ENV: &str = "COCKPIT_DETAIL";
pub const PATH_LEVELS_ENV: &str = "COCKPIT_PATH_LEVELS";
pub const SHOW_USAGE_ENV: &str = "COCKPIT_SHOW_USAGE";

/// `~/.claude/plugins/claude-code-cockpit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".claude")
            .join("plugins")
            .join("claude-code-cockpit")
            .join("config.toml")
    })
}

/// `COCKPIT_CONFIG` when set, otherwise the default location.
pub fn config_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    env(CONFIG_ENV)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// Parse a config file. Tables missing from the file keep their defaults.
pub fn load_from(path: &Path) -> Result<CockpitConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: CockpitConfig =
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Load the effective configuration: file over defaults, then environment.
/// A missing or broken file leaves the defaults in place.
pub fn load(env: impl Fn(&str) -> Option<String>) -> CockpitConfig {
    let mut config = match config_path(&env) {
        Some(path) if path.is_file() => match load_from(&path) {
            Ok(config) => {
                debug!(target: "cockpit::config", "Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                debug!(target: "cockpit::config", "{:#}", e);
                CockpitConfig::default()
            }
        },
        _ => CockpitConfig::default(),
    };

    apply_env_overrides(&mut config, &env);
    debug!(target: "cockpit::config", "Final config: {:?}", config);
    config
}

/// Environment values win over the file. Unparseable values are ignored.
pub fn apply_env_overrides(config: &mut CockpitConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(value) = env(THEME_ENV) {
        match value.parse::<ThemeName>() {
            Ok(theme) => {
                config.theme = theme;
                debug!(target: "cockpit::config", "env override: theme = {}", theme);
            }
            Err(e) => debug!(target: "cockpit::config", "{}", e),
        }
    }

    if let Some(detail) = env(DETAIL_ENV).as_deref().and_then(parse_flag) {
        config.detail_mode = detail;
        debug!(target: "cockpit::config", "env override: detail_mode = {}", detail);
    }

    if let Some(levels) = env(PATH_LEVELS_ENV).and_then(|v| v.trim().parse::<usize>().ok()) {
        config.path_levels = levels;
        debug!(target: "cockpit::config", "env override: path_levels = {}", levels);
    }

    if let Some(show) = env(SHOW_USAGE_ENV).as_deref().and_then(parse_flag) {
        config.display.show_usage = show;
        debug!(target: "cockpit::config", "env override: show_usage = {}", show);
    }
}

/// `1`/`true`/`yes`/`on` and their negatives, case-insensitive.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
