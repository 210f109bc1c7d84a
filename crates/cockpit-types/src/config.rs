//! Status line configuration schema.
//!
//! Every field has a default so a partial TOML file merges over the defaults
//! table by table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Built-in theme names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Aurora,
    Neon,
    Mono,
    Zen,
    Retro,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Aurora,
        ThemeName::Neon,
        ThemeName::Mono,
        ThemeName::Zen,
        ThemeName::Retro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Aurora => "aurora",
            ThemeName::Neon => "neon",
            ThemeName::Mono => "mono",
            ThemeName::Zen => "zen",
            ThemeName::Retro => "retro",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown theme: '{0}'. Use one of aurora, neon, mono, zen, retro.")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Per-category display toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_git: bool,
    pub show_tools: bool,
    pub show_agents: bool,
    pub show_todos: bool,
    pub show_skills: bool,
    pub show_usage: bool,
    pub show_config_counts: bool,
    pub show_cost: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_git: true,
            show_tools: true,
            show_agents: true,
            show_todos: true,
            show_skills: true,
            show_usage: false,
            show_config_counts: true,
            show_cost: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageConfig {
    /// Allow the remote usage fetch when `display.show_usage` is on
    pub enabled: bool,
}

/// Thresholds at which alerts fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub context_warning: f64,
    pub context_critical: f64,
    pub cost_warning: f64,
    pub session_warning_minutes: f64,
    pub usage_warning: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            context_warning: 75.0,
            context_critical: 90.0,
            cost_warning: 1.0,
            session_warning_minutes: 30.0,
            usage_warning: 80.0,
        }
    }
}

/// Display caps for the transcript listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptLimits {
    pub max_tools: usize,
    pub max_agents: usize,
    pub max_skills: usize,
}

impl Default for TranscriptLimits {
    fn default() -> Self {
        Self {
            max_tools: 20,
            max_agents: 10,
            max_skills: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CockpitConfig {
    pub theme: ThemeName,
    pub display: DisplayConfig,
    /// Boxed per-category panels in the full tier
    pub detail_mode: bool,
    /// Extra parent directories shown with the working directory
    pub path_levels: usize,
    pub usage: UsageConfig,
    pub extra_cmd: Option<String>,
    pub alerts: AlertThresholds,
    pub limits: TranscriptLimits,
}

impl Default for CockpitConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            display: DisplayConfig::default(),
            detail_mode: false,
            path_levels: 1,
            usage: UsageConfig::default(),
            extra_cmd: None,
            alerts: AlertThresholds::default(),
            limits: TranscriptLimits::default(),
        }
    }
}

/// Project configuration files found under `<cwd>/.claude`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCounts {
    pub claude_md: usize,
    pub rules: usize,
    pub mcp: usize,
    pub hooks: usize,
}

impl ConfigCounts {
    pub fn is_empty(&self) -> bool {
        self.claude_md == 0 && self.rules == 0 && self.mcp == 0 && self.hooks == 0
    }
}
