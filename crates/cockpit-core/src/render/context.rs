use chrono::{DateTime, Utc};
use cockpit_types::{
    Alert, CockpitConfig, ConfigCounts, GitStatus, SessionSnapshot, TranscriptState, UsageData,
};

use super::theme::Theme;

/// Everything a render needs, gathered by the driver beforehand.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub snapshot: SessionSnapshot,
    pub transcript: TranscriptState,
    pub config: CockpitConfig,
    pub config_counts: ConfigCounts,
    pub git: Option<GitStatus>,
    pub usage: Option<UsageData>,
    /// First line of the extra command's output
    pub extra_label: Option<String>,
    pub theme: Theme,
    pub alerts: Vec<Alert>,
    /// Terminal width in columns
    pub width: usize,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    /// A context with empty collaborator data.
    pub fn new(snapshot: SessionSnapshot, theme: Theme, width: usize, now: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            transcript: TranscriptState::default(),
            config: CockpitConfig::default(),
            config_counts: ConfigCounts::default(),
            git: None,
            usage: None,
            extra_label: None,
            theme,
            alerts: Vec::new(),
            width,
            now,
        }
    }

    /// Usage data, only when the usage display is on.
    pub fn visible_usage(&self) -> Option<&UsageData> {
        self.usage.as_ref().filter(|_| self.config.display.show_usage)
    }

    pub fn visible_git(&self) -> Option<&GitStatus> {
        self.git.as_ref().filter(|_| self.config.display.show_git)
    }
}
