//! Derived warning conditions shown as badges.

use serde::{Deserialize, Serialize};

/// Alert severity, ordered so that `Critical > Warning > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    ContextHigh,
    ContextCritical,
    CostHigh,
    SessionLong,
    UsageHigh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    /// Badge text for narrow layouts
    pub short_message: String,
    pub value: f64,
    pub threshold: f64,
}

/// The single most severe alert. The first one wins among equals.
pub fn most_severe(alerts: &[Alert]) -> Option<&Alert> {
    alerts.iter().fold(None, |best: Option<&Alert>, alert| match best {
        Some(current) if current.severity >= alert.severity => Some(current),
        _ => Some(alert),
    })
}
