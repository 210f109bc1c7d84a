//! Alert evaluation over the session snapshot and usage data.

use cockpit_types::{
    Alert, AlertKind, AlertSeverity, AlertThresholds, SessionSnapshot, UsageData,
};
use tracing::debug;

/// Five hour usage at or above this is critical regardless of thresholds.
const USAGE_CRITICAL_PERCENT: f64 = 95.0;

/// Evaluate all alert rules. At most one alert per rule.
pub fn check_alerts(
    snapshot: &SessionSnapshot,
    usage: Option<&UsageData>,
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let alerts: Vec<Alert> = [
        context_alert(snapshot, thresholds),
        cost_alert(snapshot, thresholds),
        session_alert(snapshot, thresholds),
        usage.and_then(|u| usage_alert(u, thresholds)),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(target: "cockpit::alerts", "Checked alerts: {} active", alerts.len());
    alerts
}

fn context_alert(snapshot: &SessionSnapshot, thresholds: &AlertThresholds) -> Option<Alert> {
    let percent = snapshot.context_percent()?;
    let shown = percent.round();

    if percent >= thresholds.context_critical {
        return Some(Alert {
            kind: AlertKind::ContextCritical,
            severity: AlertSeverity::Critical,
            message: format!("Context usage critical: {}%", shown),
            short_message: format!("CTX {}%!", shown),
            value: percent,
            threshold: thresholds.context_critical,
        });
    }

    if percent >= thresholds.context_warning {
        return Some(Alert {
            kind: AlertKind::ContextHigh,
            severity: AlertSeverity::Warning,
            message: format!("Context usage high: {}%", shown),
            short_message: format!("CTX {}%", shown),
            value: percent,
            threshold: thresholds.context_warning,
        });
    }

    None
}

fn cost_alert(snapshot: &SessionSnapshot, thresholds: &AlertThresholds) -> Option<Alert> {
    let cost = snapshot.total_cost_usd()?;
    if cost < thresholds.cost_warning {
        return None;
    }

    Some(Alert {
        kind: AlertKind::CostHigh,
        severity: AlertSeverity::Warning,
        message: format!("Session cost: ${:.2}", cost),
        short_message: format!("${:.2}", cost),
        value: cost,
        threshold: thresholds.cost_warning,
    })
}

fn session_alert(snapshot: &SessionSnapshot, thresholds: &AlertThresholds) -> Option<Alert> {
    let duration_ms = snapshot.cost.as_ref()?.total_duration_ms?;
    let minutes = duration_ms as f64 / 60_000.0;
    if minutes < thresholds.session_warning_minutes {
        return None;
    }

    Some(Alert {
        kind: AlertKind::SessionLong,
        severity: AlertSeverity::Info,
        message: format!("Long session: {}m", minutes.round()),
        short_message: format!("{}m", minutes.round()),
        value: minutes,
        threshold: thresholds.session_warning_minutes,
    })
}

fn usage_alert(usage: &UsageData, thresholds: &AlertThresholds) -> Option<Alert> {
    if usage.five_hour >= thresholds.usage_warning {
        let severity = if usage.five_hour >= USAGE_CRITICAL_PERCENT {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };
        return Some(Alert {
            kind: AlertKind::UsageHigh,
            severity,
            message: format!("5h usage: {}%", usage.five_hour.round()),
            short_message: format!("5h: {}%", usage.five_hour.round()),
            value: usage.five_hour,
            threshold: thresholds.usage_warning,
        });
    }

    if usage.seven_day >= thresholds.usage_warning {
        return Some(Alert {
            kind: AlertKind::UsageHigh,
            severity: AlertSeverity::Warning,
            message: format!("7d usage: {}%", usage.seven_day.round()),
            short_message: format!("7d: {}%", usage.seven_day.round()),
            value: usage.seven_day,
            threshold: thresholds.usage_warning,
        });
    }

    None
}
