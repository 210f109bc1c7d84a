//! Formatting primitives shared by every tier.

use chrono::{DateTime, Utc};
use std::path::Path;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Number of filled cells for `percent` on a bar of `length` cells.
pub fn filled_cells(percent: f64, length: usize) -> usize {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    ((clamped / 100.0) * length as f64).round() as usize
}

pub fn progress_bar(percent: f64, length: usize, filled: &str, empty: &str) -> String {
    let count = filled_cells(percent, length);
    format!("{}{}", filled.repeat(count), empty.repeat(length - count))
}

/// `42%`
pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent.round() as i64)
}

/// Largest two units among h/m/s: `2h 5m`, `1m 5s`, `1h`, `12s`.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        let minutes = minutes % 60;
        return if minutes > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        };
    }

    if minutes > 0 {
        let seconds = seconds % 60;
        return if seconds > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}m", minutes)
        };
    }

    format!("{}s", seconds)
}

/// `950`, `1.2k`, `3.4M`
pub fn format_tokens(tokens: u64) -> String {
    if tokens >= 1_000_000 {
        format!("{:.1}M", tokens as f64 / 1_000_000.0)
    } else if tokens >= 1000 {
        format!("{:.1}k", tokens as f64 / 1000.0)
    } else {
        tokens.to_string()
    }
}

/// Leaf directory plus up to `levels` parents: `/a/b/c` with 1 → `b/c`.
pub fn format_path(path: &str, levels: usize) -> String {
    let components: Vec<&str> = Path::new(path)
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let keep = (levels + 1).min(components.len());
    components[components.len() - keep..].join("/")
}

pub fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .filter_map(|d| d.to_digit(10))
        .map(|d| SUPERSCRIPT_DIGITS[d as usize])
        .collect()
}

/// Superscript count, empty for a single occurrence.
pub fn format_count(n: usize) -> String {
    if n > 1 { superscript(n) } else { String::new() }
}

/// Countdown to a quota reset: `1h30m`, `2h`, `45m`, `now`. Empty without a
/// reset time.
pub fn format_reset_time(reset_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(reset_at) = reset_at else {
        return String::new();
    };

    let remaining = reset_at - now;
    if remaining.num_milliseconds() <= 0 {
        return "now".to_string();
    }

    let minutes = remaining.num_minutes();
    let hours = minutes / 60;
    if hours >= 1 {
        let minutes = minutes % 60;
        if minutes > 0 {
            format!("{}h{}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    } else {
        format!("{}m", minutes)
    }
}
