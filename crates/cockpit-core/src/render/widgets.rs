//! Segments shared by the tiers. Each returns an empty string when there is
//! nothing to show, so callers can join the non-empty ones.

use cockpit_types::{AlertSeverity, InvocationStatus, ModelFamily, TodoStatus, most_severe};

use super::context::RenderContext;
use super::format::{
    filled_cells, format_count, format_duration, format_path, format_percent, format_reset_time,
    format_tokens, progress_bar,
};
use super::text::{pad_right, take_chars, truncate};
use super::theme::{Slot, Theme};
use crate::cost::{estimate_cost, format_cost};

const AGENT_SUMMARY_LIMIT: usize = 2;
const TOOL_LINE_LIMIT: usize = 5;
const AGENT_LINE_LIMIT: usize = 3;
const SKILL_LINE_LIMIT: usize = 5;
const TARGET_CHARS: usize = 30;
const TODO_SUMMARY_CHARS: usize = 20;

/// Palette slot for an alert badge.
pub fn severity_slot(severity: AlertSeverity) -> Slot {
    match severity {
        AlertSeverity::Critical => Slot::ProgressCritical,
        AlertSeverity::Warning => Slot::ProgressHigh,
        AlertSeverity::Info => Slot::ProgressMid,
    }
}

pub(super) fn percent_slot(percent: Option<f64>) -> Slot {
    match percent {
        None => Slot::Text,
        Some(p) if p >= 90.0 => Slot::ProgressCritical,
        Some(p) if p >= 75.0 => Slot::ProgressHigh,
        Some(p) if p >= 50.0 => Slot::ProgressMid,
        Some(_) => Slot::ProgressLow,
    }
}

pub(super) fn usage_slot(percent: f64) -> Slot {
    if percent >= 90.0 {
        Slot::Red
    } else if percent >= 75.0 {
        Slot::Peach
    } else if percent >= 50.0 {
        Slot::Yellow
    } else {
        Slot::Green
    }
}

pub(super) fn status_slot(status: InvocationStatus) -> Slot {
    match status {
        InvocationStatus::Running => Slot::Yellow,
        InvocationStatus::Completed => Slot::Green,
        InvocationStatus::Error => Slot::Red,
    }
}

/// Join the non-empty segments with `sep`.
pub(super) fn join(parts: &[String], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

// ==================== Header segments ====================

pub(super) fn model(ctx: &RenderContext) -> String {
    let name = ctx.snapshot.model_name();
    let family =
        ModelFamily::detect(name).or_else(|| ModelFamily::detect(ctx.snapshot.model_id()));
    let icon = ctx.theme.icons.model(family);
    ctx.theme.paint(Slot::Blue, &format!("{} {}", icon, name))
}

pub(super) fn context_percent(ctx: &RenderContext) -> String {
    let percent = ctx.snapshot.context_percent();
    let text = percent.map(format_percent).unwrap_or_else(|| "??%".to_string());
    ctx.theme.paint(percent_slot(percent), &text)
}

/// Context bar followed by the percentage.
pub(super) fn context_gauge(ctx: &RenderContext) -> String {
    format!("{} {}", progress(ctx), context_percent(ctx))
}

fn progress(ctx: &RenderContext) -> String {
    let theme = &ctx.theme;
    let percent = ctx.snapshot.context_percent();
    let cells = theme.layout.bar_width;
    let glyphs = &theme.glyphs;

    if !theme.features.use_gradient_progress {
        let bar = progress_bar(
            percent.unwrap_or(0.0),
            cells,
            glyphs.progress_filled,
            glyphs.progress_empty,
        );
        return theme.paint(percent_slot(percent), &bar);
    }

    let filled = filled_cells(percent.unwrap_or(0.0), cells);
    (0..cells)
        .map(|i| {
            if i < filled {
                let position = (i + 1) as f64 / cells as f64 * 100.0;
                theme.paint(percent_slot(Some(position)), glyphs.progress_filled)
            } else {
                theme.paint(Slot::Muted, glyphs.progress_empty)
            }
        })
        .collect()
}

pub(super) fn git(ctx: &RenderContext, detailed: bool) -> String {
    let Some(git) = ctx.visible_git() else {
        return String::new();
    };
    if git.branch.is_empty() {
        return String::new();
    }

    let icons = &ctx.theme.icons;
    let dirty = if git.is_dirty { icons.dirty } else { "" };
    let mut text = format!("{} {}{}", icons.branch, git.branch, dirty);
    if detailed {
        if git.ahead > 0 {
            text.push_str(&format!(" {}{}", icons.ahead, git.ahead));
        }
        if git.behind > 0 {
            text.push_str(&format!(" {}{}", icons.behind, git.behind));
        }
    }
    ctx.theme.paint(Slot::Teal, &text)
}

pub(super) fn duration(ctx: &RenderContext) -> String {
    ctx.theme
        .paint(Slot::Muted, &format_duration(ctx.snapshot.duration_ms()))
}

pub(super) fn project(ctx: &RenderContext) -> String {
    match ctx.snapshot.cwd() {
        Some(cwd) => ctx
            .theme
            .paint(Slot::Teal, &format_path(cwd, ctx.config.path_levels)),
        None => String::new(),
    }
}

pub(super) fn extra(ctx: &RenderContext) -> String {
    match ctx.extra_label.as_deref() {
        Some(label) if !label.trim().is_empty() => ctx.theme.paint(Slot::Subtext, label.trim()),
        _ => String::new(),
    }
}

/// `5h:25%`
pub(super) fn usage_compact(ctx: &RenderContext) -> String {
    let Some(usage) = ctx.visible_usage() else {
        return String::new();
    };
    ctx.theme.paint(
        usage_slot(usage.five_hour),
        &format!("5h:{}", format_percent(usage.five_hour)),
    )
}

/// `5h:25% ↻1h30m`
pub(super) fn usage_full(ctx: &RenderContext) -> String {
    let Some(usage) = ctx.visible_usage() else {
        return String::new();
    };
    let reset = format_reset_time(usage.five_hour_reset_at, ctx.now);
    let countdown = if reset.is_empty() {
        String::new()
    } else {
        ctx.theme
            .paint(Slot::Muted, &format!(" {}{}", ctx.theme.glyphs.reset, reset))
    };
    format!("{}{}", usage_compact(ctx), countdown)
}

/// `(45.0k/200.0k)`
pub(super) fn tokens(ctx: &RenderContext) -> String {
    let text = match (ctx.snapshot.context_tokens(), ctx.snapshot.context_window_size()) {
        (Some(used), Some(size)) => format!("({}/{})", format_tokens(used), format_tokens(size)),
        (Some(used), None) => format!("({})", format_tokens(used)),
        _ => return String::new(),
    };
    ctx.theme.paint(Slot::Subtext, &text)
}

/// Reported session cost, or an estimate marked with `~`.
pub(super) fn cost(ctx: &RenderContext) -> String {
    if !ctx.config.display.show_cost {
        return String::new();
    }

    let text = if let Some(reported) = ctx.snapshot.total_cost_usd() {
        format_cost(reported)
    } else {
        let Some(usage) = ctx
            .snapshot
            .context_window
            .as_ref()
            .and_then(|w| w.current_usage.as_ref())
        else {
            return String::new();
        };
        let input = usage.input_tokens
            + usage.cache_creation_input_tokens
            + usage.cache_read_input_tokens;
        let estimate = estimate_cost(ctx.snapshot.model_id(), input, usage.output_tokens);
        format!("~{}", format_cost(estimate))
    };
    ctx.theme.paint(Slot::Peach, &text)
}

pub(super) fn config_counts(ctx: &RenderContext) -> String {
    let counts = &ctx.config_counts;
    if !ctx.config.display.show_config_counts || counts.is_empty() {
        return String::new();
    }

    let parts: Vec<String> = [
        (counts.claude_md, "md"),
        (counts.rules, "rules"),
        (counts.mcp, "mcp"),
        (counts.hooks, "hooks"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, label)| format!("{} {}", n, label))
    .collect();

    ctx.theme.paint(
        Slot::Muted,
        &format!("{} {}", ctx.theme.icons.config, parts.join("  ")),
    )
}

/// The most severe alert as a badge.
pub(super) fn alert_badge(ctx: &RenderContext) -> String {
    let Some(alert) = most_severe(&ctx.alerts) else {
        return String::new();
    };

    let slot = severity_slot(alert.severity);
    let text = format!("{} {}", ctx.theme.glyphs.alert, alert.short_message);
    if alert.severity == AlertSeverity::Critical && ctx.theme.features.bold_critical {
        ctx.theme.paint_bold(slot, &text)
    } else {
        ctx.theme.paint(slot, &text)
    }
}

pub(super) fn separator(theme: &Theme) -> String {
    format!("  {}  ", theme.paint(Slot::Muted, theme.glyphs.separator))
}

// ==================== Activity summaries ====================

/// `Read✓³ Bash◐`: one entry per tool name, in recency order.
pub(super) fn tools_summary(ctx: &RenderContext) -> String {
    if !ctx.config.display.show_tools {
        return String::new();
    }

    let mut groups: Vec<(&str, usize, InvocationStatus)> = Vec::new();
    for tool in &ctx.transcript.tools {
        match groups.iter_mut().find(|(name, _, _)| *name == tool.name) {
            Some((_, count, status)) => {
                *count += 1;
                *status = dominant(*status, tool.status);
            }
            None => groups.push((tool.name.as_str(), 1, tool.status)),
        }
    }

    let parts: Vec<String> = groups
        .into_iter()
        .map(|(name, count, status)| {
            ctx.theme.paint(
                status_slot(status),
                &format!("{}{}{}", name, ctx.theme.icons.status(status), format_count(count)),
            )
        })
        .collect();
    parts.join(" ")
}

/// Running beats error beats completed.
fn dominant(a: InvocationStatus, b: InvocationStatus) -> InvocationStatus {
    use InvocationStatus::*;
    match (a, b) {
        (Running, _) | (_, Running) => Running,
        (Error, _) | (_, Error) => Error,
        _ => Completed,
    }
}

pub(super) fn agents_summary(ctx: &RenderContext) -> String {
    if !ctx.config.display.show_agents {
        return String::new();
    }

    let parts: Vec<String> = ctx
        .transcript
        .agents
        .iter()
        .take(AGENT_SUMMARY_LIMIT)
        .map(|agent| {
            let hint = agent
                .model_hint
                .map(|m| format!("[{}]", &m.as_str()[..1]))
                .unwrap_or_default();
            let label = format!("{}{}", agent.subagent_type, ctx.theme.icons.status(agent.status));
            format!(
                "{}{}",
                ctx.theme.paint(status_slot(agent.status), &label),
                ctx.theme.paint(Slot::Muted, &hint)
            )
        })
        .collect();
    parts.join(" ")
}

pub(super) fn todos_summary(ctx: &RenderContext) -> String {
    let transcript = &ctx.transcript;
    if !ctx.config.display.show_todos || transcript.todos.is_empty() {
        return String::new();
    }

    let ratio = format!("{}/{}", transcript.completed_todos(), transcript.todos.len());
    match transcript.current_todo() {
        Some(current) => format!(
            "{}{}",
            ctx.theme.paint(
                Slot::Yellow,
                &format!(
                    "{} {}",
                    ctx.theme.glyphs.current,
                    take_chars(&current.content, TODO_SUMMARY_CHARS)
                )
            ),
            ctx.theme.paint(Slot::Muted, &format!(" {}", ratio))
        ),
        None => ctx
            .theme
            .paint(Slot::Muted, &format!("{} {}", ratio, ctx.theme.label("tasks"))),
    }
}

// ==================== Detail lines ====================

pub(super) fn tools_line(ctx: &RenderContext) -> String {
    if !ctx.config.display.show_tools {
        return String::new();
    }

    let parts: Vec<String> = ctx
        .transcript
        .tools
        .iter()
        .take(TOOL_LINE_LIMIT)
        .map(|tool| {
            let label = format!("{}{}", tool.name, ctx.theme.icons.status(tool.status));
            let target = tool
                .target
                .as_deref()
                .map(|t| format!(" {}", truncate(t, TARGET_CHARS)))
                .unwrap_or_default();
            format!(
                "{}{}",
                ctx.theme.paint(status_slot(tool.status), &label),
                ctx.theme.paint(Slot::Subtext, &target)
            )
        })
        .collect();
    parts.join("   ")
}

pub(super) fn agent_lines(ctx: &RenderContext) -> Vec<String> {
    if !ctx.config.display.show_agents {
        return Vec::new();
    }

    ctx.transcript
        .agents
        .iter()
        .take(AGENT_LINE_LIMIT)
        .map(|agent| {
            let label = format!("{}{}", agent.subagent_type, ctx.theme.icons.status(agent.status));
            let hint = agent
                .model_hint
                .map(|m| format!(" [{}]", m.as_str()))
                .unwrap_or_default();
            let description = agent
                .description
                .as_deref()
                .map(|d| format!(" {}", take_chars(d, 40)))
                .unwrap_or_default();
            format!(
                "{}{}{}",
                ctx.theme.paint(status_slot(agent.status), &label),
                ctx.theme.paint(Slot::Muted, &hint),
                ctx.theme.paint(Slot::Subtext, &description)
            )
        })
        .collect()
}

pub(super) fn skills_line(ctx: &RenderContext) -> String {
    if !ctx.config.display.show_skills {
        return String::new();
    }

    let parts: Vec<String> = ctx
        .transcript
        .skills
        .iter()
        .take(SKILL_LINE_LIMIT)
        .map(|skill| {
            let label = format!(
                "{} {}{}",
                ctx.theme.icons.skill,
                skill.name,
                ctx.theme.icons.status(skill.status)
            );
            ctx.theme.paint(status_slot(skill.status), &label)
        })
        .collect();
    parts.join("   ")
}

/// Current todo with a dot per item, or the all-done summary.
pub(super) fn todo_line(ctx: &RenderContext) -> String {
    let transcript = &ctx.transcript;
    if !ctx.config.display.show_todos || transcript.todos.is_empty() {
        return String::new();
    }

    let glyphs = &ctx.theme.glyphs;
    let total = transcript.todos.len();
    let completed = transcript.completed_todos();
    let dots = format!(
        "{}{}",
        glyphs.dot_filled.repeat(completed),
        glyphs.dot_empty.repeat(total - completed)
    );

    if let Some(current) = transcript.current_todo() {
        return format!(
            "{}{}",
            ctx.theme
                .paint(Slot::Yellow, &format!("{} {}", glyphs.current, current.content)),
            ctx.theme
                .paint(Slot::Muted, &format!(" ({}/{}) {}", completed, total, dots))
        );
    }

    if completed == total {
        format!(
            "{}{}",
            ctx.theme.paint(
                Slot::Green,
                &format!("{} {}", glyphs.todo_done, ctx.theme.label("All tasks completed"))
            ),
            ctx.theme.paint(Slot::Muted, &format!(" ({}/{})", total, total))
        )
    } else {
        ctx.theme.paint(
            Slot::Muted,
            &format!("{} {}/{} {} {}", glyphs.todo_pending, completed, total, ctx.theme.label("tasks"), dots),
        )
    }
}

// ==================== Detail boxes ====================

/// A titled box of fixed outer width.
pub(super) fn detail_box(theme: &Theme, title: &str, items: &[String], width: usize) -> Vec<String> {
    let glyphs = &theme.glyphs;
    let inner = width.saturating_sub(2);
    let title = format!(" {} ", theme.label(title));
    let title_len = title.chars().count().min(inner);
    let left = (inner - title_len) / 2;
    let right = inner - title_len - left;

    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!(
        "{}{}{}",
        theme.paint(
            Slot::Overlay,
            &format!("{}{}", glyphs.box_top_left, glyphs.box_horizontal.repeat(left))
        ),
        theme.paint(Slot::Subtext, &title),
        theme.paint(
            Slot::Overlay,
            &format!("{}{}", glyphs.box_horizontal.repeat(right), glyphs.box_top_right)
        ),
    ));

    let content = inner.saturating_sub(2);
    for item in items {
        lines.push(format!(
            "{} {} {}",
            theme.paint(Slot::Overlay, glyphs.box_vertical),
            pad_right(&truncate(item, content), content),
            theme.paint(Slot::Overlay, glyphs.box_vertical),
        ));
    }

    lines.push(theme.paint(
        Slot::Overlay,
        &format!(
            "{}{}{}",
            glyphs.box_bottom_left,
            glyphs.box_horizontal.repeat(inner),
            glyphs.box_bottom_right
        ),
    ));
    lines
}

pub(super) fn tool_items(ctx: &RenderContext, limit: usize) -> Vec<String> {
    ctx.transcript
        .tools
        .iter()
        .take(limit)
        .map(|tool| {
            let icon = ctx.theme.icons.status(tool.status);
            let name = match ctx.theme.icons.tool(&tool.name) {
                Some(tool_icon) => format!("{} {}", tool_icon, tool.name),
                None => tool.name.clone(),
            };
            let target = tool.target.as_deref().unwrap_or("");
            format!(
                "{}{}",
                ctx.theme
                    .paint(status_slot(tool.status), &format!("{} {}", icon, name)),
                ctx.theme.paint(Slot::Subtext, &format!("  {}", target))
            )
        })
        .collect()
}

pub(super) fn agent_items(ctx: &RenderContext, limit: usize) -> Vec<String> {
    ctx.transcript
        .agents
        .iter()
        .take(limit)
        .map(|agent| {
            let icon = ctx.theme.icons.status(agent.status);
            let hint = agent
                .model_hint
                .map(|m| format!(" [{}]", m.as_str()))
                .unwrap_or_default();
            let description = agent
                .description
                .as_deref()
                .map(|d| format!(" {}", take_chars(d, 25)))
                .unwrap_or_default();
            format!(
                "{}{}{}",
                ctx.theme.paint(
                    status_slot(agent.status),
                    &format!("{} {}", icon, agent.subagent_type)
                ),
                ctx.theme.paint(Slot::Muted, &hint),
                ctx.theme.paint(Slot::Subtext, &description)
            )
        })
        .collect()
}

pub(super) fn skill_items(ctx: &RenderContext, limit: usize) -> Vec<String> {
    ctx.transcript
        .skills
        .iter()
        .take(limit)
        .map(|skill| {
            let icon = ctx.theme.icons.status(skill.status);
            let args = skill
                .args
                .as_deref()
                .map(|a| format!("  {}", take_chars(a, 25)))
                .unwrap_or_default();
            format!(
                "{}{}",
                ctx.theme
                    .paint(status_slot(skill.status), &format!("{} {}", icon, skill.name)),
                ctx.theme.paint(Slot::Subtext, &args)
            )
        })
        .collect()
}

pub(super) fn todo_items(ctx: &RenderContext, limit: usize) -> Vec<String> {
    let glyphs = &ctx.theme.glyphs;
    ctx.transcript
        .todos
        .iter()
        .take(limit)
        .map(|todo| {
            let (icon, slot) = match todo.status {
                TodoStatus::Completed => (glyphs.todo_done, Slot::Green),
                TodoStatus::InProgress => (glyphs.current, Slot::Yellow),
                TodoStatus::Pending => (glyphs.todo_pending, Slot::Muted),
            };
            let text = format!("{} {}", icon, take_chars(&todo.content, 30));
            let marker = if todo.status == TodoStatus::InProgress {
                ctx.theme.paint(Slot::Muted, "  (current)")
            } else {
                String::new()
            };
            format!("{}{}", ctx.theme.paint(slot, &text), marker)
        })
        .collect()
}

pub(super) fn usage_items(ctx: &RenderContext) -> Vec<String> {
    let Some(usage) = ctx.visible_usage() else {
        return Vec::new();
    };

    let glyphs = &ctx.theme.glyphs;
    [
        ("5h", usage.five_hour, usage.five_hour_reset_at),
        ("7d", usage.seven_day, usage.seven_day_reset_at),
    ]
    .into_iter()
    .map(|(window, percent, reset_at)| {
        let slot = usage_slot(percent);
        let bar = progress_bar(percent, 10, glyphs.progress_filled, glyphs.progress_empty);
        let reset = format_reset_time(reset_at, ctx.now);
        let countdown = if reset.is_empty() {
            String::new()
        } else {
            ctx.theme
                .paint(Slot::Muted, &format!("  {} {}", glyphs.reset, reset))
        };
        format!(
            "{}{}{}",
            ctx.theme.paint(Slot::Subtext, &format!("{}: ", window)),
            ctx.theme
                .paint(slot, &format!("{} {}", bar, format_percent(percent))),
            countdown
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text::strip_ansi;
    use crate::render::theme::GlyphSupport;
    use chrono::{TimeZone, Utc};
    use cockpit_types::{
        AgentInvocation, Alert, AlertKind, GitStatus, SessionSnapshot, ThemeName, TodoItem,
        ToolInvocation,
    };
    use serde_json::json;

    fn ctx(snapshot: serde_json::Value) -> RenderContext {
        let snapshot: SessionSnapshot = serde_json::from_value(snapshot).unwrap();
        let theme = Theme::load(ThemeName::Mono, GlyphSupport::Unicode);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        RenderContext::new(snapshot, theme, 120, now)
    }

    fn tool(name: &str, status: InvocationStatus) -> ToolInvocation {
        ToolInvocation {
            id: format!("id-{}", name),
            name: name.to_string(),
            target: None,
            status,
            start_time: Utc::now(),
            end_time: None,
            error: None,
        }
    }

    fn plain(s: String) -> String {
        strip_ansi(&s).into_owned()
    }

    // ==================== Slots ====================

    #[test]
    fn test_severity_slot() {
        assert_eq!(severity_slot(AlertSeverity::Critical), Slot::ProgressCritical);
        assert_eq!(severity_slot(AlertSeverity::Warning), Slot::ProgressHigh);
        assert_eq!(severity_slot(AlertSeverity::Info), Slot::ProgressMid);
    }

    #[test]
    fn test_percent_slot() {
        assert_eq!(percent_slot(None), Slot::Text);
        assert_eq!(percent_slot(Some(10.0)), Slot::ProgressLow);
        assert_eq!(percent_slot(Some(60.0)), Slot::ProgressMid);
        assert_eq!(percent_slot(Some(80.0)), Slot::ProgressHigh);
        assert_eq!(percent_slot(Some(95.0)), Slot::ProgressCritical);
    }

    // ==================== Header ====================

    #[test]
    fn test_model_and_percent() {
        let c = ctx(json!({
            "model": {"id": "claude-opus-4", "display_name": "Opus"},
            "context_window": {"used_percentage": 42.4}
        }));
        assert_eq!(plain(model(&c)), "[O] Opus");
        assert_eq!(plain(context_percent(&c)), "42%");

        let c = ctx(json!({}));
        assert_eq!(plain(model(&c)), "[S] Unknown");
        assert_eq!(plain(context_percent(&c)), "??%");
    }

    #[test]
    fn test_context_gauge_uses_bar_width() {
        let c = ctx(json!({"context_window": {"used_percentage": 40.0}}));
        let gauge = plain(context_gauge(&c));
        let width = c.theme.layout.bar_width;
        assert!(gauge.starts_with(&"#".repeat(6)));
        assert_eq!(gauge, format!("{}{} 40%", "#".repeat(6), "-".repeat(width - 6)));
    }

    #[test]
    fn test_gradient_gauge_has_all_cells() {
        let mut c = ctx(json!({"context_window": {"used_percentage": 50.0}}));
        c.theme = Theme::load(ThemeName::Aurora, GlyphSupport::Unicode);
        let gauge = plain(progress(&c));
        assert_eq!(gauge, "▰▰▰▰▰▱▱▱▱▱");
    }

    #[test]
    fn test_git_segment() {
        let mut c = ctx(json!({}));
        assert_eq!(git(&c, false), "");

        c.git = Some(GitStatus {
            branch: "main".to_string(),
            is_dirty: true,
            ahead: 2,
            behind: 0,
        });
        assert_eq!(plain(git(&c, false)), "# main*");
        assert_eq!(plain(git(&c, true)), "# main* ^2");

        c.config.display.show_git = false;
        assert_eq!(git(&c, true), "");
    }

    #[test]
    fn test_cost_reported_and_estimated() {
        let c = ctx(json!({"cost": {"total_cost_usd": 0.5}}));
        assert_eq!(plain(cost(&c)), "$0.500");

        let c = ctx(json!({
            "model": {"id": "claude-sonnet-4-20250514"},
            "context_window": {"current_usage": {"input_tokens": 1000000, "output_tokens": 0}}
        }));
        assert_eq!(plain(cost(&c)), "~$3.00");

        let mut c = ctx(json!({"cost": {"total_cost_usd": 0.5}}));
        c.config.display.show_cost = false;
        assert_eq!(cost(&c), "");
    }

    #[test]
    fn test_tokens_segment() {
        let c = ctx(json!({"context_window": {
            "context_window_size": 200000,
            "current_usage": {"input_tokens": 45000}
        }}));
        assert_eq!(plain(tokens(&c)), "(45.0k/200.0k)");
        assert_eq!(tokens(&ctx(json!({}))), "");
    }

    #[test]
    fn test_alert_badge_picks_most_severe() {
        let mut c = ctx(json!({}));
        assert_eq!(alert_badge(&c), "");

        c.alerts = vec![
            Alert {
                kind: AlertKind::CostHigh,
                severity: AlertSeverity::Warning,
                message: String::new(),
                short_message: "$2.00".to_string(),
                value: 2.0,
                threshold: 1.0,
            },
            Alert {
                kind: AlertKind::ContextCritical,
                severity: AlertSeverity::Critical,
                message: String::new(),
                short_message: "CTX 95%!".to_string(),
                value: 95.0,
                threshold: 90.0,
            },
        ];
        assert_eq!(plain(alert_badge(&c)), "⚠ CTX 95%!");
    }

    #[test]
    fn test_config_counts_segment() {
        let mut c = ctx(json!({}));
        assert_eq!(config_counts(&c), "");
        c.config_counts.claude_md = 2;
        c.config_counts.hooks = 1;
        assert_eq!(plain(config_counts(&c)), "* 2 md  1 hooks");
    }

    // ==================== Activity ====================

    #[test]
    fn test_tools_summary_groups_by_name() {
        let mut c = ctx(json!({}));
        c.transcript.tools = vec![
            tool("Bash", InvocationStatus::Running),
            tool("Read", InvocationStatus::Completed),
            tool("Read", InvocationStatus::Completed),
            tool("Read", InvocationStatus::Completed),
            tool("Edit", InvocationStatus::Error),
        ];
        assert_eq!(plain(tools_summary(&c)), "Bash~ Read+³ Editx");

        c.config.display.show_tools = false;
        assert_eq!(tools_summary(&c), "");
    }

    #[test]
    fn test_tool_items_carry_tool_icons() {
        let mut c = ctx(json!({}));
        let mut read = tool("Read", InvocationStatus::Completed);
        read.target = Some("/repo/lib.rs".to_string());
        c.transcript.tools = vec![read, tool("WebFetch", InvocationStatus::Running)];

        let items: Vec<String> = tool_items(&c, 5).into_iter().map(plain).collect();
        assert_eq!(items, vec!["+ R Read  /repo/lib.rs", "~ WebFetch  "]);
        assert_eq!(tool_items(&c, 1).len(), 1);
    }

    #[test]
    fn test_agents_summary_limited_to_two() {
        let mut c = ctx(json!({}));
        c.transcript.agents = (0..3)
            .map(|i| AgentInvocation {
                id: format!("a{}", i),
                subagent_type: format!("agent{}", i),
                model_hint: (i == 0).then_some(ModelFamily::Haiku),
                description: None,
                status: InvocationStatus::Running,
                start_time: Utc::now(),
                end_time: None,
                error: None,
            })
            .collect();
        assert_eq!(plain(agents_summary(&c)), "agent0~[h] agent1~");
    }

    #[test]
    fn test_todo_summaries() {
        let mut c = ctx(json!({}));
        c.transcript.todos = vec![
            TodoItem {
                content: "Write the parser".to_string(),
                status: TodoStatus::Completed,
                active_form: None,
            },
            TodoItem {
                content: "Wire up rendering".to_string(),
                status: TodoStatus::InProgress,
                active_form: None,
            },
            TodoItem {
                content: "Ship".to_string(),
                status: TodoStatus::Pending,
                active_form: None,
            },
        ];
        assert_eq!(plain(todos_summary(&c)), "▸ Wire up rendering 1/3");
        assert_eq!(plain(todo_line(&c)), "▸ Wire up rendering (1/3) ●○○");

        for todo in &mut c.transcript.todos {
            todo.status = TodoStatus::Completed;
        }
        assert_eq!(plain(todos_summary(&c)), "3/3 tasks");
        assert_eq!(plain(todo_line(&c)), "✓ All tasks completed (3/3)");
    }

    // ==================== Boxes ====================

    #[test]
    fn test_detail_box_shape() {
        let theme = Theme::load(ThemeName::Aurora, GlyphSupport::Unicode);
        let lines = detail_box(&theme, "TOOLS", &["Read".to_string()], 20);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(crate::render::text::visual_length(line), 20);
        }
        assert_eq!(
            plain(lines[0].clone()),
            format!("╭{} TOOLS {}╮", "─".repeat(5), "─".repeat(6))
        );
        assert_eq!(plain(lines[1].clone()), format!("│ Read{} │", " ".repeat(12)));
    }

    #[test]
    fn test_detail_box_truncates_long_items() {
        let theme = Theme::load(ThemeName::Retro, GlyphSupport::Unicode);
        let long = "x".repeat(100);
        let lines = detail_box(&theme, "TODO", &[long], 20);
        assert_eq!(crate::render::text::visual_length(&lines[1]), 20);
        assert!(plain(lines[1].clone()).contains('…'));
    }
}
