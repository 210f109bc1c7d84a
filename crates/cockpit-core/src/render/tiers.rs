//! The three layouts. Every theme goes through the same code here; only the
//! theme tables differ.

use super::context::RenderContext;
use super::text::{pad_right, truncate};
use super::theme::{Slot, Theme};
use super::widgets::{self as w, join};

const DETAIL_BOX_WIDTH: usize = 40;
const DETAIL_TOOLS: usize = 5;
const DETAIL_AGENTS: usize = 3;
const DETAIL_SKILLS: usize = 3;
const DETAIL_TODOS: usize = 5;

/// One line: model, context, branch, duration and the top alert.
pub(super) fn minimal(ctx: &RenderContext) -> Vec<String> {
    let line = join(
        &[
            w::model(ctx),
            w::context_percent(ctx),
            w::git(ctx, false),
            w::duration(ctx),
            w::alert_badge(ctx),
        ],
        " ",
    );
    vec![line]
}

/// Header with gauge and project, then an activity summary.
pub(super) fn compact(ctx: &RenderContext) -> Vec<String> {
    let header = join(
        &[
            w::model(ctx),
            w::context_gauge(ctx),
            w::project(ctx),
            w::git(ctx, false),
            w::usage_compact(ctx),
            w::extra(ctx),
            w::duration(ctx),
            w::alert_badge(ctx),
        ],
        "  ",
    );

    let mut lines = vec![header];
    let activity = join(
        &[w::tools_summary(ctx), w::agents_summary(ctx), w::todos_summary(ctx)],
        &w::separator(&ctx.theme),
    );
    if !activity.is_empty() {
        lines.push(activity);
    }
    lines
}

/// A framed two-row block followed by per-category details.
pub(super) fn full(ctx: &RenderContext) -> Vec<String> {
    let session_row = join(
        &[
            w::model(ctx),
            w::context_gauge(ctx),
            w::tokens(ctx),
            w::cost(ctx),
            w::usage_full(ctx),
            w::duration(ctx),
            w::alert_badge(ctx),
        ],
        "   ",
    );
    let project_row = join(
        &[
            w::project(ctx),
            w::git(ctx, true),
            w::config_counts(ctx),
            w::extra(ctx),
        ],
        "  ",
    );

    let mut lines = frame(&ctx.theme, ctx.width, &[session_row, project_row]);
    if ctx.config.detail_mode {
        lines.extend(detail_boxes(ctx));
    } else {
        lines.extend(detail_lines(ctx));
    }
    lines
}

/// Rows inside a closed box, or between horizontal rules when the theme has
/// no borders. Empty rows are dropped.
fn frame(theme: &Theme, width: usize, rows: &[String]) -> Vec<String> {
    let glyphs = &theme.glyphs;
    let rows: Vec<&String> = rows.iter().filter(|r| !r.is_empty()).collect();
    let inner = width.saturating_sub(2);
    let mut lines = Vec::with_capacity(rows.len() * 2 + 1);

    if !theme.features.show_box_borders {
        let rule = theme.paint(Slot::Overlay, &glyphs.box_horizontal.repeat(width));
        lines.push(rule.clone());
        for row in rows {
            lines.push(format!(" {}", truncate(row, width.saturating_sub(1))));
        }
        lines.push(rule);
        return lines;
    }

    let content = inner.saturating_sub(2);
    let vertical = theme.paint(Slot::Overlay, glyphs.box_vertical);
    lines.push(theme.paint(
        Slot::Overlay,
        &format!(
            "{}{}{}",
            glyphs.box_top_left,
            glyphs.box_horizontal.repeat(inner),
            glyphs.box_top_right
        ),
    ));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(theme.paint(
                Slot::Overlay,
                &format!(
                    "{}{}{}",
                    glyphs.box_vertical,
                    glyphs.box_horizontal.repeat(inner),
                    glyphs.box_vertical
                ),
            ));
        }
        lines.push(format!(
            "{} {} {}",
            vertical,
            pad_right(&truncate(row, content), content),
            vertical
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

fn detail_lines(ctx: &RenderContext) -> Vec<String> {
    let mut lines = vec![w::tools_line(ctx)];
    lines.extend(w::agent_lines(ctx));
    lines.push(w::skills_line(ctx));
    lines.push(w::todo_line(ctx));

    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .map(|l| format!("  {}", l))
        .collect()
}

fn detail_boxes(ctx: &RenderContext) -> Vec<String> {
    let display = &ctx.config.display;
    let panels = [
        ("TOOLS", display.show_tools, w::tool_items(ctx, DETAIL_TOOLS)),
        ("AGENTS", display.show_agents, w::agent_items(ctx, DETAIL_AGENTS)),
        ("SKILLS", display.show_skills, w::skill_items(ctx, DETAIL_SKILLS)),
        ("TODO", display.show_todos, w::todo_items(ctx, DETAIL_TODOS)),
        ("USAGE", true, w::usage_items(ctx)),
    ];

    panels
        .into_iter()
        .filter(|(_, enabled, items)| *enabled && !items.is_empty())
        .flat_map(|(title, _, items)| w::detail_box(&ctx.theme, title, &items, DETAIL_BOX_WIDTH))
        .collect()
}
