//! Adaptive status line rendering.
//!
//! [`render`] is pure: it picks a tier from the terminal width and the theme
//! breakpoints, and draws it from the [`RenderContext`] alone.

mod context;
mod format;
mod paint;
mod text;
mod theme;
mod themes;
mod tiers;
mod widgets;

pub use context::RenderContext;
pub use format::{
    filled_cells, format_count, format_duration, format_path, format_percent, format_reset_time,
    format_tokens, progress_bar, superscript,
};
pub use paint::{bold, fg};
pub use text::{pad_right, strip_ansi, truncate, visual_length};
pub use theme::{Features, GlyphSupport, Glyphs, IconSet, Layout, Palette, Rgb, Slot, Theme};
pub use widgets::severity_slot;

use tracing::debug;

/// Rendering density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Minimal,
    Compact,
    Full,
}

impl Tier {
    pub fn select(width: usize, layout: &Layout) -> Tier {
        if width < layout.compact_width {
            Tier::Minimal
        } else if width < layout.full_width {
            Tier::Compact
        } else {
            Tier::Full
        }
    }
}

/// Render the status line. Lines never exceed `ctx.width` columns.
pub fn render(ctx: &RenderContext) -> Vec<String> {
    let tier = Tier::select(ctx.width, &ctx.theme.layout);
    debug!(
        target: "cockpit::render",
        "Rendering {:?} tier with theme {} at width {}",
        tier, ctx.theme.name, ctx.width
    );

    let lines = match tier {
        Tier::Minimal => tiers::minimal(ctx),
        Tier::Compact => tiers::compact(ctx),
        Tier::Full => tiers::full(ctx),
    };

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| truncate(&line, ctx.width))
        .collect()
}
