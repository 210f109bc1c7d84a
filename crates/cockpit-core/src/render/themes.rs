//! Built-in theme tables.

use cockpit_types::ThemeName;

use super::theme::{Features, Glyphs, IconSet, Layout, Palette, Rgb};

/// Everything but the icons, which depend on glyph support.
pub(super) struct BuiltinTheme {
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub layout: Layout,
    pub features: Features,
}

pub(super) fn builtin(name: ThemeName) -> BuiltinTheme {
    match name {
        ThemeName::Aurora => BuiltinTheme {
            palette: AURORA_PALETTE,
            glyphs: Glyphs {
                progress_filled: "▰",
                progress_empty: "▱",
                ..ROUNDED_GLYPHS
            },
            layout: Layout {
                compact_width: 80,
                full_width: 120,
                bar_width: 10,
            },
            features: Features {
                use_gradient_progress: true,
                show_box_borders: true,
                colored: true,
                bold_critical: true,
                lowercase_labels: false,
            },
        },
        ThemeName::Neon => BuiltinTheme {
            palette: NEON_PALETTE,
            glyphs: Glyphs {
                progress_filled: "▓",
                progress_empty: "░",
                box_top_left: "╔",
                box_top_right: "╗",
                box_bottom_left: "╚",
                box_bottom_right: "╝",
                box_horizontal: "═",
                box_vertical: "║",
                ..ROUNDED_GLYPHS
            },
            layout: Layout {
                compact_width: 80,
                full_width: 120,
                bar_width: 12,
            },
            features: Features {
                use_gradient_progress: true,
                show_box_borders: true,
                colored: true,
                bold_critical: true,
                lowercase_labels: false,
            },
        },
        ThemeName::Mono => BuiltinTheme {
            palette: MONO_PALETTE,
            glyphs: Glyphs {
                progress_filled: "#",
                progress_empty: "-",
                box_top_left: "+",
                box_top_right: "+",
                box_bottom_left: "+",
                box_bottom_right: "+",
                box_horizontal: "-",
                box_vertical: "|",
                separator: "|",
                ..ROUNDED_GLYPHS
            },
            layout: Layout {
                compact_width: 60,
                full_width: 100,
                bar_width: 15,
            },
            features: Features {
                use_gradient_progress: false,
                show_box_borders: false,
                colored: false,
                bold_critical: true,
                lowercase_labels: false,
            },
        },
        ThemeName::Zen => BuiltinTheme {
            palette: ZEN_PALETTE,
            glyphs: Glyphs {
                progress_filled: "━",
                progress_empty: "┅",
                box_horizontal: "╌",
                box_vertical: " ",
                separator: "·",
                ..ROUNDED_GLYPHS
            },
            layout: Layout {
                compact_width: 50,
                full_width: 80,
                bar_width: 8,
            },
            features: Features {
                use_gradient_progress: false,
                show_box_borders: false,
                colored: true,
                bold_critical: false,
                lowercase_labels: true,
            },
        },
        ThemeName::Retro => BuiltinTheme {
            palette: RETRO_PALETTE,
            glyphs: Glyphs {
                progress_filled: "█",
                progress_empty: "░",
                box_top_left: "┌",
                box_top_right: "┐",
                box_bottom_left: "└",
                box_bottom_right: "┘",
                ..ROUNDED_GLYPHS
            },
            layout: Layout {
                compact_width: 70,
                full_width: 100,
                bar_width: 20,
            },
            features: Features {
                use_gradient_progress: false,
                show_box_borders: true,
                colored: true,
                bold_critical: true,
                lowercase_labels: false,
            },
        },
    }
}

const ROUNDED_GLYPHS: Glyphs = Glyphs {
    progress_filled: "▰",
    progress_empty: "▱",
    box_top_left: "╭",
    box_top_right: "╮",
    box_bottom_left: "╰",
    box_bottom_right: "╯",
    box_horizontal: "─",
    box_vertical: "│",
    separator: "│",
    current: "▸",
    todo_done: "✓",
    todo_pending: "○",
    alert: "⚠",
    reset: "↻",
    dot_filled: "●",
    dot_empty: "○",
};

pub(super) const ASCII_GLYPHS: Glyphs = Glyphs {
    progress_filled: "#",
    progress_empty: "-",
    box_top_left: "+",
    box_top_right: "+",
    box_bottom_left: "+",
    box_bottom_right: "+",
    box_horizontal: "-",
    box_vertical: "|",
    separator: "|",
    current: ">",
    todo_done: "+",
    todo_pending: "o",
    alert: "!",
    reset: "@",
    dot_filled: "*",
    dot_empty: ".",
};

pub(super) const NERD_ICONS: IconSet = IconSet {
    model_opus: "◆",
    model_sonnet: "◇",
    model_haiku: "○",
    branch: "\u{e0a0}",
    dirty: "*",
    ahead: "↑",
    behind: "↓",
    running: "◐",
    success: "✓",
    error: "✗",
    read: "\u{f15c}",
    edit: "\u{f044}",
    write: "\u{f0c7}",
    bash: "\u{f120}",
    grep: "\u{f002}",
    glob: "\u{f115}",
    task: "\u{f0ae}",
    skill: "\u{f0eb}",
    config: "\u{f013}",
};

pub(super) const FALLBACK_ICONS: IconSet = IconSet {
    model_opus: "[O]",
    model_sonnet: "[S]",
    model_haiku: "[H]",
    branch: "#",
    dirty: "*",
    ahead: "^",
    behind: "v",
    running: "~",
    success: "+",
    error: "x",
    read: "R",
    edit: "E",
    write: "W",
    bash: "B",
    grep: "G",
    glob: "F",
    task: "T",
    skill: "S",
    config: "*",
};

const AURORA_PALETTE: Palette = Palette {
    overlay: Rgb::hex(0x1e2740),
    text: Rgb::hex(0xe8eef7),
    subtext: Rgb::hex(0xa8b5c9),
    muted: Rgb::hex(0x5a6a80),
    blue: Rgb::hex(0x4a9eff),
    green: Rgb::hex(0x3de8a0),
    yellow: Rgb::hex(0xffd866),
    red: Rgb::hex(0xff6b9d),
    teal: Rgb::hex(0x2dd4bf),
    peach: Rgb::hex(0xffab70),
    progress_low: Rgb::hex(0x3de8a0),
    progress_mid: Rgb::hex(0x2dd4bf),
    progress_high: Rgb::hex(0xb580ff),
    progress_critical: Rgb::hex(0xff6b9d),
};

const NEON_PALETTE: Palette = Palette {
    overlay: Rgb::hex(0x252545),
    text: Rgb::hex(0xffffff),
    subtext: Rgb::hex(0xb8b8d0),
    muted: Rgb::hex(0x606080),
    blue: Rgb::hex(0x00d4ff),
    green: Rgb::hex(0x39ff14),
    yellow: Rgb::hex(0xffff00),
    red: Rgb::hex(0xff0055),
    teal: Rgb::hex(0x00ffcc),
    peach: Rgb::hex(0xff6600),
    progress_low: Rgb::hex(0x39ff14),
    progress_mid: Rgb::hex(0x00ffcc),
    progress_high: Rgb::hex(0xffff00),
    progress_critical: Rgb::hex(0xff0055),
};

const MONO_PALETTE: Palette = Palette {
    overlay: Rgb::hex(0x333333),
    text: Rgb::hex(0xffffff),
    subtext: Rgb::hex(0xcccccc),
    muted: Rgb::hex(0x666666),
    blue: Rgb::hex(0xffffff),
    green: Rgb::hex(0xffffff),
    yellow: Rgb::hex(0xcccccc),
    red: Rgb::hex(0xffffff),
    teal: Rgb::hex(0xcccccc),
    peach: Rgb::hex(0xffffff),
    progress_low: Rgb::hex(0xffffff),
    progress_mid: Rgb::hex(0xcccccc),
    progress_high: Rgb::hex(0x999999),
    progress_critical: Rgb::hex(0xffffff),
};

const ZEN_PALETTE: Palette = Palette {
    overlay: Rgb::hex(0x3f3b37),
    text: Rgb::hex(0xe7e5e4),
    subtext: Rgb::hex(0xa8a29e),
    muted: Rgb::hex(0x78716c),
    blue: Rgb::hex(0x7dd3fc),
    green: Rgb::hex(0x86efac),
    yellow: Rgb::hex(0xfde68a),
    red: Rgb::hex(0xfca5a5),
    teal: Rgb::hex(0x5eead4),
    peach: Rgb::hex(0xfed7aa),
    progress_low: Rgb::hex(0x86efac),
    progress_mid: Rgb::hex(0x5eead4),
    progress_high: Rgb::hex(0xfde68a),
    progress_critical: Rgb::hex(0xfca5a5),
};

const RETRO_PALETTE: Palette = Palette {
    overlay: Rgb::hex(0x1a2e1a),
    text: Rgb::hex(0x33ff33),
    subtext: Rgb::hex(0x22cc22),
    muted: Rgb::hex(0x117711),
    blue: Rgb::hex(0x33ff33),
    green: Rgb::hex(0x33ff33),
    yellow: Rgb::hex(0x55ff55),
    red: Rgb::hex(0xff3333),
    teal: Rgb::hex(0x22ee66),
    peach: Rgb::hex(0x66ff66),
    progress_low: Rgb::hex(0x22cc22),
    progress_mid: Rgb::hex(0x33ff33),
    progress_high: Rgb::hex(0x55ff55),
    progress_critical: Rgb::hex(0xff3333),
};
