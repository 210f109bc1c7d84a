//! Theme data: palette, glyphs, icons, breakpoints and feature flags.
//!
//! A theme never carries behavior. The tier renderers read these tables and
//! produce the same structure for every theme.

use cockpit_types::{InvocationStatus, ModelFamily, ThemeName};
use tracing::debug;

use super::themes;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// From `0xRRGGBB`.
    pub const fn hex(value: u32) -> Self {
        Rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }
}

/// Semantic color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Overlay,
    Text,
    Subtext,
    Muted,
    Blue,
    Green,
    Yellow,
    Red,
    Teal,
    Peach,
    ProgressLow,
    ProgressMid,
    ProgressHigh,
    ProgressCritical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub overlay: Rgb,
    pub text: Rgb,
    pub subtext: Rgb,
    pub muted: Rgb,
    pub blue: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub red: Rgb,
    pub teal: Rgb,
    pub peach: Rgb,
    pub progress_low: Rgb,
    pub progress_mid: Rgb,
    pub progress_high: Rgb,
    pub progress_critical: Rgb,
}

impl Palette {
    pub fn get(&self, slot: Slot) -> Rgb {
        match slot {
            Slot::Overlay => self.overlay,
            Slot::Text => self.text,
            Slot::Subtext => self.subtext,
            Slot::Muted => self.muted,
            Slot::Blue => self.blue,
            Slot::Green => self.green,
            Slot::Yellow => self.yellow,
            Slot::Red => self.red,
            Slot::Teal => self.teal,
            Slot::Peach => self.peach,
            Slot::ProgressLow => self.progress_low,
            Slot::ProgressMid => self.progress_mid,
            Slot::ProgressHigh => self.progress_high,
            Slot::ProgressCritical => self.progress_critical,
        }
    }
}

/// Structural characters: progress cells, box drawing and markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub progress_filled: &'static str,
    pub progress_empty: &'static str,
    pub box_top_left: &'static str,
    pub box_top_right: &'static str,
    pub box_bottom_left: &'static str,
    pub box_bottom_right: &'static str,
    pub box_horizontal: &'static str,
    pub box_vertical: &'static str,
    pub separator: &'static str,
    /// Marks the in-progress todo
    pub current: &'static str,
    pub todo_done: &'static str,
    pub todo_pending: &'static str,
    pub alert: &'static str,
    pub reset: &'static str,
    pub dot_filled: &'static str,
    pub dot_empty: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub model_opus: &'static str,
    pub model_sonnet: &'static str,
    pub model_haiku: &'static str,
    pub branch: &'static str,
    pub dirty: &'static str,
    pub ahead: &'static str,
    pub behind: &'static str,
    pub running: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub read: &'static str,
    pub edit: &'static str,
    pub write: &'static str,
    pub bash: &'static str,
    pub grep: &'static str,
    pub glob: &'static str,
    pub task: &'static str,
    pub skill: &'static str,
    pub config: &'static str,
}

impl IconSet {
    /// Icon for a model; Sonnet when the family is unknown.
    pub fn model(&self, family: Option<ModelFamily>) -> &'static str {
        match family {
            Some(ModelFamily::Opus) => self.model_opus,
            Some(ModelFamily::Haiku) => self.model_haiku,
            Some(ModelFamily::Sonnet) | None => self.model_sonnet,
        }
    }

    pub fn status(&self, status: InvocationStatus) -> &'static str {
        match status {
            InvocationStatus::Running => self.running,
            InvocationStatus::Completed => self.success,
            InvocationStatus::Error => self.error,
        }
    }

    /// Icon for a tool name, if the tool has one.
    pub fn tool(&self, name: &str) -> Option<&'static str> {
        match name {
            "Read" => Some(self.read),
            "Edit" | "MultiEdit" => Some(self.edit),
            "Write" => Some(self.write),
            "Bash" => Some(self.bash),
            "Grep" => Some(self.grep),
            "Glob" => Some(self.glob),
            "Task" => Some(self.task),
            "Skill" => Some(self.skill),
            _ => None,
        }
    }
}

/// Width breakpoints and bar length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Minimal tier below this width
    pub compact_width: usize,
    /// Full tier at or above this width
    pub full_width: usize,
    pub bar_width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Color each progress cell by its own position
    pub use_gradient_progress: bool,
    /// Full tier draws a closed box; otherwise horizontal rules only
    pub show_box_borders: bool,
    /// Emit color escapes
    pub colored: bool,
    pub bold_critical: bool,
    pub lowercase_labels: bool,
}

/// What the terminal can draw. Decided once per invocation from the
/// environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphSupport {
    NerdFont,
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub icons: IconSet,
    pub layout: Layout,
    pub features: Features,
}

impl Theme {
    /// Assemble a built-in theme for the given glyph support.
    pub fn load(name: ThemeName, support: GlyphSupport) -> Theme {
        let base = themes::builtin(name);
        let (glyphs, icons) = match support {
            GlyphSupport::NerdFont => (base.glyphs, themes::NERD_ICONS),
            GlyphSupport::Unicode => (base.glyphs, themes::FALLBACK_ICONS),
            GlyphSupport::Ascii => (themes::ASCII_GLYPHS, themes::FALLBACK_ICONS),
        };
        debug!(target: "cockpit::render", "Loaded theme {} ({:?} glyphs)", name, support);

        Theme {
            name,
            palette: base.palette,
            glyphs,
            icons,
            layout: base.layout,
            features: base.features,
        }
    }

    /// Label text with the theme's casing applied.
    pub fn label(&self, text: &str) -> String {
        if self.features.lowercase_labels {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}
