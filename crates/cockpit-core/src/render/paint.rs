//! Truecolor escapes.

use super::theme::{Rgb, Slot, Theme};

const RESET: &str = "\x1b[0m";

pub fn fg(color: Rgb, text: &str) -> String {
    let Rgb(r, g, b) = color;
    format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
}

pub fn bold(text: &str) -> String {
    format!("\x1b[1m{}\x1b[22m", text)
}

impl Theme {
    /// Color `text` with a palette slot. Empty text stays empty, and themes
    /// without color return the text as is.
    pub fn paint(&self, slot: Slot, text: &str) -> String {
        if text.is_empty() || !self.features.colored {
            return text.to_string();
        }
        fg(self.palette.get(slot), text)
    }

    /// Bold, then colored.
    pub fn paint_bold(&self, slot: Slot, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.paint(slot, &bold(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text::strip_ansi;
    use crate::render::theme::GlyphSupport;
    use cockpit_types::ThemeName;

    #[test]
    fn test_fg_escape() {
        assert_eq!(fg(Rgb(1, 2, 3), "x"), "\x1b[38;2;1;2;3mx\x1b[0m");
    }

    #[test]
    fn test_paint_respects_colored_flag() {
        let aurora = Theme::load(ThemeName::Aurora, GlyphSupport::Unicode);
        let mono = Theme::load(ThemeName::Mono, GlyphSupport::Unicode);

        let painted = aurora.paint(Slot::Blue, "model");
        assert!(painted.starts_with("\x1b[38;2;74;158;255m"));
        assert_eq!(strip_ansi(&painted), "model");

        assert_eq!(mono.paint(Slot::Blue, "model"), "model");
        assert_eq!(aurora.paint(Slot::Blue, ""), "");
    }

    #[test]
    fn test_paint_bold() {
        let mono = Theme::load(ThemeName::Mono, GlyphSupport::Unicode);
        assert_eq!(mono.paint_bold(Slot::Red, "!"), "\x1b[1m!\x1b[22m");
    }
}
