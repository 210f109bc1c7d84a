//! ANSI-aware text measurement.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';

/// Terminal escape sequences: CSI, OSC (BEL or ST terminated), charset
/// selection and single-character escapes.
static ANSI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\x1b\[[0-9;?]*[A-Za-z]",
        r"|\x1b\][^\x07]*\x07",
        r"|\x1b\][^\x1b]*\x1b\\",
        r"|\x1b[()][A-Z0-9]",
        r"|\x1b[=>MNOP78]",
        r"|\x1b",
    ))
    .expect("ANSI pattern is valid")
});

pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_REGEX.replace_all(text, "")
}

/// Display columns occupied by `text` once escape sequences are removed.
pub fn visual_length(text: &str) -> usize {
    strip_ansi(text).chars().map(char_width).sum()
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Shorten `text` to at most `max` display columns.
///
/// Text that already fits is returned untouched, escapes included. Otherwise
/// the escapes are dropped and the plain text is cut with a trailing `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if visual_length(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let stripped = strip_ansi(text);
    let budget = max - char_width(ELLIPSIS);
    let mut out = String::with_capacity(stripped.len());
    let mut used = 0;
    for ch in stripped.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Pad with trailing spaces up to `width` display columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = visual_length(text);
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// First `max` characters, for short previews of free text.
pub fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
