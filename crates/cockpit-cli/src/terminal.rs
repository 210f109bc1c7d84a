//! What the hosting terminal can show: its width and its glyph repertoire.

use cockpit_core::GlyphSupport;

use crate::config::parse_flag;

pub const DEFAULT_WIDTH: usize = 80;

/// Terminals that usually ship with a patched font.
const NERD_FONT_TERMINALS: [&str; 7] = [
    "iterm.app",
    "wezterm",
    "alacritty",
    "kitty",
    "hyper",
    "tabby",
    "rio",
];

/// Decide glyph support from the environment.
///
/// `COCKPIT_ASCII` forces plain ASCII. `COCKPIT_NERD_FONT` forces Nerd Font
/// icons on or off. Otherwise the terminal program decides.
pub fn detect_glyph_support(env: impl Fn(&str) -> Option<String>) -> GlyphSupport {
    if env("COCKPIT_ASCII").as_deref().and_then(parse_flag) == Some(true) {
        return GlyphSupport::Ascii;
    }

    match env("COCKPIT_NERD_FONT").as_deref().and_then(parse_flag) {
        Some(true) => return GlyphSupport::NerdFont,
        Some(false) => return GlyphSupport::Unicode,
        None => {}
    }

    let term_program = env("TERM_PROGRAM").unwrap_or_default().to_lowercase();
    if NERD_FONT_TERMINALS.iter().any(|t| term_program.contains(t))
        || term_program == "vscode"
        || env("WARP_TERMINAL").is_some()
    {
        return GlyphSupport::NerdFont;
    }

    GlyphSupport::Unicode
}

/// Columns available for the status line: `COLUMNS`, then the tty size,
/// then 80.
pub fn detect_width(env: impl Fn(&str) -> Option<String>) -> usize {
    env("COLUMNS")
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .or_else(tty_width)
        .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(unix)]
fn tty_width() -> Option<usize> {
    [libc::STDERR_FILENO, libc::STDOUT_FILENO, libc::STDIN_FILENO]
        .into_iter()
        .find_map(|fd| {
            // SAFETY: TIOCGWINSZ only writes into the winsize we own.
            let mut size: libc::winsize = unsafe { std::mem::zeroed() };
            let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size as *mut libc::winsize) };
            (rc == 0 && size.ws_col > 0).then_some(size.ws_col as usize)
        })
}

#[cfg(not(unix))]
fn tty_width() -> Option<usize> {
    None
}
