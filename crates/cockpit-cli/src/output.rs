//! Writing rendered lines to the host.

use std::io::{self, Write};

const NBSP: &str = "\u{a0}";

/// Write each line with ordinary spaces turned into non-breaking ones, so
/// the host does not collapse or trim the alignment.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.replace(' ', NBSP))?;
    }
    out.flush()
}
