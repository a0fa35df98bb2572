//! Render Controller
//!
//! Keeps the visible terminal line in sync with the input buffer after
//! every mutation: rewrite the prompt label and buffer, then park the
//! terminal cursor at the logical cursor offset.

use std::io::{self, Write};

use super::buffer::InputBuffer;

/// Redraw the current input line.
///
/// Idempotent: repeated calls with unchanged state produce the same
/// visible result. Writes to any `Write` so tests can capture the
/// emitted control sequences.
pub fn redraw_line(out: &mut impl Write, label: &str, buffer: &InputBuffer) -> io::Result<()> {
    // Return to column 0, reprint the label, clear the remainder of the
    // line, then the buffer contents.
    write!(out, "\r{}\x1B[K{}", label, buffer.text())?;

    // The terminal cursor now sits after the last char; walk it back to
    // the logical cursor position.
    let chars_after_cursor = buffer.len() - buffer.cursor();
    if chars_after_cursor > 0 {
        write!(out, "\x1B[{}D", chars_after_cursor)?;
    }

    out.flush()
}
