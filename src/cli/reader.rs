//! Interactive Line Reader
//!
//! The session controller: owns the raw-mode lifecycle, wires raw
//! stdin chunks through the escape decoder into buffer and history
//! operations, and resolves the line when the user presses Enter.
//! One session is active at a time; `prompt_for_input` blocks its
//! caller until a line is produced.

use std::io::{self, IsTerminal, Read, Write};
use std::process;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::buffer::InputBuffer;
use super::decoder::{self, NavCommand};
use super::history::HistoryNavigator;
use super::render;

const CTRL_C: u8 = 0x03;
const BACKSPACE: u8 = 0x08;
const LINE_FEED: u8 = 0x0A;
const CARRIAGE_RETURN: u8 = 0x0D;
const DEL: u8 = 0x7F;

/// Raw terminal mode as a scoped resource.
///
/// `acquire` and `release` are idempotent; `Drop` releases as a last
/// resort so the terminal is restored on every exit path. On a
/// non-interactive stdin both are no-ops: the reader still collects
/// bytes and resolves lines, just without per-keystroke redraws.
#[derive(Debug, Default)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enable raw mode if stdin is a terminal and it is not already on.
    pub fn acquire(&mut self) -> io::Result<()> {
        if self.active || !io::stdin().is_terminal() {
            return Ok(());
        }
        enable_raw_mode()?;
        self.active = true;
        Ok(())
    }

    /// Disable raw mode if it is currently on.
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }

    /// Whether raw mode is currently held by this guard.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Result of dispatching one input chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkOutcome {
    /// Keep listening; the visible line needs a redraw.
    Continue,
    /// Enter was pressed; resolve the session with the buffer contents.
    Submit,
    /// Interrupt byte received; terminate the process.
    Interrupt,
}

/// Apply one raw chunk to the buffer and history state.
///
/// One chunk in, zero-or-one buffer/history mutation out. Escape
/// chunks are decoded as a whole; anything unrecognized is dropped
/// without reaching the buffer. Plain chunks are walked byte by byte
/// so pasted text inserts every printable character in order.
fn apply_chunk(
    chunk: &[u8],
    buffer: &mut InputBuffer,
    history: &mut HistoryNavigator,
) -> ChunkOutcome {
    if decoder::is_escape_chunk(chunk) {
        match decoder::decode_escape(chunk) {
            NavCommand::Up => {
                if let Some(text) = history.navigate_up(&buffer.text()) {
                    buffer.set_text(&text);
                }
            }
            NavCommand::Down => {
                if let Some(text) = history.navigate_down() {
                    buffer.set_text(&text);
                }
            }
            NavCommand::Left => buffer.move_left(),
            NavCommand::Right => buffer.move_right(),
            NavCommand::Home => buffer.move_home(),
            NavCommand::End => buffer.move_end(),
            // Forward delete edits the buffer but leaves browsing mode
            // untouched, unlike every other edit. Inherited behavior,
            // kept as-is.
            NavCommand::Delete => {
                buffer.delete_forward();
            }
            NavCommand::None => {} // unrecognized sequence, dropped
        }
        return ChunkOutcome::Continue;
    }

    for &byte in chunk {
        match byte {
            CTRL_C => return ChunkOutcome::Interrupt,
            CARRIAGE_RETURN | LINE_FEED => return ChunkOutcome::Submit,
            DEL | BACKSPACE => {
                buffer.backspace();
                history.reset_browsing();
            }
            0x20..=0x7E => {
                buffer.insert(byte as char);
                history.reset_browsing();
            }
            _ => {} // other control bytes ignored
        }
    }

    ChunkOutcome::Continue
}

/// Interactive line reader with in-memory history browsing.
///
/// History lives for the lifetime of the reader and is shared across
/// `prompt_for_input` calls; each call runs one fresh editing session.
pub struct LineReader {
    history: HistoryNavigator,
    raw_mode: RawModeGuard,
    prompt_label: String,
}

impl LineReader {
    /// Create a reader seeded with prior lines, most recent first.
    pub fn new(initial_history: Vec<String>) -> Self {
        Self {
            history: HistoryNavigator::new(initial_history),
            raw_mode: RawModeGuard::default(),
            prompt_label: "plume> ".to_string(),
        }
    }

    /// Override the prompt label shown before the editable line.
    pub fn with_prompt_label(mut self, label: &str) -> Self {
        self.prompt_label = label.to_string();
        self
    }

    /// Read one line of input with history browsing.
    ///
    /// Returns the trimmed submitted line, possibly empty; the caller
    /// decides what empty input means. Non-empty lines that do not
    /// duplicate the most recent entry are recorded in history.
    pub fn prompt_for_input(&mut self) -> io::Result<String> {
        let mut buffer = InputBuffer::new();
        self.history.reset_browsing();

        let mut stdout = io::stdout();
        write!(stdout, "{}", self.prompt_label)?;
        stdout.flush()?;

        self.raw_mode.acquire()?;
        let result = self.read_loop(&mut buffer, &mut stdout);

        // Raw mode comes off before the result is inspected so an I/O
        // error cannot leave the terminal unusable.
        self.history.reset_browsing();
        self.raw_mode.release();
        result?;

        let trimmed = buffer.text().trim().to_string();
        self.history.record(&trimmed);
        Ok(trimmed)
    }

    /// Inner keystroke loop: read a chunk, dispatch, redraw.
    fn read_loop(&mut self, buffer: &mut InputBuffer, stdout: &mut io::Stdout) -> io::Result<()> {
        let mut stdin = io::stdin();
        let mut chunk = [0u8; 16];

        loop {
            let n = stdin.read(&mut chunk)?;
            if n == 0 {
                break; // EOF resolves like Enter
            }

            match apply_chunk(&chunk[..n], buffer, &mut self.history) {
                ChunkOutcome::Continue => {
                    render::redraw_line(stdout, &self.prompt_label, buffer)?;
                }
                ChunkOutcome::Submit => break,
                ChunkOutcome::Interrupt => self.terminate(),
            }
        }

        write!(stdout, "\r\n")?;
        stdout.flush()
    }

    /// Abrupt exit on the interrupt byte: restore the terminal, then
    /// leave with exit code 0, bypassing the normal resolution path.
    fn terminate(&mut self) -> ! {
        self.raw_mode.release();
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\r\n");
        let _ = stdout.flush();
        process::exit(0);
    }

    /// Replace the history entries wholesale and reset browsing.
    pub fn update_history(&mut self, entries: Vec<String>) {
        self.history.replace_entries(entries);
    }

    /// The recorded history, most recent first.
    pub fn history(&self) -> &HistoryNavigator {
        &self.history
    }

    /// Release raw mode if held. Idempotent; safe to call with no
    /// session in flight.
    pub fn close(&mut self) {
        self.raw_mode.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(chunks: &[&[u8]], buffer: &mut InputBuffer, history: &mut HistoryNavigator) {
        for chunk in chunks {
            assert_eq!(
                apply_chunk(chunk, buffer, history),
                ChunkOutcome::Continue
            );
        }
    }

    #[test]
    fn test_printable_bytes_insert_in_order() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::default();

        assert_eq!(
            apply_chunk(b"hi there", &mut buffer, &mut history),
            ChunkOutcome::Continue
        );
        assert_eq!(buffer.text(), "hi there");
        assert_eq!(buffer.cursor(), 8);
    }

    #[test]
    fn test_enter_submits() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::default();

        assert_eq!(
            apply_chunk(b"\r", &mut buffer, &mut history),
            ChunkOutcome::Submit
        );
        assert_eq!(
            apply_chunk(b"\n", &mut buffer, &mut history),
            ChunkOutcome::Submit
        );
    }

    #[test]
    fn test_interrupt_byte_signals_termination() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::default();

        assert_eq!(
            apply_chunk(&[0x03], &mut buffer, &mut history),
            ChunkOutcome::Interrupt
        );
    }

    #[test]
    fn test_unrecognized_escape_contributes_no_text() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::default();

        apply_all(&[b"\x1B[Z"], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_other_control_bytes_are_ignored() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::default();

        apply_all(&[&[0x01, 0x09, 0x1F]], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_history_browse_and_adopt_on_edit() {
        let mut buffer = InputBuffer::new();
        let mut history =
            HistoryNavigator::new(vec!["second".to_string(), "first".to_string()]);

        apply_all(&[b"\x1B[A"], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "second");
        assert_eq!(buffer.cursor(), 6);
        assert!(history.is_browsing());

        // Typing while browsing adopts the viewed text as the draft
        apply_all(&[b"!"], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "second!");
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_history_round_trip_restores_draft() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::new(vec!["old".to_string()]);

        apply_all(&[b"hello"], &mut buffer, &mut history);
        apply_all(&[b"\x1B[A"], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "old");

        apply_all(&[b"\x1B[B"], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "hello");
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn test_backspace_exits_browsing_without_altering_view() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::new(vec!["entry".to_string()]);

        apply_all(&[b"\x1B[A"], &mut buffer, &mut history);
        apply_all(&[&[0x7F]], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "entr");
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_forward_delete_keeps_browsing_mode() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::new(vec!["entry".to_string()]);

        apply_all(&[b"\x1B[A"], &mut buffer, &mut history);
        apply_all(&[b"\x1B[H", b"\x1B[3~"], &mut buffer, &mut history);
        assert_eq!(buffer.text(), "ntry");
        assert!(history.is_browsing());
    }

    #[test]
    fn test_cursor_navigation_chunks() {
        let mut buffer = InputBuffer::new();
        let mut history = HistoryNavigator::default();

        apply_all(&[b"abc", b"\x1B[D", b"\x1B[D"], &mut buffer, &mut history);
        assert_eq!(buffer.cursor(), 1);

        apply_all(&[b"\x1B[F"], &mut buffer, &mut history);
        assert_eq!(buffer.cursor(), 3);

        apply_all(&[b"\x1B[H"], &mut buffer, &mut history);
        assert_eq!(buffer.cursor(), 0);

        apply_all(&[b"\x1B[C"], &mut buffer, &mut history);
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_update_history_replaces_entries() {
        let mut reader = LineReader::new(vec!["old".to_string()]);
        reader.update_history(vec!["new".to_string()]);
        assert_eq!(reader.history().iter().collect::<Vec<_>>(), vec!["new"]);
        assert!(!reader.history().is_browsing());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut reader = LineReader::new(Vec::new());
        reader.close();
        reader.close();
    }

    #[test]
    fn test_raw_mode_guard_release_is_idempotent() {
        let mut guard = RawModeGuard::default();
        assert!(!guard.is_active());
        guard.release();
        guard.release();
        assert!(!guard.is_active());
    }
}
