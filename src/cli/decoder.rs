//! Escape Sequence Decoder
//!
//! Classifies raw input chunks as navigation commands or plain text.
//! Recognizes the fixed set of terminal escape codes used for line
//! navigation; everything else escape-prefixed is dropped on the floor.

const ESC: u8 = 0x1B;

/// Navigation commands produced by decoding an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Delete,
    /// Escape-prefixed chunk that matches no recognized sequence.
    None,
}

/// Check whether a chunk begins an escape sequence.
pub fn is_escape_chunk(chunk: &[u8]) -> bool {
    chunk.first() == Some(&ESC)
}

/// Decode an escape-prefixed chunk into a navigation command.
///
/// Both common terminal variants are accepted for Home (`ESC [ H`,
/// `ESC [ 1 ~`) and End (`ESC [ F`, `ESC [ 4 ~`). Unrecognized
/// sequences decode to [`NavCommand::None`]; the raw bytes must never
/// be inserted into the input buffer.
pub fn decode_escape(chunk: &[u8]) -> NavCommand {
    match chunk {
        [ESC, b'[', b'A'] => NavCommand::Up,
        [ESC, b'[', b'B'] => NavCommand::Down,
        [ESC, b'[', b'C'] => NavCommand::Right,
        [ESC, b'[', b'D'] => NavCommand::Left,
        [ESC, b'[', b'H'] | [ESC, b'[', b'1', b'~'] => NavCommand::Home,
        [ESC, b'[', b'F'] | [ESC, b'[', b'4', b'~'] => NavCommand::End,
        [ESC, b'[', b'3', b'~'] => NavCommand::Delete,
        _ => NavCommand::None,
    }
}
