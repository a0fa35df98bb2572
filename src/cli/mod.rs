//! CLI Terminal Interface Module
//!
//! Terminal front end for the chat prompter: raw-keystroke capture,
//! an editable line buffer with history recall, and the chat loop
//! that ties input to the chat-completion client.
//!
//! ## Module Structure
//!
//! - `decoder` - Escape-sequence classification for navigation keys
//! - `buffer` - Single-line input buffer with cursor management
//! - `history` - Bidirectional history recall with draft preservation
//! - `render` - Input-line redrawing
//! - `reader` - Raw-mode session controller (`prompt_for_input`)
//! - `commands` - Slash-command definitions and parsing
//! - `prompter` - Chat loop orchestration

pub mod buffer;
pub mod commands;
pub mod decoder;
pub mod history;
pub mod prompter;
pub mod reader;
pub mod render;

// Re-export main types for convenience
pub use buffer::InputBuffer;
pub use commands::{CliCommand, CommandParser, CommandResult};
pub use decoder::{decode_escape, NavCommand};
pub use history::HistoryNavigator;
pub use prompter::ChatPrompter;
pub use reader::LineReader;
