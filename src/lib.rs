//! plume - a terminal AI chat assistant
//!
//! Interactive chat loop over an OpenAI-compatible chat-completion API,
//! with a raw-mode line editor (cursor addressing, escape-sequence
//! decoding, in-memory history recall that preserves the in-progress
//! draft), named prompt profiles persisted as JSON, and a single JSON
//! config document with environment-variable fallback for the API key.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plume::cli::LineReader;
//!
//! let mut reader = LineReader::new(vec!["previous line".to_string()]);
//! let line = reader.prompt_for_input().unwrap();
//! println!("got: {}", line);
//! ```

pub mod cli;
pub mod config;
pub mod llm;
pub mod profile;

// Re-export commonly used types for convenience
pub use cli::{ChatPrompter, LineReader};
pub use config::AppConfig;
pub use llm::ChatClient;
pub use profile::ProfileStore;
