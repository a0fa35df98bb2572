//! LLM Integration Module
//!
//! Chat-completion client for OpenAI-compatible providers.

pub mod client;

// Re-export main types
pub use client::{ChatClient, ChatRequest, ChatResponse, Message};
