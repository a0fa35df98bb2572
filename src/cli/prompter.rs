//! Chat Prompter
//!
//! The interactive chat loop: reads lines through the history-aware
//! line reader, dispatches slash commands, and forwards everything
//! else to the chat-completion client as the running conversation.

use std::io::{self, Write};
use std::path::PathBuf;

use inquire::{InquireError, Select};

use super::commands::{CliCommand, CommandParser, CommandResult};
use super::reader::LineReader;
use crate::config::AppConfig;
use crate::llm::{ChatClient, Message};
use crate::profile::ProfileStore;

/// Types of output messages.
#[derive(Debug, Clone)]
pub enum MessageType {
    Info,
    Error,
    Success,
    Warning,
    Assistant,
    System,
}

impl MessageType {
    pub fn prefix(&self) -> &'static str {
        match self {
            MessageType::Info => "·",
            MessageType::Error => "✗",
            MessageType::Success => "✓",
            MessageType::Warning => "△",
            MessageType::Assistant => "❯",
            MessageType::System => "§",
        }
    }
}

/// Interactive chat prompter.
pub struct ChatPrompter {
    config: AppConfig,
    config_path: PathBuf,
    reader: LineReader,
    profiles: ProfileStore,
    client: ChatClient,
    conversation: Vec<Message>,
    system_prompt: Option<String>,
    should_exit: bool,
}

impl ChatPrompter {
    /// Create a prompter over an already-loaded config and profile store.
    pub fn new(
        config: AppConfig,
        config_path: PathBuf,
        profiles: ProfileStore,
        client: ChatClient,
    ) -> Self {
        Self {
            config,
            config_path,
            reader: LineReader::new(Vec::new()),
            profiles,
            client,
            conversation: Vec::new(),
            system_prompt: None,
            should_exit: false,
        }
    }

    /// Print a message with type prefix.
    fn print_message(&self, message_type: MessageType, content: &str) {
        println!("{} {}", message_type.prefix(), content);
    }

    fn print_error(&self, message: &str) {
        self.print_message(MessageType::Error, message);
    }

    fn print_info(&self, message: &str) {
        self.print_message(MessageType::Info, message);
    }

    fn print_warning(&self, message: &str) {
        self.print_message(MessageType::Warning, message);
    }

    fn print_system(&self, message: &str) {
        self.print_message(MessageType::System, message);
    }

    fn print_assistant(&self, content: &str) {
        self.print_message(MessageType::Assistant, content);
    }

    /// Show welcome screen.
    fn show_welcome(&self) {
        println!();
        self.print_system("plume - terminal AI chat");
        self.print_info(&format!("Model: {}", self.config.model));
        self.print_info("Type '/help' for commands, '/quit' or Ctrl+C to leave");
        println!();
    }

    /// Run the main chat loop.
    pub async fn run(&mut self) -> io::Result<()> {
        self.show_welcome();

        while !self.should_exit {
            let line = self.reader.prompt_for_input()?;

            // Empty or whitespace-only submissions just re-prompt
            if line.is_empty() {
                continue;
            }

            if line == "exit" || line == "quit" {
                break;
            }

            if line.starts_with('/') {
                self.handle_command_line(&line)?;
                continue;
            }

            self.send_to_model(&line).await;
        }

        self.reader.close();
        Ok(())
    }

    /// Parse and execute one slash-command line.
    fn handle_command_line(&mut self, line: &str) -> io::Result<()> {
        let Some((command, args)) = CommandParser::parse_command_line(line) else {
            self.print_warning(&format!(
                "Unknown command '{}'. Type /help for the command list.",
                line
            ));
            return Ok(());
        };

        match self.execute_command(command, args)? {
            CommandResult::Error(msg) => self.print_error(&msg),
            CommandResult::Warning(msg) => self.print_warning(&msg),
            CommandResult::Info(msg) => self.print_info(&msg),
            CommandResult::Exit => self.should_exit = true,
            CommandResult::Success => {}
        }
        Ok(())
    }

    /// Execute a CLI command.
    fn execute_command(
        &mut self,
        command: CliCommand,
        args: Vec<String>,
    ) -> io::Result<CommandResult> {
        let result = match command {
            CliCommand::Help => {
                self.print_system("=== Commands ===");
                for line in CliCommand::help_lines() {
                    self.print_info(&line);
                }
                CommandResult::Success
            }
            CliCommand::History => {
                self.print_system("=== Input History ===");
                if self.reader.history().is_empty() {
                    self.print_info("Nothing entered yet this session.");
                } else {
                    for (i, entry) in self.reader.history().iter().enumerate() {
                        self.print_info(&format!("{:3}. {}", i + 1, entry));
                    }
                }
                CommandResult::Success
            }
            CliCommand::Profiles => {
                self.print_system("=== Profiles ===");
                if self.profiles.is_empty() {
                    self.print_info("No profiles saved. Use /profile save <name> <prompt>.");
                } else {
                    for profile in self.profiles.list() {
                        self.print_info(&format!(
                            "{} (created {})",
                            profile.name,
                            profile.created_display()
                        ));
                    }
                }
                CommandResult::Success
            }
            CliCommand::Profile => self.execute_profile_command(&args)?,
            CliCommand::Model => {
                if let Some(model) = args.first() {
                    self.config.model = model.clone();
                    self.config.save(&self.config_path)?;
                    CommandResult::Info(format!("Model set to {}", self.config.model))
                } else {
                    CommandResult::Info(format!("Active model: {}", self.config.model))
                }
            }
            CliCommand::Config => {
                self.print_system("=== Configuration ===");
                for line in self.config.summary() {
                    self.print_info(&line);
                }
                CommandResult::Success
            }
            CliCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
                io::stdout().flush()?;
                self.conversation.clear();
                CommandResult::Info("Screen and conversation cleared".to_string())
            }
            CliCommand::Quit => CommandResult::Exit,
        };

        Ok(result)
    }

    /// Handle the `/profile use|save|delete` subcommands.
    fn execute_profile_command(&mut self, args: &[String]) -> io::Result<CommandResult> {
        let result = match args.first().map(String::as_str) {
            Some("use") | None => {
                let name = match args.get(1) {
                    Some(name) => Some(name.clone()),
                    None => self.pick_profile(),
                };
                match name {
                    Some(name) => match self.profiles.get(&name) {
                        Some(profile) => {
                            self.system_prompt = Some(profile.prompt.clone());
                            self.conversation.clear();
                            CommandResult::Info(format!(
                                "Profile '{}' active; conversation restarted",
                                profile.name
                            ))
                        }
                        None => CommandResult::Error(format!("Profile '{}' not found", name)),
                    },
                    None => CommandResult::Success, // picker cancelled
                }
            }
            Some("save") => match (args.get(1), args.len() > 2) {
                (Some(name), true) => {
                    let prompt = args[2..].join(" ");
                    let profile = self.profiles.save_profile(name, &prompt)?;
                    CommandResult::Info(format!("Profile '{}' saved", profile.name))
                }
                _ => CommandResult::Warning("Usage: /profile save <name> <prompt>".to_string()),
            },
            Some("delete") => match args.get(1) {
                Some(name) => {
                    if self.profiles.delete(name)? {
                        CommandResult::Info(format!("Profile '{}' deleted", name))
                    } else {
                        CommandResult::Error(format!("Profile '{}' not found", name))
                    }
                }
                None => CommandResult::Warning("Usage: /profile delete <name>".to_string()),
            },
            Some(other) => {
                CommandResult::Warning(format!("Unknown profile action '{}'", other))
            }
        };

        Ok(result)
    }

    /// Interactive profile picker. Returns the chosen name, or `None`
    /// when there is nothing to pick or the menu was cancelled.
    fn pick_profile(&self) -> Option<String> {
        let names: Vec<String> = self
            .profiles
            .list()
            .into_iter()
            .map(|p| p.name.clone())
            .collect();
        if names.is_empty() {
            self.print_warning("No profiles saved yet.");
            return None;
        }

        let selection = Select::new("Select profile:", names)
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to cancel")
            .prompt();

        match selection {
            Ok(name) => Some(name),
            Err(InquireError::OperationCanceled) => None,
            Err(e) => {
                self.print_error(&format!("Profile menu error: {}", e));
                None
            }
        }
    }

    /// Send the user's line to the model and print the reply.
    async fn send_to_model(&mut self, input: &str) {
        let mut messages = Vec::new();
        if let Some(prompt) = &self.system_prompt {
            messages.push(Message::system(prompt));
        }
        messages.extend(self.conversation.iter().cloned());
        messages.push(Message::user(input));

        match self.client.send_conversation(&self.config.model, messages).await {
            Ok(reply) => {
                for line in reply.lines() {
                    if line.trim().is_empty() {
                        println!();
                    } else {
                        self.print_assistant(line);
                    }
                }
                println!();
                self.conversation.push(Message::user(input));
                self.conversation.push(Message::assistant(&reply));
            }
            Err(error) => {
                self.print_error(&format!("Chat request failed: {}", error));
            }
        }
    }
}
