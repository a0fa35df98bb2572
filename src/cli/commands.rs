//! CLI Commands Module
//!
//! Slash-command definitions and parsing for the chat prompter.

use std::fmt;

/// Available slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    History,
    Profiles,
    Profile,
    Model,
    Config,
    Clear,
    Quit,
}

impl CliCommand {
    /// Parse a command word into a CliCommand.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "help" | "h" | "?" => Some(Self::Help),
            "history" | "hist" => Some(Self::History),
            "profiles" => Some(Self::Profiles),
            "profile" | "p" => Some(Self::Profile),
            "model" => Some(Self::Model),
            "config" | "settings" => Some(Self::Config),
            "clear" | "cls" => Some(Self::Clear),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Get command description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show available commands",
            Self::History => "Show lines entered this session",
            Self::Profiles => "List saved prompt profiles",
            Self::Profile => "Use, save, or delete a prompt profile",
            Self::Model => "Show or change the active model",
            Self::Config => "Show the current configuration",
            Self::Clear => "Clear the screen and the conversation",
            Self::Quit => "Exit the application",
        }
    }

    /// Get command usage/syntax.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Help => "/help",
            Self::History => "/history",
            Self::Profiles => "/profiles",
            Self::Profile => "/profile use [name] | save <name> <prompt> | delete <name>",
            Self::Model => "/model [name]",
            Self::Config => "/config",
            Self::Clear => "/clear",
            Self::Quit => "/quit",
        }
    }

    /// Get all available commands.
    pub fn all_commands() -> Vec<Self> {
        vec![
            Self::Help,
            Self::History,
            Self::Profiles,
            Self::Profile,
            Self::Model,
            Self::Config,
            Self::Clear,
            Self::Quit,
        ]
    }

    /// Formatted command list for the help display.
    pub fn help_lines() -> Vec<String> {
        Self::all_commands()
            .into_iter()
            .map(|cmd| format!("{:<60} {}", cmd.usage(), cmd.description()))
            .collect()
    }
}

impl fmt::Display for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Help => "Help",
            Self::History => "History",
            Self::Profiles => "Profiles",
            Self::Profile => "Profile",
            Self::Model => "Model",
            Self::Config => "Config",
            Self::Clear => "Clear",
            Self::Quit => "Quit",
        };
        write!(f, "{}", name)
    }
}

/// Command execution result.
#[derive(Debug, Clone)]
pub enum CommandResult {
    Success,
    Info(String),
    Warning(String),
    Error(String),
    Exit,
}

/// Command parser and utilities.
pub struct CommandParser;

impl CommandParser {
    /// Parse a full command line into command and arguments.
    pub fn parse_command_line(input: &str) -> Option<(CliCommand, Vec<String>)> {
        let trimmed = input.trim();
        let without_prefix = trimmed.strip_prefix('/')?;

        let mut parts = without_prefix.split_whitespace();
        let command = CliCommand::from_str(parts.next()?)?;
        let args = parts.map(|s| s.to_string()).collect();

        Some((command, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert_eq!(CliCommand::from_str("help"), Some(CliCommand::Help));
        assert_eq!(CliCommand::from_str("QUIT"), Some(CliCommand::Quit));
        assert_eq!(CliCommand::from_str("p"), Some(CliCommand::Profile));
        assert_eq!(CliCommand::from_str("invalid"), None);
    }

    #[test]
    fn test_command_line_parsing() {
        let result = CommandParser::parse_command_line("/profile use helper");
        assert!(result.is_some());
        let (cmd, args) = result.unwrap();
        assert_eq!(cmd, CliCommand::Profile);
        assert_eq!(args, vec!["use".to_string(), "helper".to_string()]);

        assert!(CommandParser::parse_command_line("not a command").is_none());
        assert!(CommandParser::parse_command_line("/invalid").is_none());
        assert!(CommandParser::parse_command_line("/").is_none());
    }

    #[test]
    fn test_help_lines_cover_all_commands() {
        let lines = CliCommand::help_lines();
        assert_eq!(lines.len(), CliCommand::all_commands().len());
        assert!(lines.iter().any(|l| l.contains("/model")));
    }
}
