//! Special commands parser for interactive chat
//!
//! Lines starting with `/` are handled by the client instead of being sent
//! to the assistant. `exit` and `quit` are accepted without the slash.
//! Commands are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),
}

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Show conversation id, message count and endpoint
    ShowStatus,

    /// Re-render the transcript so far
    History,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; the input is a message for the assistant
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if the input starts with `/` but
/// is not a known command.
///
/// # Examples
///
/// ```
/// use aieth::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/status").unwrap(), SpecialCommand::ShowStatus);
/// assert_eq!(parse_special_command("QUIT").unwrap(), SpecialCommand::Exit);
/// assert_eq!(parse_special_command("I have a rash").unwrap(), SpecialCommand::None);
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/history" => Ok(SpecialCommand::History),
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "/exit" | "/quit" | "exit" | "quit" => Ok(SpecialCommand::Exit),
        _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
    }
}

/// Print the list of special commands
pub fn print_help() {
    println!(
        r#"
Special Commands
================

  /status   - Show conversation id, message count and endpoint
  /history  - Show the conversation so far
  /help     - Show this help
  /exit     - Leave the session (also: exit, quit, Ctrl-C, Ctrl-D)

Anything else is sent to the assistant. Press Ctrl-C while waiting for a
reply to cancel the request; your message stays in the input line.
"#
    );
}
