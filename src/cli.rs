//! Command-line interface definition for Aieth
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot messages and
//! previewing reply formatting.

use clap::{Parser, Subcommand};

/// Aieth - Personal Health Assistant
///
/// Chat with the Aieth assistant from the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "aieth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the assistant base URL (e.g. http://localhost:8000)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Aieth
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Continue an existing conversation instead of starting a new one
        #[arg(long)]
        conversation_id: Option<String>,
    },

    /// Send a single message and print the reply
    Send {
        /// Message text
        message: String,

        /// Continue an existing conversation instead of starting a new one
        #[arg(long)]
        conversation_id: Option<String>,

        /// Output format: terminal, html or plain (defaults to config)
        #[arg(short, long)]
        render: Option<String>,
    },

    /// Preview how a reply would be formatted
    Format {
        /// Text to format; read from stdin when omitted
        text: Option<String>,

        /// Output format: terminal, html or plain
        #[arg(short, long, default_value = "html")]
        render: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_chat() {
        let cli = Cli::try_parse_from(["aieth", "chat"]).unwrap();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Chat {
                conversation_id: None
            }
        ));
    }

    #[test]
    fn test_cli_parse_chat_with_conversation_id() {
        let cli =
            Cli::try_parse_from(["aieth", "chat", "--conversation-id", "1700000000000"]).unwrap();
        if let Commands::Chat { conversation_id } = cli.command {
            assert_eq!(conversation_id, Some("1700000000000".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_send() {
        let cli = Cli::try_parse_from(["aieth", "send", "I have a cough", "--render", "plain"])
            .unwrap();
        if let Commands::Send {
            message,
            conversation_id,
            render,
        } = cli.command
        {
            assert_eq!(message, "I have a cough");
            assert_eq!(conversation_id, None);
            assert_eq!(render, Some("plain".to_string()));
        } else {
            panic!("Expected Send command");
        }
    }

    #[test]
    fn test_cli_parse_send_requires_message() {
        assert!(Cli::try_parse_from(["aieth", "send"]).is_err());
    }

    #[test]
    fn test_cli_parse_format_defaults_to_html() {
        let cli = Cli::try_parse_from(["aieth", "format", "**hi**"]).unwrap();
        if let Commands::Format { text, render } = cli.command {
            assert_eq!(text, Some("**hi**".to_string()));
            assert_eq!(render, "html");
        } else {
            panic!("Expected Format command");
        }
    }

    #[test]
    fn test_cli_parse_format_from_stdin() {
        let cli = Cli::try_parse_from(["aieth", "format"]).unwrap();
        assert!(matches!(cli.command, Commands::Format { text: None, .. }));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "aieth",
            "chat",
            "--verbose",
            "--endpoint",
            "http://127.0.0.1:9000",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.endpoint, Some("http://127.0.0.1:9000".to_string()));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::try_parse_from(["aieth", "--config", "custom.yaml", "chat"]).unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_parse_missing_command() {
        assert!(Cli::try_parse_from(["aieth"]).is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        assert!(Cli::try_parse_from(["aieth", "invalid"]).is_err());
    }
}
