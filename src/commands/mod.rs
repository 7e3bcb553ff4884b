/*!
Command handlers for the CLI

This module provides the handlers invoked by the CLI entrypoint:

- `chat`   — Interactive chat session
- `send`   — Send a single message and print the reply
- `format` — Preview reply formatting without a backend

The handlers are thin: state lives in [`Session`], transport in
[`crate::backend`], and formatting in [`crate::format`].
*/

use crate::backend::create_backend;
use crate::config::Config;
use crate::error::{AiethError, Result};
use crate::format::{render, RenderMode};
use crate::session::{Message, Sender, Session, SubmitOutcome};

// Special commands parser for the interactive session
pub mod special_commands;

fn new_session(conversation_id: Option<String>) -> Session {
    match conversation_id {
        Some(id) => {
            tracing::info!(conversation_id = %id, "Continuing existing conversation");
            Session::with_conversation_id(id)
        }
        None => Session::new(),
    }
}

fn parse_render(render: &str) -> Result<RenderMode> {
    RenderMode::parse_str(render).map_err(|e| AiethError::Config(e).into())
}

/// Print one transcript entry
fn print_message(message: &Message, mode: RenderMode) {
    use colored::Colorize;

    match message.sender {
        Sender::User => println!("{} {}", "you ›".blue().bold(), message.text),
        Sender::Assistant => {
            println!("{}", "assistant ›".green().bold());
            for line in render(&message.text, mode).lines() {
                println!("  {}", line);
            }
            println!();
        }
    }
}

// Chat command handler
pub mod chat {
    //! Interactive chat session.
    //!
    //! Runs a readline loop: special commands are handled locally, every
    //! other line is submitted to the assistant through the session. A
    //! failed send leaves the message in the input line for editing.

    use super::*;
    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::io::Write;

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `conversation_id` - Optional id of a conversation to continue
    ///
    /// # Errors
    ///
    /// Returns error if the backend or the line editor cannot be created.
    /// Request failures are logged and do not end the session.
    pub async fn run_chat(config: Config, conversation_id: Option<String>) -> Result<()> {
        let backend = create_backend(&config.endpoint)?;
        let mut session = new_session(conversation_id);
        let mut rl = DefaultEditor::new().map_err(AiethError::from)?;

        if config.chat.show_banner {
            print_welcome_banner(&config.chat.title, session.conversation_id());
        }

        let prompt = format!("{} ", "›".blue().bold());

        loop {
            let draft = session.draft().to_string();
            match rl.readline_with_initial(&prompt, (&draft, "")) {
                Ok(line) => {
                    match parse_special_command(&line) {
                        Ok(SpecialCommand::ShowStatus) => {
                            print_status_display(&session, &backend.endpoint());
                            continue;
                        }
                        Ok(SpecialCommand::History) => {
                            for message in session.messages() {
                                print_message(message, config.chat.render);
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {}
                        Err(e) => {
                            eprintln!("{}", e);
                            continue;
                        }
                    }

                    let sending = !line.trim().is_empty();
                    if sending {
                        rl.add_history_entry(line.as_str())
                            .map_err(AiethError::from)?;
                        show_thinking();
                    }

                    let outcome = tokio::select! {
                        outcome = session.submit(&line, backend.as_ref()) => Some(outcome),
                        _ = tokio::signal::ctrl_c() => None,
                    };

                    if sending {
                        clear_thinking();
                    }

                    match outcome {
                        Some(SubmitOutcome::Replied) => {
                            if let Some(reply) = session.messages().last() {
                                print_message(reply, config.chat.render);
                            }
                        }
                        Some(SubmitOutcome::Failed) | Some(SubmitOutcome::Ignored) => {}
                        None => tracing::info!("Request cancelled"),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome_banner(title: &str, conversation_id: &str) {
        println!("\n{}\n", title.bold());
        println!("Conversation: {}", conversation_id.dimmed());
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    fn print_status_display(session: &Session, endpoint: &str) {
        println!();
        println!("Conversation:      {}", session.conversation_id());
        println!("Messages:          {}", session.messages().len());
        println!("Endpoint:          {}", endpoint);
        println!();
    }

    fn show_thinking() {
        print!("{}", "AI is thinking...".dimmed());
        let _ = std::io::stdout().flush();
    }

    fn clear_thinking() {
        print!("\r\x1b[2K");
        let _ = std::io::stdout().flush();
    }
}

// One-shot send handler
pub mod send {
    //! Send one message and print the reply.

    use super::*;

    /// Send a single message
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `message` - Text to send
    /// * `conversation_id` - Optional id of a conversation to continue
    /// * `render` - Optional output format overriding `chat.render`
    ///
    /// # Errors
    ///
    /// Returns error if the message is blank, the render mode is unknown,
    /// or the request fails. The failure itself is logged by the session.
    pub async fn run_send(
        config: Config,
        message: String,
        conversation_id: Option<String>,
        render: Option<String>,
    ) -> Result<()> {
        let mode = match render {
            Some(r) => parse_render(&r)?,
            None => config.chat.render,
        };

        let backend = create_backend(&config.endpoint)?;
        let mut session = new_session(conversation_id);

        match session.submit(&message, backend.as_ref()).await {
            SubmitOutcome::Replied => {
                if let Some(reply) = session.messages().last() {
                    println!("{}", super::render(&reply.text, mode));
                }
                Ok(())
            }
            SubmitOutcome::Ignored => {
                Err(AiethError::Request("Nothing to send: message is empty".to_string()).into())
            }
            SubmitOutcome::Failed => Err(AiethError::Request(format!(
                "No reply from {} (conversation {})",
                backend.endpoint(),
                session.conversation_id()
            ))
            .into()),
        }
    }
}

// Format preview handler
pub mod format {
    //! Print how a reply would be rendered.

    use super::*;
    use std::io::Read;

    /// Format text from the argument or stdin and print it
    ///
    /// # Errors
    ///
    /// Returns error if the render mode is unknown or stdin cannot be read
    pub fn run_format(text: Option<String>, render: &str) -> Result<()> {
        let mode = parse_render(render)?;

        let text = match text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        println!("{}", super::render(&text, mode));
        Ok(())
    }
}
