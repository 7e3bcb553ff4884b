//! Aieth - terminal chat client library
//!
//! This library provides the pieces behind the `aieth` binary: a chat
//! session that exchanges messages with a remote assistant endpoint over
//! HTTP, and the formatting rules used to display assistant replies.
//!
//! # Architecture
//!
//! - `session`: message list, conversation id, loading flag and `submit`
//! - `backend`: wire types, the `ChatBackend` trait and the HTTP backend
//! - `format`: emphasis and numbered-list rendering (HTML, ANSI, plain)
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli` / `commands`: command-line interface and its handlers
//!
//! # Example
//!
//! ```no_run
//! use aieth::backend::create_backend;
//! use aieth::{Config, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let backend = create_backend(&config.endpoint)?;
//!     let mut session = Session::new();
//!     session.submit("I slept badly, any tips?", backend.as_ref()).await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod session;

// Re-export commonly used types
pub use backend::{ChatBackend, ChatReply, ChatRequest, HttpChatBackend};
pub use config::Config;
pub use error::{AiethError, Result};
pub use format::{format_message, format_text, RenderMode};
pub use session::{Message, Sender, Session, SubmitOutcome};

#[cfg(test)]
pub mod test_utils;
