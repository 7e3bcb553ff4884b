//! Chat session state
//!
//! A [`Session`] holds everything the chat view needs: the conversation id
//! sent with every request, the append-only message list, the loading flag
//! and the current input draft. [`Session::submit`] is the single operation
//! that talks to the assistant.

use crate::backend::{ChatBackend, ChatRequest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person at the keyboard
    User,
    /// The remote assistant
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "you"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message
    pub sender: Sender,
    /// Raw message text, before any formatting
    pub text: String,
}

impl Message {
    /// Creates a user message
    ///
    /// # Examples
    ///
    /// ```
    /// use aieth::session::{Message, Sender};
    ///
    /// let msg = Message::user("Hello");
    /// assert_eq!(msg.sender, Sender::User);
    /// ```
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Creates an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

/// Result of [`Session::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: the input was blank or a request was in flight
    Ignored,
    /// The assistant answered and its message was appended
    Replied,
    /// The request failed; the failure has been logged
    Failed,
}

/// Sets the loading flag for as long as it is alive
///
/// Dropping the guard clears the flag, which also covers a submit future
/// that is dropped before the backend answers.
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// State of one chat session
#[derive(Debug, Clone)]
pub struct Session {
    conversation_id: String,
    messages: Vec<Message>,
    loading: bool,
    draft: String,
}

impl Session {
    /// Creates a session with a conversation id derived from the current
    /// time in milliseconds
    ///
    /// # Examples
    ///
    /// ```
    /// use aieth::session::Session;
    ///
    /// let session = Session::new();
    /// assert!(session.conversation_id().parse::<i64>().is_ok());
    /// assert!(session.messages().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_conversation_id(chrono::Utc::now().timestamp_millis().to_string())
    }

    /// Creates a session that continues an existing backend conversation
    pub fn with_conversation_id(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            messages: Vec::new(),
            loading: false,
            draft: String::new(),
        }
    }

    /// Id sent with every request of this session
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Transcript in the order messages were added
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Text currently held in the input line
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submit user input to the assistant
    ///
    /// Blank input is ignored without touching the transcript or the
    /// network. Otherwise the user message is appended, one request is sent,
    /// and on success the assistant reply is appended and the draft cleared.
    /// Failures are logged and otherwise leave the session as it was after
    /// the user message: no assistant message, draft kept for editing.
    /// The loading flag is cleared on every path, including cancellation.
    pub async fn submit(&mut self, text: &str, backend: &dyn ChatBackend) -> SubmitOutcome {
        self.draft = text.to_string();

        if text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.loading {
            tracing::debug!("Submit ignored: request already in flight");
            return SubmitOutcome::Ignored;
        }

        self.messages.push(Message::user(text));
        let request = ChatRequest::new(text, self.conversation_id.as_str());

        let _loading = LoadingGuard::engage(&mut self.loading);

        match backend.send(&request).await {
            Ok(reply) => {
                self.messages.push(Message::assistant(reply.response));
                self.draft.clear();
                SubmitOutcome::Replied
            }
            Err(e) => {
                tracing::error!(
                    conversation_id = %self.conversation_id,
                    endpoint = %backend.endpoint(),
                    "Chat request failed: {:#}",
                    e
                );
                SubmitOutcome::Failed
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
