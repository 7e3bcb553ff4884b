//! Assistant backend abstraction
//!
//! The assistant lives behind a single HTTP endpoint that accepts one
//! message per request and answers with one reply. This module defines the
//! wire types, the [`ChatBackend`] trait the session talks to, and the HTTP
//! implementation.

pub mod http;

pub use http::HttpChatBackend;

use crate::config::EndpointConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body posted to the assistant endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message, as typed
    pub message: String,
    /// Client-generated id correlating messages of one session
    pub conversation_id: String,
}

impl ChatRequest {
    /// Create a new request
    ///
    /// # Examples
    ///
    /// ```
    /// use aieth::backend::ChatRequest;
    ///
    /// let req = ChatRequest::new("hello", "1700000000000");
    /// let json = serde_json::to_value(&req).unwrap();
    /// assert_eq!(json["message"], "hello");
    /// assert_eq!(json["conversation_id"], "1700000000000");
    /// ```
    pub fn new(message: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id: conversation_id.into(),
        }
    }
}

/// Response body returned by the assistant endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text
    pub response: String,
}

/// A remote assistant that answers one message at a time
///
/// Implementations report every failure (transport, non-2xx status,
/// undecodable body) as an error; callers decide how to surface it.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one message and wait for the reply
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent, the endpoint answers
    /// with a non-success status, or the body is not a valid reply.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Human-readable description of where requests go
    fn endpoint(&self) -> String;
}

/// Create the backend described by the endpoint configuration
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built or the endpoint URL
/// is invalid.
pub fn create_backend(config: &EndpointConfig) -> Result<Box<dyn ChatBackend>> {
    Ok(Box::new(HttpChatBackend::new(config.clone())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_wire_fields() {
        let req = ChatRequest::new("I have a headache", "42");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"message":"I have a headache","conversation_id":"42"}"#
        );
    }

    #[test]
    fn test_reply_ignores_extra_fields() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response":"Rest up.","sources":[]}"#).unwrap();
        assert_eq!(reply.response, "Rest up.");
    }

    #[test]
    fn test_reply_requires_response_field() {
        let result = serde_json::from_str::<ChatReply>(r#"{"answer":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_backend_uses_configured_endpoint() {
        let backend = create_backend(&EndpointConfig::default()).unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:8000/chat/");
    }
}
