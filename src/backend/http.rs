//! HTTP backend for the assistant endpoint
//!
//! Posts a JSON [`ChatRequest`] to `{base_url}{chat_path}` and decodes a
//! JSON [`ChatReply`]. Any non-2xx status is reported as
//! [`AiethError::Status`]; no retries are attempted.

use crate::backend::{ChatBackend, ChatReply, ChatRequest};
use crate::config::EndpointConfig;
use crate::error::{AiethError, Result};

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

/// Assistant backend reached over HTTP
///
/// # Examples
///
/// ```no_run
/// use aieth::backend::{ChatBackend, ChatRequest, HttpChatBackend};
/// use aieth::config::EndpointConfig;
///
/// # async fn example() -> aieth::error::Result<()> {
/// let backend = HttpChatBackend::new(EndpointConfig::default())?;
/// let reply = backend.send(&ChatRequest::new("Hello!", "1")).await?;
/// println!("{}", reply.response);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: Client,
    url: Url,
}

impl HttpChatBackend {
    /// Create a new HTTP backend
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL is invalid or the HTTP client
    /// cannot be built
    ///
    /// # Examples
    ///
    /// ```
    /// use aieth::backend::HttpChatBackend;
    /// use aieth::config::EndpointConfig;
    ///
    /// let backend = HttpChatBackend::new(EndpointConfig::default()).unwrap();
    /// assert_eq!(backend.url().as_str(), "http://localhost:8000/chat/");
    /// ```
    pub fn new(config: EndpointConfig) -> Result<Self> {
        let url = config.chat_url()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("aieth/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AiethError::Request(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!(url = %url, timeout_seconds = config.timeout_seconds, "Initialized HTTP backend");

        Ok(Self { client, url })
    }

    /// Full URL requests are posted to
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        tracing::debug!(
            url = %self.url,
            conversation_id = %request.conversation_id,
            "Posting message to assistant"
        );

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| AiethError::Request(format!("Failed to reach assistant: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiethError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| AiethError::Request(format!("Failed to parse assistant reply: {}", e)))?;

        tracing::debug!(
            conversation_id = %request.conversation_id,
            reply_len = reply.response.len(),
            "Received assistant reply"
        );

        Ok(reply)
    }

    fn endpoint(&self) -> String {
        self.url.to_string()
    }
}
