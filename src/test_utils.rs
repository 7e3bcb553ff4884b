//! Test utilities for Aieth
//!
//! Fake [`ChatBackend`] implementations for exercising the session without
//! a network.

use crate::backend::{ChatBackend, ChatReply, ChatRequest};
use crate::error::{AiethError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Backend that answers from a scripted queue and records every request
///
/// When the script runs out, further sends fail.
#[derive(Default)]
pub struct RecordingBackend {
    script: Mutex<VecDeque<std::result::Result<String, String>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl RecordingBackend {
    /// Create a backend with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn reply(self, text: &str) -> Self {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failure
    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(Err(message.to_string()));
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl ChatBackend for RecordingBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        let next = self.script.lock().expect("script lock poisoned").pop_front();
        match next {
            Some(Ok(response)) => Ok(ChatReply { response }),
            Some(Err(message)) => Err(AiethError::Request(message).into()),
            None => Err(AiethError::Request("no scripted reply".to_string()).into()),
        }
    }

    fn endpoint(&self) -> String {
        "recording://test".to_string()
    }
}

/// Backend whose requests never complete
pub struct PendingBackend;

#[async_trait]
impl ChatBackend for PendingBackend {
    async fn send(&self, _request: &ChatRequest) -> Result<ChatReply> {
        std::future::pending().await
    }

    fn endpoint(&self) -> String {
        "pending://test".to_string()
    }
}
