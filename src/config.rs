//! Configuration management for Aieth
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{AiethError, Result};
use crate::format::RenderMode;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Aieth
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Assistant endpoint settings
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Interactive chat settings
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Assistant endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme, host and port of the assistant service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the chat endpoint, appended to `base_url`
    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_chat_path() -> String {
    "/chat/".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl EndpointConfig {
    /// Resolve the full chat URL
    ///
    /// Trailing slashes on `base_url` are ignored so that
    /// `http://host:8000/` and `http://host:8000` behave the same.
    ///
    /// # Errors
    ///
    /// Returns error if the joined URL does not parse or is not http/https
    ///
    /// # Examples
    ///
    /// ```
    /// use aieth::config::EndpointConfig;
    ///
    /// let url = EndpointConfig::default().chat_url().unwrap();
    /// assert_eq!(url.as_str(), "http://localhost:8000/chat/");
    /// ```
    pub fn chat_url(&self) -> Result<Url> {
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), self.chat_path);
        let url = Url::parse(&joined).map_err(|e| {
            AiethError::Config(format!("Invalid endpoint URL '{}': {}", joined, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AiethError::Config(format!(
                "Unsupported endpoint scheme: {}. Must be http or https",
                other
            ))
            .into()),
        }
    }
}

/// Interactive chat configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Title shown in the welcome banner
    #[serde(default = "default_title")]
    pub title: String,

    /// How assistant replies are rendered
    #[serde(default)]
    pub render: RenderMode,

    /// Show the welcome banner when a session starts
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_title() -> String {
    "Aieth - Personal Health Assistant".to_string()
}

fn default_show_banner() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            render: RenderMode::default(),
            show_banner: default_show_banner(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error: defaults are used and a warning is
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AiethError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| AiethError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("AIETH_BASE_URL") {
            tracing::debug!(base_url = %base_url, "Env override: AIETH_BASE_URL");
            self.endpoint.base_url = base_url;
        }

        if let Ok(chat_path) = std::env::var("AIETH_CHAT_PATH") {
            tracing::debug!(chat_path = %chat_path, "Env override: AIETH_CHAT_PATH");
            self.endpoint.chat_path = chat_path;
        }

        if let Ok(timeout) = std::env::var("AIETH_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.endpoint.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid AIETH_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(render) = std::env::var("AIETH_RENDER") {
            match RenderMode::parse_str(&render) {
                Ok(mode) => self.chat.render = mode,
                Err(e) => tracing::warn!("Invalid AIETH_RENDER: {}", e),
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(endpoint) = &cli.endpoint {
            tracing::debug!(endpoint = %endpoint, "CLI override: --endpoint");
            self.endpoint.base_url = endpoint.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.chat_path.starts_with('/') {
            return Err(AiethError::Config(format!(
                "endpoint.chat_path must start with '/': {}",
                self.endpoint.chat_path
            ))
            .into());
        }

        self.endpoint.chat_url()?;

        if self.endpoint.timeout_seconds == 0 {
            return Err(AiethError::Config(
                "endpoint.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.endpoint.timeout_seconds > 3600 {
            return Err(AiethError::Config(
                "endpoint.timeout_seconds must be less than or equal to 3600".to_string(),
            )
            .into());
        }

        if self.chat.title.trim().is_empty() {
            return Err(AiethError::Config("chat.title cannot be empty".to_string()).into());
        }

        Ok(())
    }
}
