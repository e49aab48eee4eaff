//! AI Provider trait and configuration.
//!
//! Defines the interface that generative-text backends must implement.
//! A provider receives one prompt and returns the reply as opaque text.

use crate::{HookError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for an AI provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Model identifier (e.g., "gemini-1.5-flash").
    pub model: String,

    /// Base URL for the API.
    pub base_url: Option<String>,

    /// Request timeout in seconds. No timeout is applied when unset.
    pub timeout_seconds: Option<u64>,
}

impl ProviderConfig {
    /// Create a new provider config with API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            timeout_seconds: None,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Load config from environment variables.
    ///
    /// Expected variables:
    /// - `GOOGLE_API_KEY` (required)
    /// - `GEMINI_MODEL` (defaults to "gemini-1.5-flash")
    /// - `GEMINI_BASE_URL` (optional)
    /// - `HOOKSMITH_PROVIDER_TIMEOUT` (optional, seconds)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = var("GOOGLE_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| HookError::ConfigError("GOOGLE_API_KEY must be set".to_string()))?;

        let model = var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let mut config = Self::new(api_key, model);

        if let Some(url) = var("GEMINI_BASE_URL") {
            config = config.with_base_url(url);
        }

        if let Some(raw) = var("HOOKSMITH_PROVIDER_TIMEOUT") {
            let seconds = raw.parse::<u64>().map_err(|_| {
                HookError::ConfigError(format!("HOOKSMITH_PROVIDER_TIMEOUT is not a number: {}", raw))
            })?;
            config = config.with_timeout(seconds);
        }

        Ok(config)
    }
}

/// Trait that AI providers must implement.
///
/// Implementations issue exactly one upstream call per `generate` and must
/// not retry on their own.
#[async_trait]
pub trait HookProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Send a prompt and return the full text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<P: HookProvider + ?Sized> HookProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }
}

/// A mock provider for testing.
#[derive(Debug, Default)]
pub struct MockProvider {
    reply: String,
    failure: Option<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    /// Create a new mock provider that replies with empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with the given text.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }

    /// Fail every call with a provider error.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt passed to the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl HookProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        match &self.failure {
            Some(message) => Err(HookError::ProviderError(message.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}
