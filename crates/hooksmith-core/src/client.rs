//! Client side of the hook endpoint.

use crate::{HookError, HookRequest, HookResponse, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

/// Path of the hook generation endpoint.
pub const GENERATE_HOOKS_PATH: &str = "/api/generate-hooks";

/// Anything that can turn a hook request into hooks for the form.
#[async_trait]
pub trait HookClient: Send + Sync {
    async fn generate_hooks(&self, request: &HookRequest) -> Result<HookResponse>;
}

/// Calls a running hook server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpHookClient {
    client: Client,
    endpoint: String,
}

impl HttpHookClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client.
    pub fn with_client(client: Client, base_url: impl AsRef<str>) -> Self {
        let endpoint = format!(
            "{}{}",
            base_url.as_ref().trim_end_matches('/'),
            GENERATE_HOOKS_PATH
        );
        Self { client, endpoint }
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HookClient for HttpHookClient {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn generate_hooks(&self, request: &HookRequest) -> Result<HookResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| HookError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Hook server answered {}", status);
            return Err(HookError::RequestFailed(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HookError::NetworkError(e.to_string()))?;

        Ok(serde_json::from_slice(&body)?)
    }
}
