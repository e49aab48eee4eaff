//! Hook Service - turns a hook request into hooks via one provider call.

use crate::{build_prompt, parse_hooks, HookProvider, HookRequest, HookResponse, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Generates hooks for validated requests.
///
/// The service holds no per-request state; wrap it in an `Arc` and share it
/// across handlers.
///
/// # Example
///
/// ```rust,ignore
/// use hooksmith_core::{HookRequest, HookService};
/// use hooksmith_ai::GeminiProvider;
///
/// let service = HookService::new(GeminiProvider::from_env()?);
/// let response = service
///     .generate(&HookRequest::new("An online sourdough baking course", "busy moms"))
///     .await?;
/// ```
pub struct HookService<P: HookProvider> {
    provider: Arc<P>,
}

impl<P: HookProvider> HookService<P> {
    /// Create a new service with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Validate the request, call the provider once and parse its reply.
    ///
    /// Fails with [`crate::HookError::MissingField`] before any provider call
    /// when a field is absent or empty.
    #[instrument(skip(self, request), fields(provider = %self.provider.name()))]
    pub async fn generate(&self, request: &HookRequest) -> Result<HookResponse> {
        let valid = request.validate()?;
        let prompt = build_prompt(valid.product_description, valid.target_audience);
        debug!("Built prompt of {} bytes", prompt.len());

        let text = self.provider.generate(&prompt).await.map_err(|e| {
            error!("Hook generation failed: {}", e);
            e
        })?;

        let hooks = parse_hooks(&text);
        info!("Generated {} hooks", hooks.len());

        Ok(HookResponse { hooks })
    }
}
