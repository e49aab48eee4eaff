//! # Hooksmith AI
//!
//! AI provider implementations for hooksmith.
//!
//! - **Gemini**: Google Gemini models through the `generateContent` API
//!
//! ## Example
//!
//! ```rust,ignore
//! use hooksmith_ai::GeminiProvider;
//! use hooksmith_core::HookService;
//!
//! // One-line initialization from environment
//! let provider = GeminiProvider::from_env()?;
//! let service = HookService::new(provider);
//! ```

pub mod gemini;

pub use gemini::GeminiProvider;

/// Re-export core types for convenience.
pub use hooksmith_core::{HookError, HookProvider, ProviderConfig, Result};

/// Create a Gemini provider from the environment with an explicit model.
///
/// # Example
///
/// ```rust,ignore
/// let provider = hooksmith_ai::gemini("gemini-1.5-pro")?;
/// ```
pub fn gemini(model: &str) -> Result<GeminiProvider> {
    let config = ProviderConfig::from_env()?.with_model(model);
    GeminiProvider::new(config)
}
