//! # Hooksmith Core
//!
//! Core library for generating marketing hooks and headlines with an AI provider.
//!
//! This crate provides the request/response types, the prompt template,
//! the hook service that talks to a provider, and the client-side form state.
//!
//! ## Features
//!
//! - Validation of hook requests
//! - Fixed copywriting prompt template
//! - Line-based parsing of provider replies
//! - Extensible provider trait for AI backends
//! - Form state and copy-to-clipboard rule for front ends
//!
//! ## Example
//!
//! ```rust,ignore
//! use hooksmith_core::{HookRequest, HookService};
//!
//! let service = HookService::new(provider);
//! let request = HookRequest::new("An online sourdough baking course", "busy moms");
//! let response = service.generate(&request).await?;
//! ```

pub mod error;
pub mod provider;
pub mod prompt;
pub mod hooks;
pub mod service;
pub mod config;
pub mod client;
pub mod form;

pub use error::{HookError, Result};
pub use provider::{HookProvider, MockProvider, ProviderConfig};
pub use prompt::build_prompt;
pub use hooks::{parse_hooks, HookRequest, HookResponse, ValidHookRequest};
pub use service::HookService;
pub use config::HookConfig;
pub use client::{HookClient, HttpHookClient};
pub use form::{copy_text, Clipboard, FormStatus, HookForm};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        HookRequest, HookResponse, HookService,
        HookProvider, ProviderConfig,
        HookClient, HookForm,
        HookError, Result,
    };
}
