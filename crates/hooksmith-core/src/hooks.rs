//! Hook request and response types.

use crate::{HookError, Result};
use serde::{Deserialize, Serialize};

/// A request for hooks, as decoded from the wire.
///
/// Either field may be absent or null; use [`HookRequest::validate`] before
/// generating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRequest {
    /// What is being advertised.
    #[serde(default)]
    pub product_description: Option<String>,

    /// Who the ad is for.
    #[serde(default)]
    pub target_audience: Option<String>,
}

/// A request whose two fields are both present and non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidHookRequest<'a> {
    pub product_description: &'a str,
    pub target_audience: &'a str,
}

impl HookRequest {
    /// Create a request from both fields.
    pub fn new(product_description: impl Into<String>, target_audience: impl Into<String>) -> Self {
        Self {
            product_description: Some(product_description.into()),
            target_audience: Some(target_audience.into()),
        }
    }

    /// Check that both fields are present and non-empty.
    ///
    /// Whitespace-only values are accepted.
    pub fn validate(&self) -> Result<ValidHookRequest<'_>> {
        match (
            non_empty(&self.product_description),
            non_empty(&self.target_audience),
        ) {
            (Some(product_description), Some(target_audience)) => Ok(ValidHookRequest {
                product_description,
                target_audience,
            }),
            _ => Err(HookError::MissingField),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Hooks returned for one request, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    pub hooks: Vec<String>,
}

/// Split a provider reply into hooks.
///
/// Each line is trimmed and blank lines are dropped. Order is preserved.
pub fn parse_hooks(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
