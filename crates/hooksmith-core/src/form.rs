//! Hook request form state.
//!
//! Front ends drive a [`HookForm`]: fill the two fields, submit through a
//! [`HookClient`], then show `hooks` or `error` and offer a copy action per
//! hook.

use crate::error::FORM_ERROR_MESSAGE;
use crate::{HookClient, HookRequest, HookResponse, Result};
use tracing::{debug, warn};

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Generate Hooks";

/// Label of the submit control while a request is in flight.
pub const LOADING_LABEL: &str = "Brewing your brilliant hooks...";

/// Notice shown after a hook is copied.
pub const COPIED_NOTICE: &str = "Hook copied to clipboard!";

/// Where the copy action writes to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Where the form is in its `idle -> loading -> (succeeded | failed)` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Transient state of the hook request form.
#[derive(Debug, Clone, Default)]
pub struct HookForm {
    pub product_description: String,
    pub target_audience: String,
    pub hooks: Vec<String>,
    pub is_loading: bool,
    pub error: String,
    /// The last finished request succeeded, even if it returned no hooks.
    pub succeeded: bool,
}

impl HookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both fields filled and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.product_description.is_empty() && !self.target_audience.is_empty()
    }

    pub fn status(&self) -> FormStatus {
        if self.is_loading {
            FormStatus::Loading
        } else if !self.error.is_empty() {
            FormStatus::Failed
        } else if self.succeeded {
            FormStatus::Succeeded
        } else {
            FormStatus::Idle
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` and leaves the form untouched when submission is not
    /// allowed. Otherwise clears the previous error and hooks, marks the form
    /// as loading and returns the request to send.
    pub fn begin_submit(&mut self) -> Option<HookRequest> {
        if !self.can_submit() {
            return None;
        }

        self.error.clear();
        self.hooks.clear();
        self.succeeded = false;
        self.is_loading = true;

        Some(HookRequest::new(
            self.product_description.clone(),
            self.target_audience.clone(),
        ))
    }

    /// Record the outcome of the request started by [`HookForm::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<HookResponse>) {
        match result {
            Ok(response) => {
                debug!("Received {} hooks", response.hooks.len());
                self.hooks = response.hooks;
                self.succeeded = true;
            }
            Err(e) => {
                warn!("Hook request failed: {}", e);
                self.error = FORM_ERROR_MESSAGE.to_string();
            }
        }
        self.is_loading = false;
    }

    /// Submit once through `client`. Returns false if submission was not allowed.
    pub async fn submit<C: HookClient + ?Sized>(&mut self, client: &C) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };

        let result = client.generate_hooks(&request).await;
        self.finish_submit(result);
        true
    }

    /// Copy hook `index` without its angle label.
    ///
    /// Returns the copied text, or `None` if there is no such hook.
    pub fn copy<B: Clipboard + ?Sized>(&self, index: usize, clipboard: &mut B) -> Result<Option<&str>> {
        let Some(hook) = self.hooks.get(index) else {
            return Ok(None);
        };

        let text = copy_text(hook);
        clipboard.write_text(text)?;
        Ok(Some(text))
    }
}

/// Text the copy action writes for a displayed hook.
///
/// Everything up to and including the first `:` is dropped and the rest is
/// trimmed. A line without `:` is copied whole (trimmed).
pub fn copy_text(line: &str) -> &str {
    let start = line.find(':').map_or(0, |idx| idx + 1);
    line[start..].trim()
}
