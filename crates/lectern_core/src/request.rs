//! Request and response types for language model completion.

use serde::{Deserialize, Serialize};

/// A single-prompt completion request.
///
/// # Examples
///
/// ```
/// use lectern_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("Give me some book titles about tides")
///     .temperature(Some(0.9_f32))
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.temperature(), Some(0.9));
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Fully rendered prompt text
    prompt: String,
    /// Model identifier; the client default is used when `None`
    #[builder(default)]
    model: Option<String>,
    /// Sampling temperature (0.0 to 2.0)
    #[builder(default)]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Create a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Text returned by a language model.
///
/// # Examples
///
/// ```
/// use lectern_core::GenerateResponse;
///
/// let response = GenerateResponse::new("Mars Bound\nInto the Void");
/// assert_eq!(response.text(), "Mars Bound\nInto the Void");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Generated text
    text: String,
    /// Why generation stopped, when the provider reports it
    finish_reason: Option<String>,
}

impl GenerateResponse {
    /// Create a response with no finish reason.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
        }
    }

    /// Attach the provider's finish reason.
    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }
}
