//! Wire types for the `/completions` endpoint.

use serde::{Deserialize, Serialize};

/// Completion request body.
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
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Sampling temperature (0.0 - 2.0)
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// Completion response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    id: String,
    /// Model that served the request
    #[serde(default)]
    model: String,
    /// Generated completions
    choices: Vec<CompletionChoice>,
    /// Token usage statistics
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

/// A completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionChoice {
    /// Generated text
    text: String,
    /// Index of this choice
    #[serde(default)]
    index: u32,
    /// Reason why generation finished
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionUsage {
    /// Tokens in the prompt
    prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    completion_tokens: u32,
    /// Total tokens used
    total_tokens: u32,
}
