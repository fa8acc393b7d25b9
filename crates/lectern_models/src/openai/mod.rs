//! OpenAI completions API client.

mod client;
mod dto;

pub use client::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, OpenAiClient};
pub use dto::{
    CompletionChoice, CompletionRequest, CompletionRequestBuilder, CompletionResponse,
    CompletionUsage,
};
