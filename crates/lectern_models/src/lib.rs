//! Language model and research source clients for Lectern.
//!
//! Each client is behind its own feature flag, both enabled by default.
//!
//! # Available Clients
//!
//! - **OpenAI** completions API, or any server exposing the same
//!   `/completions` endpoint - `openai` feature
//! - **Wikipedia** via the MediaWiki action API - `wikipedia` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(all(feature = "openai", feature = "wikipedia"))]
//! # {
//! use lectern_interface::{LanguageModel, ResearchSource};
//! use lectern_models::{OpenAiClient, WikipediaClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new("sk-...", "gpt-3.5-turbo-instruct")?;
//! let titles = client.complete("Give me some book titles about owls", Some(0.9)).await?;
//!
//! let wiki = WikipediaClient::new()?;
//! let research = wiki.search("owls").await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "wikipedia")]
mod wikipedia;

#[cfg(feature = "openai")]
pub use openai::{
    CompletionChoice, CompletionRequest, CompletionRequestBuilder, CompletionResponse,
    CompletionUsage, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, OpenAiClient,
};

#[cfg(feature = "wikipedia")]
pub use wikipedia::{
    DEFAULT_MAX_CHARS, DEFAULT_TOP_K_RESULTS, MAX_QUERY_CHARS, WikipediaClient,
    format_summaries,
};
