//! Trait definitions for external collaborators.

use async_trait::async_trait;
use lectern_core::{GenerateRequest, GenerateResponse};
use lectern_error::{LecternResult, ModelsError, ModelsErrorKind};

/// Core trait that every language model backend implements.
///
/// Implementations own transport concerns (timeouts, authentication). They
/// must not retry on their own; retry policy belongs to the caller.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a completion for a rendered prompt.
    async fn generate(&self, req: &GenerateRequest) -> LecternResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gpt-3.5-turbo-instruct").
    fn model_name(&self) -> &str;

    /// Complete `prompt` and return only the generated text.
    async fn complete(&self, prompt: &str, temperature: Option<f32>) -> LecternResult<String> {
        let request = GenerateRequest::builder()
            .prompt(prompt)
            .temperature(temperature)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;
        let response = self.generate(&request).await?;
        Ok(response.text().clone())
    }
}

/// A reference source that maps a query to a block of free text.
///
/// Lookups are best effort: an empty string means the source had nothing for
/// the query. Errors are reserved for sources that could not be reached.
#[async_trait]
pub trait ResearchSource: Send + Sync {
    /// Search the source and return its summary text for `query`.
    async fn search(&self, query: &str) -> LecternResult<String>;

    /// Source name for logging (e.g., "wikipedia").
    fn source_name(&self) -> &'static str;
}

#[async_trait]
impl<T: LanguageModel + ?Sized> LanguageModel for Box<T> {
    async fn generate(&self, req: &GenerateRequest) -> LecternResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ResearchSource + ?Sized> ResearchSource for Box<T> {
    async fn search(&self, query: &str) -> LecternResult<String> {
        (**self).search(query).await
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}
