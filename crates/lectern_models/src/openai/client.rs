//! OpenAI completions client.

use crate::openai::{CompletionRequest, CompletionResponse};
use lectern_core::{GenerateRequest, GenerateResponse};
use lectern_error::{HttpError, LecternResult, ModelsError, ModelsErrorKind};
use lectern_interface::LanguageModel;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Base URL of the hosted OpenAI API.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Completion model used when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-instruct";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the OpenAI `/completions` endpoint.
///
/// Any server exposing the same endpoint (vLLM, llama.cpp server, LocalAI)
/// works by pointing `base_url` at it.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiClient {
    /// Creates a client for the hosted API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-3.5-turbo-instruct")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> LecternResult<Self> {
        Self::with_options(api_key, model, DEFAULT_OPENAI_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit base URL and request timeout.
    pub fn with_options(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> LecternResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        let model = model.into();
        let base_url = base_url.into();
        debug!(model = %model, base_url = %base_url, "Creating OpenAI client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            base_url,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url.trim_end_matches('/'))
    }

    /// Sends a raw completion request.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ModelsError> {
        debug!("Sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send completion request");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Completion API returned error");
            return Err(ModelsError::new(ModelsErrorKind::from_status(
                status.as_u16(),
                body,
            )));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse completion response");
            ModelsError::new(ModelsErrorKind::Parse(e.to_string()))
        })?;

        debug!(response_id = %completion.id(), "Received completion");
        Ok(completion)
    }

    /// Converts a Lectern request to the wire format.
    fn convert_request(&self, request: &GenerateRequest) -> Result<CompletionRequest, ModelsError> {
        let model = request.model().clone().unwrap_or_else(|| self.model.clone());
        CompletionRequest::builder()
            .model(model)
            .prompt(request.prompt().as_str())
            .temperature(*request.temperature())
            .max_tokens(*request.max_tokens())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }

    /// Converts the first completion choice to a Lectern response.
    fn convert_response(response: CompletionResponse) -> Result<GenerateResponse, ModelsError> {
        let choice = response.choices().first().ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::Parse(
                "Response contained no choices".to_string(),
            ))
        })?;

        let converted = GenerateResponse::new(choice.text().as_str());
        Ok(match choice.finish_reason() {
            Some(reason) => converted.with_finish_reason(reason.as_str()),
            None => converted,
        })
    }
}

#[async_trait::async_trait]
impl LanguageModel for OpenAiClient {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(prompt_len = request.prompt().len()))]
    async fn generate(&self, request: &GenerateRequest) -> LecternResult<GenerateResponse> {
        let completion_request = self.convert_request(request)?;
        let completion = self.generate_completion(&completion_request).await?;
        Ok(Self::convert_response(completion)?)
    }
}
