//! MediaWiki action API response shapes (only the fields we read).

use serde::Deserialize;
use std::collections::HashMap;

/// Error object MediaWiki returns (with HTTP 200) for rejected requests.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) info: String,
}

/// Responses that may carry an `error` object instead of results.
pub(crate) trait ApiResponse {
    fn api_error(&self) -> Option<&ApiError>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
    #[serde(default)]
    pub(crate) query: Option<SearchQuery>,
}

impl ApiResponse for SearchResponse {
    fn api_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub(crate) title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractResponse {
    #[serde(default)]
    pub(crate) error: Option<ApiError>,
    #[serde(default)]
    pub(crate) query: Option<ExtractQuery>,
}

impl ApiResponse for ExtractResponse {
    fn api_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractQuery {
    #[serde(default)]
    pub(crate) pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractPage {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) extract: Option<String>,
}
