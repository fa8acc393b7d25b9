//! Scripted collaborators for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use lectern_core::{GenerateRequest, GenerateResponse};
use lectern_error::{HttpError, LecternError, LecternResult};
use lectern_interface::{LanguageModel, ResearchSource};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Driver that answers from a queue and records every request it receives.
///
/// Clones share the same queue and log, so a test can keep a handle after
/// moving the driver into a pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    replies: Arc<Mutex<VecDeque<LecternResult<String>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.fail_with(HttpError::new(message))
    }

    pub fn fail_with(self, err: impl Into<LecternError>) -> Self {
        self.replies.lock().unwrap().push_back(Err(err.into()));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|req| req.prompt().clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LanguageModel for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> LecternResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(GenerateResponse::new(text)),
            Some(Err(err)) => Err(err),
            None => Err(HttpError::new("no scripted reply left").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-v1"
    }
}

/// Research source with a fixed answer that records its queries.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    answer: Option<String>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StaticSource {
    /// Source that always answers `text`.
    pub fn answering(text: &str) -> Self {
        Self {
            answer: Some(text.to_string()),
            queries: Arc::default(),
        }
    }

    /// Source that cannot be reached.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResearchSource for StaticSource {
    async fn search(&self, query: &str) -> LecternResult<String> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.answer {
            Some(text) => Ok(text.clone()),
            None => Err(HttpError::new("connection refused").into()),
        }
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
