// ABOUTME: Stub LLM provider returning canned replies for route and service tests
// ABOUTME: Records the requests it receives so tests can inspect prompts and flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ironlog_server::errors::{AppError, ErrorCode};
use ironlog_server::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};

enum Reply {
    Text(String),
    Failure(String),
}

/// Provider that answers every request with the same canned reply
pub struct StubProvider {
    reply: Reply,
    capabilities: LlmCapabilities,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    /// Reply with `text` as the model output
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.into()),
            capabilities: LlmCapabilities::structured_output(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Reply with `text`, advertising plain text capabilities only
    pub fn text_only(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.into()),
            capabilities: LlmCapabilities::text_only(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Fail every request with an upstream error carrying `message`
    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Failure(message.into()),
            capabilities: LlmCapabilities::structured_output(),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of the first message of the last request
    pub fn last_prompt(&self) -> String {
        self.requests()
            .last()
            .and_then(|r| r.messages.first())
            .map(|m| m.content.clone())
            .expect("no request recorded")
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(ChatResponse {
                content: text.clone(),
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "stub-model".to_owned()),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            Reply::Failure(message) => Err(AppError::new(
                ErrorCode::ExternalServiceError,
                message.clone(),
            )),
        }
    }
}
