// ABOUTME: AI-backed coaching recommendations generated through an LLM provider
// ABOUTME: Builds the coaching prompt, calls the provider once and parses the JSON reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AI Recommendation Service
//!
//! A single request maps to a single provider call. There is no retry, no
//! timeout policy and no rule-based fallback: any failure surfaces as an
//! [`AppError`] for the HTTP layer to render.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use ironlog_core::models::{ExerciseCatalog, UserProfile, WorkoutSession};
use ironlog_intelligence::calendar;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::errors::{AppError, AppResult};
use crate::llm::{build_coaching_prompt, ChatMessage, ChatRequest, LlmProvider};

/// Reply shape requested from the model
#[derive(Debug, Deserialize)]
struct RecommendationReply {
    recommendations: Vec<String>,
}

/// Generates coaching recommendations through an [`LlmProvider`]
#[derive(Clone)]
pub struct AiRecommendationService {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
    window_days: i64,
}

impl fmt::Debug for AiRecommendationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiRecommendationService")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("window_days", &self.window_days)
            .finish()
    }
}

impl AiRecommendationService {
    /// Create a service embedding `window_days` of history in each prompt
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, window_days: i64) -> Self {
        Self {
            provider,
            model: None,
            window_days,
        }
    }

    /// Override the provider's default model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Name of the underlying provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Generate recommendations for `profile` as of today
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails or the reply is not the
    /// expected JSON shape
    pub async fn generate(
        &self,
        profile: &UserProfile,
        history: &[WorkoutSession],
        catalog: &ExerciseCatalog<'_>,
    ) -> AppResult<Vec<String>> {
        self.generate_at(profile, history, catalog, calendar::today())
            .await
    }

    /// Generate recommendations for `profile` as of `today`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails or the reply is not the
    /// expected JSON shape
    #[instrument(skip_all, fields(sessions = history.len()))]
    pub async fn generate_at(
        &self,
        profile: &UserProfile,
        history: &[WorkoutSession],
        catalog: &ExerciseCatalog<'_>,
        today: NaiveDate,
    ) -> AppResult<Vec<String>> {
        let prompt = build_coaching_prompt(profile, history, catalog, today, self.window_days);
        let mut request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        if self.provider.capabilities().supports_json_mode() {
            request = request.with_json_mode();
        }
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        debug!("requesting coaching recommendations");
        let response = self.provider.complete(&request).await.map_err(|e| {
            error!(error = %e, "recommendation generation failed");
            e
        })?;
        debug!(model = %response.model, "provider response received");

        parse_recommendations(&response.content)
    }
}

/// Parse a model reply into its list of recommendations
///
/// Accepts `{"recommendations": [...]}`, optionally wrapped in a Markdown code
/// fence or in a top-level array (the first element is used).
///
/// # Errors
///
/// Returns an error if the text is not JSON or the `recommendations` array of
/// strings is missing
pub fn parse_recommendations(text: &str) -> AppResult<Vec<String>> {
    let mut parsed: Value = serde_json::from_str(strip_code_fence(text))?;

    if let Value::Array(items) = parsed {
        warn!("model replied with an array, using its first element");
        parsed = items.into_iter().next().unwrap_or(Value::Null);
    }

    let reply: RecommendationReply = serde_json::from_value(parsed).map_err(|e| {
        AppError::external_service("AI", "Invalid response format from AI").with_source(e)
    })?;
    Ok(reply.recommendations)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_suffix("```").unwrap_or(body);
    // Drop the language tag on the opening fence line
    match body.split_once('\n') {
        Some((tag, rest)) if tag.trim().chars().all(char::is_alphanumeric) => rest.trim(),
        _ => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn test_parse_array_wrapped_reply() {
        let parsed = parse_recommendations(r#"[{"recommendations": ["a", "b"]}]"#).unwrap();
        assert_eq!(parsed, vec!["a", "b"]);
    }
}
