// ABOUTME: Shared server state handed to every route group
// ABOUTME: Holds the configuration and the optional AI recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::services::AiRecommendationService;

/// Resources shared across request handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// AI recommendation service, absent when no API key is configured
    pub recommendations: Option<AiRecommendationService>,
}

impl ServerResources {
    /// Build resources from configuration, wiring Gemini when a key is present
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let recommendations = config.ai.gemini_api_key.as_ref().map(|key| {
            let provider = GeminiProvider::new(key.clone())
                .with_default_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone());
            info!(model = %config.ai.model, "AI recommendations enabled");
            AiRecommendationService::new(Arc::new(provider), config.ai.history_window_days)
        });
        if recommendations.is_none() {
            warn!("GEMINI_API_KEY not set; AI recommendation requests will fail");
        }

        Self {
            config: Arc::new(config),
            recommendations,
        }
    }

    /// Build resources around an explicit provider
    #[must_use]
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let window_days = config.ai.history_window_days;
        Self {
            config: Arc::new(config),
            recommendations: Some(AiRecommendationService::new(provider, window_days)),
        }
    }
}
