// ABOUTME: Route handler for AI-generated coaching recommendations
// ABOUTME: Validates the payload, delegates to the AI service and maps failures to HTTP errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! AI recommendation routes
//!
//! `POST /api/generate-recommendations` takes `{profile, history, exercises}`
//! and answers `{recommendations}`. `OPTIONS` answers 200 with an empty body
//! and any other method is rejected with 405.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use ironlog_core::models::{
    default_catalog, ExerciseCatalog, ExerciseDefinition, UserProfile, WorkoutSession,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::{AppError, ErrorCode};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;

/// Request body for recommendation generation
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRecommendationsRequest {
    /// Athlete profile, required
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Workout history
    #[serde(default)]
    pub history: Vec<WorkoutSession>,
    /// Exercise catalog used to resolve history entries
    #[serde(default)]
    pub exercises: Vec<ExerciseDefinition>,
}

/// Response body carrying the generated recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    /// Recommendation strings, typically 3-4 with emoji
    pub recommendations: Vec<String>,
}

/// Recommendation routes implementation
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the recommendation routes with their CORS policy
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let cors = setup_cors(&resources.config.cors);
        Router::new()
            .route(
                "/api/generate-recommendations",
                post(Self::handle_generate)
                    .options(Self::handle_options)
                    .fallback(Self::handle_method_not_allowed),
            )
            .layer(cors)
            .with_state(resources)
    }

    /// Handle POST /api/generate-recommendations
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<GenerateRecommendationsRequest>, JsonRejection>,
    ) -> Result<Json<RecommendationsResponse>, AppError> {
        let Json(request) = payload.map_err(|e| {
            AppError::invalid_input(format!("Invalid request body: {}", e.body_text()))
        })?;

        let profile = request
            .profile
            .ok_or_else(|| AppError::missing_field("Profile is required"))?;

        let service = resources
            .recommendations
            .as_ref()
            .ok_or_else(|| AppError::config("API key not configured"))?;

        let definitions = if request.exercises.is_empty() {
            default_catalog()
        } else {
            request.exercises
        };
        let catalog = ExerciseCatalog::new(&definitions);

        info!(
            goal = %profile.goal,
            sessions = request.history.len(),
            "generating AI recommendations"
        );
        let recommendations = service
            .generate(&profile, &request.history, &catalog)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to generate recommendations");
                AppError::new(ErrorCode::GenerationFailed, "Failed to generate recommendations")
                    .with_details(e.message)
            })?;

        Ok(Json(RecommendationsResponse { recommendations }))
    }

    /// Handle OPTIONS /api/generate-recommendations
    async fn handle_options() -> StatusCode {
        StatusCode::OK
    }

    /// Reject every other method
    async fn handle_method_not_allowed() -> AppError {
        AppError::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }
}
