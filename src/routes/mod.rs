// ABOUTME: Route module organization for the ironlog HTTP endpoints
// ABOUTME: Assembles health, AI recommendation and analytics routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the ironlog server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to services or the analytics engine.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Deterministic analytics endpoints
pub mod analytics;
/// Health check and readiness routes
pub mod health;
/// AI recommendation endpoint
pub mod recommendations;

pub use analytics::{AnalyticsRequest, AnalyticsRoutes};
pub use health::HealthRoutes;
pub use recommendations::{
    GenerateRecommendationsRequest, RecommendationRoutes, RecommendationsResponse,
};

/// Build the complete application router with request tracing
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AnalyticsRoutes::routes(&resources))
        .merge(RecommendationRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
