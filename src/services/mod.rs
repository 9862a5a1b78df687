// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Hosts the AI recommendation service behind the recommendation endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin and delegate to the services here.

/// LLM-backed coaching recommendations
pub mod ai_recommendations;

pub use ai_recommendations::{parse_recommendations, AiRecommendationService};
