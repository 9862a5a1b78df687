// ABOUTME: Route handlers exposing the deterministic training analytics over HTTP
// ABOUTME: Thin wrappers around recommendations, recovery, records, weekly and strength views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics routes
//!
//! Every endpoint takes the client's in-memory state (`profile`, `history`,
//! `exercises`) and returns values derived by `ironlog-intelligence`. When
//! `exercises` is empty the default catalog is used.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use ironlog_core::models::{
    default_catalog, ExerciseCatalog, ExerciseDefinition, MuscleGroup, UserProfile,
    WorkoutSession,
};
use ironlog_intelligence::{
    achievements, check_overtraining_risk, compute_records, compute_recovery,
    find_neglected_groups, generate_recommendations, pep_talk, recent_records, strength_profile,
    weekly_stats, weekly_summary, Achievement, MuscleGroupRecovery, PepTalk, PersonalRecord,
    RecentRecord, RecoveryWarning, StrengthProfileEntry, WeeklyStats, WeeklySummary,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;

/// Client state shared by every analytics request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    /// Athlete profile; defaults apply when omitted
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Workout history
    #[serde(default)]
    pub history: Vec<WorkoutSession>,
    /// Exercise catalog
    #[serde(default)]
    pub exercises: Vec<ExerciseDefinition>,
    /// Groups planned for today, checked against yesterday's training
    #[serde(default)]
    pub todays_muscle_groups: Vec<MuscleGroup>,
    /// Look-back window for recent records, in days
    #[serde(default)]
    pub window_days: Option<i64>,
}

impl AnalyticsRequest {
    fn definitions(&self) -> Vec<ExerciseDefinition> {
        if self.exercises.is_empty() {
            default_catalog()
        } else {
            self.exercises.clone()
        }
    }

    fn profile(&self) -> UserProfile {
        self.profile.clone().unwrap_or_default()
    }
}

/// Rule-based recommendation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRecommendationsResponse {
    /// At most three suggestions
    pub recommendations: Vec<String>,
}

/// Recovery response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryResponse {
    /// One entry per muscle group
    pub recovery: Vec<MuscleGroupRecovery>,
    /// Groups untouched for too long
    pub neglected: Vec<RecoveryWarning>,
    /// Planned groups that were also trained yesterday
    pub overtraining: Vec<RecoveryWarning>,
}

/// Personal records response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecordsResponse {
    /// Records keyed by exercise definition id
    pub records: BTreeMap<String, PersonalRecord>,
    /// Records set within the window, most recent first
    pub recent: Vec<RecentRecord>,
}

/// Weekly summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummaryResponse {
    /// ISO-week header statistics
    pub stats: WeeklyStats,
    /// Rolling seven-day summary
    pub summary: WeeklySummary,
    /// Motivational message for the summary
    pub pep_talk: PepTalk,
    /// Unlocked achievements
    pub achievements: Vec<Achievement>,
}

/// Strength profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthProfileResponse {
    /// Standard lifts the athlete has logged
    pub lifts: Vec<StrengthProfileEntry>,
}

/// Analytics routes implementation
pub struct AnalyticsRoutes;

type Payload = Result<Json<AnalyticsRequest>, JsonRejection>;

fn into_request(payload: Payload) -> Result<AnalyticsRequest, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|e| AppError::invalid_input(format!("Invalid request body: {}", e.body_text())))
}

impl AnalyticsRoutes {
    /// Create all analytics routes with their CORS policy
    pub fn routes(resources: &Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/analytics/rule-recommendations",
                post(Self::handle_rule_recommendations),
            )
            .route("/api/analytics/recovery", post(Self::handle_recovery))
            .route(
                "/api/analytics/personal-records",
                post(Self::handle_personal_records),
            )
            .route(
                "/api/analytics/weekly-summary",
                post(Self::handle_weekly_summary),
            )
            .route(
                "/api/analytics/strength-profile",
                post(Self::handle_strength_profile),
            )
            .layer(setup_cors(&resources.config.cors))
    }

    async fn handle_rule_recommendations(
        payload: Payload,
    ) -> Result<Json<RuleRecommendationsResponse>, AppError> {
        let request = into_request(payload)?;
        let definitions = request.definitions();
        let catalog = ExerciseCatalog::new(&definitions);

        Ok(Json(RuleRecommendationsResponse {
            recommendations: generate_recommendations(
                &request.profile(),
                &request.history,
                &catalog,
            ),
        }))
    }

    async fn handle_recovery(payload: Payload) -> Result<Json<RecoveryResponse>, AppError> {
        let request = into_request(payload)?;
        let definitions = request.definitions();
        let catalog = ExerciseCatalog::new(&definitions);

        let recovery = compute_recovery(&request.history, &catalog);
        let neglected = find_neglected_groups(&recovery);
        let overtraining =
            check_overtraining_risk(&request.history, &catalog, &request.todays_muscle_groups);

        Ok(Json(RecoveryResponse {
            recovery,
            neglected,
            overtraining,
        }))
    }

    async fn handle_personal_records(
        payload: Payload,
    ) -> Result<Json<PersonalRecordsResponse>, AppError> {
        let request = into_request(payload)?;
        let definitions = request.definitions();
        let catalog = ExerciseCatalog::new(&definitions);

        Ok(Json(PersonalRecordsResponse {
            records: compute_records(&request.history, &catalog),
            recent: recent_records(&request.history, &catalog, request.window_days),
        }))
    }

    async fn handle_weekly_summary(
        payload: Payload,
    ) -> Result<Json<WeeklySummaryResponse>, AppError> {
        let request = into_request(payload)?;
        let definitions = request.definitions();
        let catalog = ExerciseCatalog::new(&definitions);
        let profile = request.profile();

        let summary = weekly_summary(&request.history, &catalog);
        Ok(Json(WeeklySummaryResponse {
            stats: weekly_stats(&request.history, &catalog, profile.bodyweight()),
            pep_talk: pep_talk(&summary),
            achievements: achievements(&summary),
            summary,
        }))
    }

    async fn handle_strength_profile(
        payload: Payload,
    ) -> Result<Json<StrengthProfileResponse>, AppError> {
        let request = into_request(payload)?;
        let definitions = request.definitions();
        let catalog = ExerciseCatalog::new(&definitions);

        Ok(Json(StrengthProfileResponse {
            lifts: strength_profile(&request.history, &catalog, &request.profile()),
        }))
    }
}
