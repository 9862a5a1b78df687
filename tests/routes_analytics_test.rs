// ABOUTME: HTTP tests for the analytics and health endpoints
// ABOUTME: Posts client state and checks the derived views returned as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use axum::Router;
use chrono::{Duration, Local, NaiveDate};
use common::{completed_session, done, exercise};
use helpers::axum_test::AxumTestRequest;
use ironlog_core::models::WorkoutSession;
use ironlog_server::config::ServerConfig;
use ironlog_server::resources::ServerResources;
use ironlog_server::routes::build_router;
use serde_json::{json, Value};

fn app() -> Router {
    build_router(Arc::new(ServerResources::new(ServerConfig::default())))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn bench_on(day: NaiveDate, weight: f64) -> WorkoutSession {
    completed_session(day, 50, vec![exercise("ex_bench", vec![done(weight, 8)])])
}

async fn post(path: &str, body: &Value) -> Value {
    let response = AxumTestRequest::post(path).json(body).send(app()).await;
    assert_eq!(response.status(), 200, "POST {path}");
    response.json()
}

#[tokio::test]
async fn test_health_and_readiness() {
    let health: Value = AxumTestRequest::get("/health").send(app()).await.json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "ironlog-server");

    let ready: Value = AxumTestRequest::get("/ready").send(app()).await.json();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["ai_recommendations"], false);
}

#[tokio::test]
async fn test_rule_recommendations_for_empty_week() {
    let body = post(
        "/api/analytics/rule-recommendations",
        &json!({"profile": {"name": "Kari", "goal": "strength"}, "history": []}),
    )
    .await;

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(
        recommendations[1],
        "Tip: Start the week with your heaviest lifts."
    );
}

#[tokio::test]
async fn test_recovery_flags_back_to_back_training() {
    let history = vec![
        bench_on(today() - Duration::days(1), 60.0),
        bench_on(today(), 60.0),
    ];
    let body = post(
        "/api/analytics/recovery",
        &json!({"history": history, "todaysMuscleGroups": ["CHEST", "LEGS"]}),
    )
    .await;

    assert_eq!(body["recovery"].as_array().unwrap().len(), 8);
    assert_eq!(body["recovery"][0]["muscleGroup"], "CHEST");
    assert_eq!(body["recovery"][0]["status"], "fresh");
    assert_eq!(body["recovery"][2]["daysSinceLastTrained"], 999);

    let overtraining = body["overtraining"].as_array().unwrap();
    assert_eq!(overtraining.len(), 1);
    assert_eq!(overtraining[0]["type"], "overtraining");
    assert_eq!(overtraining[0]["muscleGroup"], "CHEST");
    assert_eq!(overtraining[0]["severity"], "high");
    assert!(body["neglected"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_personal_records_and_recent_window() {
    let history = vec![
        bench_on(today() - Duration::days(30), 70.0),
        bench_on(today() - Duration::days(2), 75.0),
    ];
    let body = post(
        "/api/analytics/personal-records",
        &json!({"history": history, "windowDays": 7}),
    )
    .await;

    assert_eq!(body["records"]["ex_bench"]["maxWeight"], 75.0);
    assert_eq!(body["records"]["ex_bench"]["exerciseName"], "Bench Press");
    let recent = body["recent"].as_array().unwrap();
    // Weight and volume were beaten; reps tied the older session
    assert_eq!(recent.len(), 2);
    assert!(recent.iter().all(|r| r["exerciseId"] == "ex_bench"));
}

#[tokio::test]
async fn test_weekly_summary_bundle() {
    let history = vec![bench_on(today(), 60.0)];
    let body = post(
        "/api/analytics/weekly-summary",
        &json!({"profile": {"name": "Kari", "weight": 80.0}, "history": history}),
    )
    .await;

    assert_eq!(body["stats"]["workouts"], 1);
    assert_eq!(body["stats"]["totalMinutes"], 50);
    assert_eq!(body["summary"]["totalWorkouts"], 1);
    assert_eq!(body["summary"]["totalSets"], 1);
    assert_eq!(body["pepTalk"]["title"], "Great start!");
    assert!(body["achievements"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_strength_profile_uses_bodyweight() {
    let history = vec![bench_on(today() - Duration::days(3), 100.0)];
    let body = post(
        "/api/analytics/strength-profile",
        &json!({"profile": {"name": "Kari", "weight": 80.0}, "history": history}),
    )
    .await;

    let lifts = body["lifts"].as_array().unwrap();
    assert_eq!(lifts.len(), 1);
    assert_eq!(lifts[0]["exerciseName"], "Bench Press");
    assert_eq!(lifts[0]["standard"]["level"], "Intermediate");
    assert_eq!(lifts[0]["standard"]["percentile"], 60);
}

#[tokio::test]
async fn test_analytics_rejects_malformed_body() {
    let response = AxumTestRequest::post("/api/analytics/recovery")
        .raw_json("[1, 2")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}
