// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds dates, sets, exercises and sessions against the default catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog_server`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use ironlog_server::models::{
    default_catalog, ExerciseDefinition, ExerciseType, MuscleGroup, WorkoutExercise,
    WorkoutSession, WorkoutSet,
};

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Noon UTC on the given date
pub fn noon(on: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&on.and_hms_opt(12, 0, 0).unwrap())
}

/// The default exercise catalog
pub fn catalog() -> Vec<ExerciseDefinition> {
    default_catalog()
}

/// A minimal catalog used by the calorie and recovery scenarios
pub fn small_catalog() -> Vec<ExerciseDefinition> {
    vec![
        ExerciseDefinition::new("w1", "Weighted Row", MuscleGroup::Back, ExerciseType::Weighted),
        ExerciseDefinition::new("c1", "Rower", MuscleGroup::Cardio, ExerciseType::Cardio),
        ExerciseDefinition::new("b1", "Push-up", MuscleGroup::Chest, ExerciseType::Bodyweight),
        ExerciseDefinition::new("d1", "Plank", MuscleGroup::Core, ExerciseType::Duration),
    ]
}

/// A completed set
pub fn done(weight: f64, reps: u32) -> WorkoutSet {
    WorkoutSet::new(Some(weight), Some(reps)).completed()
}

/// An exercise instance with the given sets
pub fn exercise(definition_id: &str, sets: Vec<WorkoutSet>) -> WorkoutExercise {
    sets.into_iter()
        .fold(WorkoutExercise::new(definition_id), WorkoutExercise::with_set)
}

/// A completed session of `minutes` on `on`
pub fn completed_session(
    on: NaiveDate,
    minutes: i64,
    exercises: Vec<WorkoutExercise>,
) -> WorkoutSession {
    let start = noon(on);
    exercises
        .into_iter()
        .fold(WorkoutSession::new("Session", on, start), WorkoutSession::with_exercise)
        .completed_at(start + Duration::minutes(minutes))
}

/// An active session on `on`
pub fn active_session(on: NaiveDate, exercises: Vec<WorkoutExercise>) -> WorkoutSession {
    exercises
        .into_iter()
        .fold(WorkoutSession::new("Session", on, noon(on)), WorkoutSession::with_exercise)
}
