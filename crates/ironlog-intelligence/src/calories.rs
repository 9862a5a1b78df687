// ABOUTME: Calorie estimation for a workout session from MET values and duration
// ABOUTME: Coarse session-level estimate, not per-exercise energy accounting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimator
//!
//! `calories = round(avg_met × bodyweight_kg × hours)`, where `avg_met` is the
//! mean MET over the session's exercise instances that resolve against the
//! catalog (5.0 when none do).

use ironlog_core::constants::met;
use ironlog_core::models::{ExerciseCatalog, WorkoutSession};
use tracing::debug;

/// Mean MET over the catalog-resolved exercises of a session
#[must_use]
pub fn average_met(session: &WorkoutSession, catalog: &ExerciseCatalog<'_>) -> f64 {
    let mut total = 0.0;
    let mut matched = 0_u32;
    for exercise in &session.exercises {
        match catalog.find(&exercise.exercise_definition_id) {
            Some(definition) => {
                total += definition.exercise_type.met_value();
                matched += 1;
            }
            None => debug!(
                exercise_id = %exercise.exercise_definition_id,
                "skipping unknown exercise in calorie estimate"
            ),
        }
    }
    if matched == 0 {
        met::FALLBACK
    } else {
        total / f64::from(matched)
    }
}

/// Estimated kilocalories burned during a finished session
///
/// Returns 0 when the bodyweight is absent or zero, or when the session has no
/// end time. Sessions whose end precedes their start count as zero minutes.
#[must_use]
pub fn estimate_calories(
    session: &WorkoutSession,
    catalog: &ExerciseCatalog<'_>,
    user_weight_kg: Option<f64>,
) -> u32 {
    let Some(weight) = user_weight_kg.filter(|w| *w > 0.0) else {
        return 0;
    };
    let Some(minutes) = session.duration_minutes() else {
        return 0;
    };

    let calories = average_met(session, catalog) * weight * (minutes / 60.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = calories.round().max(0.0) as u32;
    rounded
}
