// ABOUTME: Benchmark fixtures generating deterministic workout histories
// ABOUTME: Produces sessions over the default catalog for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating realistic workout data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use ironlog_server::models::{
    ExerciseDefinition, WorkoutExercise, WorkoutSession, WorkoutSet,
};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryBatchSize {
    /// One month of training
    Month,
    /// One year of training
    Year,
    /// Several years of daily logging
    Archive,
}

impl HistoryBatchSize {
    #[must_use]
    pub const fn sessions(self) -> usize {
        match self {
            Self::Month => 16,
            Self::Year => 200,
            Self::Archive => 1_500,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
            Self::Archive => "archive",
        }
    }
}

/// Generate a completed history ending on `last_day`, newest last
///
/// Each session holds four exercises picked round-robin from `catalog`, each
/// with three completed sets whose load creeps up over time.
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_history(
    size: HistoryBatchSize,
    catalog: &[ExerciseDefinition],
    last_day: NaiveDate,
) -> Vec<WorkoutSession> {
    let count = size.sessions();
    (0..count)
        .map(|index| {
            let date = last_day - Duration::days((count - index) as i64 * 2 / 3);
            let start = Utc.from_utc_datetime(&date.and_hms_opt(17, 0, 0).unwrap_or_default());
            let minutes = 35 + (index * 13) % 60;

            (0..4)
                .map(|slot| {
                    let definition = &catalog[(index * 4 + slot) % catalog.len()];
                    let weight = 20.0 + ((index * 7 + slot * 11) % 80) as f64;
                    let reps = 5 + ((index + slot) % 8) as u32;
                    (0..3).fold(WorkoutExercise::new(definition.id.clone()), |exercise, _| {
                        exercise.with_set(WorkoutSet::new(Some(weight), Some(reps)).completed())
                    })
                })
                .fold(
                    WorkoutSession::new(format!("Session {index}"), date, start),
                    WorkoutSession::with_exercise,
                )
                .completed_at(start + Duration::minutes(minutes as i64))
        })
        .collect()
}
