// ABOUTME: Weekly statistics, motivational pep talks and achievement badges
// ABOUTME: Covers the calendar-week header stats and the rolling seven-day summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use ironlog_core::constants::weekly::{
    CONSISTENT_WORKOUTS, ELITE_SETS, ELITE_WORKOUTS, GREAT_SETS, GREAT_WORKOUTS,
    HEAVY_VOLUME_KG, LONG_WORKOUT_MINUTES, MODERATE_VOLUME_KG, SUMMARY_WINDOW_DAYS,
    VARIETY_EXERCISES,
};
use ironlog_core::models::{ExerciseCatalog, MuscleGroup, WorkoutSession};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::calories::estimate_calories;

/// Header statistics for the current ISO week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// Sessions dated this week, any status
    pub workouts: usize,
    /// Minutes across finished sessions, rounded
    pub total_minutes: u32,
    /// Estimated kilocalories, 0 without a bodyweight
    pub total_calories: u32,
}

/// Statistics for the current week as of today
#[must_use]
pub fn weekly_stats(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    user_weight_kg: Option<f64>,
) -> WeeklyStats {
    weekly_stats_at(history, catalog, user_weight_kg, calendar::today())
}

/// Statistics for the ISO week containing `today`
#[must_use]
pub fn weekly_stats_at(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    user_weight_kg: Option<f64>,
    today: NaiveDate,
) -> WeeklyStats {
    let monday = calendar::week_start(today);
    let week: Vec<&WorkoutSession> = history.iter().filter(|s| s.date >= monday).collect();

    let total_minutes: f64 = week.iter().filter_map(|s| s.duration_minutes()).sum();
    let total_calories: u32 = week
        .iter()
        .filter(|s| s.end_time.is_some())
        .map(|s| estimate_calories(s, catalog, user_weight_kg))
        .sum();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_minutes = total_minutes.round() as u32;
    WeeklyStats {
        workouts: week.len(),
        total_minutes,
        total_calories,
    }
}

/// Rolling seven-day summary over completed sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    /// Completed sessions in the window
    pub total_workouts: u32,
    /// Completed sets
    pub total_sets: u32,
    /// Reps across completed sets
    pub total_reps: u32,
    /// `weight × reps` across completed sets (kg)
    pub total_volume: f64,
    /// Distinct exercise ids, catalog misses included
    pub unique_exercises: usize,
    /// Exercise instances per catalog-resolved muscle group
    pub muscle_groups: BTreeMap<MuscleGroup, u32>,
    /// Mean session minutes over all sessions in the window
    pub avg_workout_duration: f64,
    /// Longest session in minutes
    pub longest_workout: f64,
}

/// Summary of the last seven days as of today
#[must_use]
pub fn weekly_summary(history: &[WorkoutSession], catalog: &ExerciseCatalog<'_>) -> WeeklySummary {
    weekly_summary_at(history, catalog, calendar::today())
}

/// Summary of completed sessions dated on or after `today` minus seven days
#[must_use]
pub fn weekly_summary_at(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    today: NaiveDate,
) -> WeeklySummary {
    let cutoff = calendar::days_before(today, SUMMARY_WINDOW_DAYS);
    let mut summary = WeeklySummary::default();
    let mut exercise_ids = HashSet::new();
    let mut total_minutes = 0.0;

    for session in history
        .iter()
        .filter(|s| s.is_completed() && s.date >= cutoff)
    {
        summary.total_workouts = summary.total_workouts.saturating_add(1);
        for exercise in &session.exercises {
            exercise_ids.insert(exercise.exercise_definition_id.as_str());
            if let Some(definition) = catalog.find(&exercise.exercise_definition_id) {
                *summary
                    .muscle_groups
                    .entry(definition.muscle_group)
                    .or_default() += 1;
            }
            for set in exercise.completed_sets() {
                summary.total_sets = summary.total_sets.saturating_add(1);
                summary.total_reps = summary
                    .total_reps
                    .saturating_add(set.positive_reps().unwrap_or(0));
                summary.total_volume += set.volume().unwrap_or(0.0);
            }
        }
        if let Some(minutes) = session.duration_minutes() {
            total_minutes += minutes;
            summary.longest_workout = summary.longest_workout.max(minutes);
        }
    }

    summary.unique_exercises = exercise_ids.len();
    if summary.total_workouts > 0 {
        summary.avg_workout_duration = total_minutes / f64::from(summary.total_workouts);
    }
    summary
}

/// Motivational message matching the week's effort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PepTalk {
    /// Leading glyph
    pub emoji: String,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
}

impl PepTalk {
    fn new(emoji: &str, title: &str, message: &str) -> Self {
        Self {
            emoji: emoji.to_owned(),
            title: title.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Pick the pep talk for a summary, highest tier first
#[must_use]
pub fn pep_talk(summary: &WeeklySummary) -> PepTalk {
    let workouts = summary.total_workouts;
    let sets = summary.total_sets;

    if workouts >= ELITE_WORKOUTS && sets >= ELITE_SETS {
        PepTalk::new(
            "🔥",
            "You're unstoppable!",
            "This is elite training. With this frequency and volume you are headed for \
             serious results. Keep dominating!",
        )
    } else if workouts >= GREAT_WORKOUTS && sets >= GREAT_SETS {
        PepTalk::new(
            "💪",
            "Fantastic week!",
            "You really delivered this week. Consistency is the key to success and you \
             are proving it every day.",
        )
    } else if workouts >= CONSISTENT_WORKOUTS {
        PepTalk::new(
            "🎯",
            "Solid progress!",
            "Three or more sessions in a week is what builds strength and habits. \
             Every session counts!",
        )
    } else if workouts >= 1 {
        PepTalk::new(
            "🌟",
            "Great start!",
            "Getting started is often the hardest part. Small steps lead to big changes.",
        )
    } else {
        PepTalk::new(
            "💡",
            "New week, new chance!",
            "Last week is history. Start today and your future self will thank you!",
        )
    }
}

/// Badge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Five or more workouts
    FivePlusWorkouts,
    /// Three or more workouts
    ThreePlusWorkouts,
    /// Ten tonnes lifted
    HeavyVolume,
    /// Five tonnes lifted
    ModerateVolume,
    /// Fifteen distinct exercises
    Variety,
    /// A workout of ninety minutes or more
    LongWorkout,
}

/// An earned badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Badge identifier
    pub kind: AchievementKind,
    /// Badge title
    pub title: String,
    /// Short description
    pub description: String,
}

impl Achievement {
    fn new(kind: AchievementKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Badges earned by a summary, in display order
#[must_use]
pub fn achievements(summary: &WeeklySummary) -> Vec<Achievement> {
    let mut earned = Vec::new();

    if summary.total_workouts >= ELITE_WORKOUTS {
        earned.push(Achievement::new(
            AchievementKind::FivePlusWorkouts,
            "5+ workouts",
            "Burning dedication!",
        ));
    }
    if summary.total_workouts >= CONSISTENT_WORKOUTS {
        earned.push(Achievement::new(
            AchievementKind::ThreePlusWorkouts,
            "3+ workouts",
            "Consistent training",
        ));
    }
    if summary.total_volume >= HEAVY_VOLUME_KG {
        earned.push(Achievement::new(
            AchievementKind::HeavyVolume,
            "10+ tonnes lifted",
            "Enormous volume!",
        ));
    } else if summary.total_volume >= MODERATE_VOLUME_KG {
        earned.push(Achievement::new(
            AchievementKind::ModerateVolume,
            "5+ tonnes lifted",
            "Impressive strength",
        ));
    }
    if summary.unique_exercises >= VARIETY_EXERCISES {
        earned.push(Achievement::new(
            AchievementKind::Variety,
            "15+ exercises",
            "Well-rounded training",
        ));
    }
    if summary.longest_workout >= LONG_WORKOUT_MINUTES {
        earned.push(Achievement::new(
            AchievementKind::LongWorkout,
            "90+ minute workout",
            "Endurance master",
        ));
    }

    earned
}
