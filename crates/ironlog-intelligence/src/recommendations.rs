// ABOUTME: Rule-based coaching suggestions conditioned on the user's training goal
// ABOUTME: Inspects the current ISO week's training distribution and emits up to three tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rule-Based Recommendation Generator
//!
//! The week starts on Monday. Every session dated on or after that Monday
//! counts, including sessions still in progress. Suggestions are produced in
//! a fixed order (goal checks, fallback, rest reminder) and truncated to
//! [`MAX_SUGGESTIONS`]. Frequency targets are only checked once the week has
//! a session, so an empty week reaches the new-week fallback.

use std::collections::HashMap;

use chrono::NaiveDate;
use ironlog_core::constants::recommendations::{
    CORE_CHECK_MIN_SESSIONS, ENDURANCE_CARDIO_TARGET, MAX_SUGGESTIONS, PUSH_PULL_TOLERANCE,
    REST_REMINDER_SESSIONS, STRENGTH_WEEKLY_TARGET, WEIGHT_LOSS_WEEKLY_TARGET,
};
use ironlog_core::models::{
    ExerciseCatalog, ExerciseType, Goal, MuscleGroup, UserProfile, WorkoutSession,
};
use tracing::debug;

use crate::calendar;

/// Training distribution of the current week
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekDistribution {
    /// Sessions in the week
    pub sessions: usize,
    /// Exercise instances per muscle group
    pub group_counts: HashMap<MuscleGroup, u32>,
    /// Sessions with at least one cardio exercise
    pub cardio_sessions: usize,
    /// Sessions with at least one weighted or bodyweight exercise
    pub strength_sessions: usize,
}

impl WeekDistribution {
    /// Tally the sessions dated on or after `week_start`
    #[must_use]
    pub fn collect(
        history: &[WorkoutSession],
        catalog: &ExerciseCatalog<'_>,
        week_start: NaiveDate,
    ) -> Self {
        let mut distribution = Self::default();
        for session in history.iter().filter(|s| s.date >= week_start) {
            distribution.sessions += 1;
            let mut has_cardio = false;
            let mut has_strength = false;
            for definition in session
                .exercises
                .iter()
                .filter_map(|e| catalog.find(&e.exercise_definition_id))
            {
                *distribution
                    .group_counts
                    .entry(definition.muscle_group)
                    .or_default() += 1;
                has_cardio |= definition.exercise_type == ExerciseType::Cardio;
                has_strength |= definition.exercise_type.is_strength();
            }
            distribution.cardio_sessions += usize::from(has_cardio);
            distribution.strength_sessions += usize::from(has_strength);
        }
        distribution
    }

    /// Exercise instances for a group this week
    #[must_use]
    pub fn count(&self, group: MuscleGroup) -> u32 {
        self.group_counts.get(&group).copied().unwrap_or(0)
    }
}

fn strength_suggestions(week: &WeekDistribution, out: &mut Vec<String>) {
    if week.count(MuscleGroup::Legs) == 0 && week.sessions > 0 {
        out.push("🦵 You haven't trained legs this week. Time for a leg day?".to_owned());
    }

    let push = week.count(MuscleGroup::Chest) + week.count(MuscleGroup::Shoulders);
    let pull = week.count(MuscleGroup::Back);
    if push > pull + PUSH_PULL_TOLERANCE {
        out.push("⚖️ Lots of pressing this week. Train your back for balance.".to_owned());
    }

    if week.sessions >= CORE_CHECK_MIN_SESSIONS && week.count(MuscleGroup::Core) == 0 {
        out.push("🧱 Don't forget your core! Add some planks or ab work.".to_owned());
    }

    if week.sessions == 0 {
        return;
    }
    if week.sessions < STRENGTH_WEEKLY_TARGET {
        out.push(format!(
            "💪 You have {} sessions this week. \
             Aim for at least {STRENGTH_WEEKLY_TARGET} to keep progressing.",
            week.sessions
        ));
    } else {
        out.push("🔥 Great training frequency this week!".to_owned());
    }
}

fn weight_loss_suggestions(week: &WeekDistribution, out: &mut Vec<String>) {
    if week.cardio_sessions == 0 && week.sessions > 0 {
        out.push("🏃 Get your heart rate up! A cardio session will boost your burn.".to_owned());
    }
    if week.strength_sessions == 0 && week.sessions > 0 {
        out.push(
            "💪 Strength training raises your resting metabolism. Don't skip the weights!"
                .to_owned(),
        );
    }
    if week.sessions > 0 && week.sessions < WEIGHT_LOSS_WEEKLY_TARGET {
        out.push("📅 Consistency is key. Try to be a little active every day.".to_owned());
    }
}

fn endurance_suggestions(week: &WeekDistribution, out: &mut Vec<String>) {
    if week.cardio_sessions < ENDURANCE_CARDIO_TARGET {
        out.push("❤️ For endurance, aim for at least 2-3 cardio sessions a week.".to_owned());
    }
    if week.strength_sessions == 0 {
        out.push("🦵 Strong legs improve running economy. Add some strength work.".to_owned());
    }
}

/// Coaching suggestions for the current week
#[must_use]
pub fn generate_recommendations(
    profile: &UserProfile,
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
) -> Vec<String> {
    generate_recommendations_at(profile, history, catalog, calendar::today())
}

/// Coaching suggestions for the ISO week containing `today`, at most three
#[must_use]
pub fn generate_recommendations_at(
    profile: &UserProfile,
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    today: NaiveDate,
) -> Vec<String> {
    let week = WeekDistribution::collect(history, catalog, calendar::week_start(today));
    let mut suggestions = Vec::new();

    match profile.goal {
        Goal::Strength | Goal::Muscle => strength_suggestions(&week, &mut suggestions),
        Goal::WeightLoss => weight_loss_suggestions(&week, &mut suggestions),
        Goal::Endurance => endurance_suggestions(&week, &mut suggestions),
        Goal::General => {}
    }

    if suggestions.is_empty() {
        if week.sessions == 0 {
            suggestions
                .push("🚀 New week, new opportunities! What are you training today?".to_owned());
            match profile.goal {
                Goal::Strength => {
                    suggestions.push("Tip: Start the week with your heaviest lifts.".to_owned());
                }
                Goal::WeightLoss => {
                    suggestions.push("Tip: A walk beats doing nothing.".to_owned());
                }
                Goal::Muscle | Goal::Endurance | Goal::General => {}
            }
        } else {
            suggestions.push("🌟 You're off to a good start this week. Keep it up!".to_owned());
            suggestions.push("💧 Remember to drink enough water through the day.".to_owned());
        }
    }

    if week.sessions >= REST_REMINDER_SESSIONS {
        suggestions.push(
            "💤 You've trained a lot this week. Rest is part of making progress.".to_owned(),
        );
    }

    debug!(
        goal = %profile.goal,
        sessions = week.sessions,
        generated = suggestions.len(),
        "generated rule-based recommendations"
    );
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
