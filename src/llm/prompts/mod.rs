// ABOUTME: Coaching prompt construction for the AI recommendation service
// ABOUTME: Renders the profile and recent training into the text sent to the LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching Prompts
//!
//! The static instruction block is loaded at compile time from a markdown
//! file; the profile and training sections are rendered per request.

use std::fmt::Write;

use chrono::NaiveDate;
use ironlog_core::models::{
    ExerciseCatalog, UserProfile, WorkoutExercise, WorkoutSession, WorkoutSet,
};
use ironlog_intelligence::calendar;

/// Instruction block and reply shape appended to every coaching prompt
pub const COACHING_INSTRUCTIONS: &str = include_str!("coaching_instructions.md");

const NOT_PROVIDED: &str = "not provided";

/// Build the coaching prompt for `profile`
///
/// Sessions dated on or after `today - window_days` are listed one per line.
/// Exercises whose definition id is not in `catalog` are left out of the line.
#[must_use]
pub fn build_coaching_prompt(
    profile: &UserProfile,
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    today: NaiveDate,
    window_days: i64,
) -> String {
    let since = calendar::days_before(today, window_days);
    let mut prompt = String::from(
        "You are an experienced training coach. Analyse the user's training profile and give \
         3-4 concrete, personal recommendations.\n\n",
    );

    prompt.push_str("PROFILE:\n");
    let _ = writeln!(prompt, "- Goal: {}", profile.goal);
    let _ = writeln!(
        prompt,
        "- Age: {}",
        profile.age.map_or_else(|| NOT_PROVIDED.to_owned(), |age| age.to_string())
    );
    let _ = writeln!(
        prompt,
        "- Weight: {}",
        profile
            .weight
            .map_or_else(|| NOT_PROVIDED.to_owned(), |kg| format!("{kg}kg"))
    );
    let _ = writeln!(prompt, "- Gender: {}", profile.gender);

    prompt.push_str("\nTHIS WEEK'S TRAINING:\n");
    let recent: Vec<&WorkoutSession> = history.iter().filter(|s| s.date >= since).collect();
    if recent.is_empty() {
        prompt.push_str("- No sessions this week\n");
    }
    for session in recent {
        let exercises: Vec<String> = session
            .exercises
            .iter()
            .filter_map(|exercise| describe_exercise(exercise, catalog))
            .collect();
        let _ = writeln!(
            prompt,
            "- {}: {}",
            session.date.format("%Y-%m-%d"),
            exercises.join(", ")
        );
    }

    prompt.push_str("\nTOTAL TRAINING HISTORY:\n");
    let _ = writeln!(prompt, "- {} sessions logged in total\n", history.len());
    prompt.push_str(COACHING_INSTRUCTIONS);
    prompt
}

fn describe_exercise(exercise: &WorkoutExercise, catalog: &ExerciseCatalog<'_>) -> Option<String> {
    let definition = catalog.find(&exercise.exercise_definition_id)?;
    let reps = exercise
        .sets
        .iter()
        .find_map(WorkoutSet::positive_reps)
        .unwrap_or(0);
    Some(format!(
        "{} ({}, {} sets x {} reps)",
        definition.name,
        definition.muscle_group.as_str(),
        exercise.sets.len(),
        reps
    ))
}
