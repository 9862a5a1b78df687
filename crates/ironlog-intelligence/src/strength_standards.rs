// ABOUTME: Bodyweight-relative strength standards for the four base lifts
// ABOUTME: Maps a lift's best weight to a qualitative level and approximate percentile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Standard Evaluator
//!
//! Static approximation table in the style of the `ExRx.net` standards. The
//! thresholds are ratios of lifted weight to bodyweight; lookup is by exact
//! exercise display name.

use std::fmt;

use ironlog_core::models::{ExerciseCatalog, UserProfile, WorkoutSession};
use serde::{Deserialize, Serialize};

/// Qualitative strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    /// Below the beginner threshold
    #[serde(rename = "Beginner")]
    Beginner,
    /// At or above the beginner threshold
    #[serde(rename = "Beginner+")]
    BeginnerPlus,
    /// At or above the intermediate threshold
    #[serde(rename = "Intermediate")]
    Intermediate,
    /// At or above the advanced threshold
    #[serde(rename = "Advanced")]
    Advanced,
}

impl StrengthLevel {
    /// Approximate population percentile for the level
    #[must_use]
    pub const fn percentile(self) -> u8 {
        match self {
            Self::Beginner => 20,
            Self::BeginnerPlus => 40,
            Self::Intermediate => 60,
            Self::Advanced => 85,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::BeginnerPlus => "Beginner+",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        })
    }
}

/// Bodyweight ratio thresholds for one lift
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthStandard {
    /// Exact catalog display name
    pub exercise_name: &'static str,
    /// Ratio for "Beginner+"
    pub beginner: f64,
    /// Ratio for "Intermediate"
    pub intermediate: f64,
    /// Ratio for "Advanced"
    pub advanced: f64,
}

impl StrengthStandard {
    /// Classify a lifted/bodyweight ratio, highest threshold first
    #[must_use]
    pub fn classify(&self, ratio: f64) -> StrengthLevel {
        if ratio >= self.advanced {
            StrengthLevel::Advanced
        } else if ratio >= self.intermediate {
            StrengthLevel::Intermediate
        } else if ratio >= self.beginner {
            StrengthLevel::BeginnerPlus
        } else {
            StrengthLevel::Beginner
        }
    }
}

/// The lifts that carry a standard, in display order
pub const STANDARDS: [StrengthStandard; 4] = [
    StrengthStandard {
        exercise_name: "Squat / Goblet Squat",
        beginner: 0.75,
        intermediate: 1.25,
        advanced: 1.75,
    },
    StrengthStandard {
        exercise_name: "Deadlift (KB/Barbell)",
        beginner: 1.0,
        intermediate: 1.5,
        advanced: 2.0,
    },
    StrengthStandard {
        exercise_name: "Bench Press",
        beginner: 0.5,
        intermediate: 1.0,
        advanced: 1.5,
    },
    StrengthStandard {
        exercise_name: "Shoulder Press",
        beginner: 0.35,
        intermediate: 0.6,
        advanced: 0.9,
    },
];

/// Level and percentile for one lift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthStanding {
    /// Qualitative level
    pub level: StrengthLevel,
    /// Approximate percentile
    pub percentile: u8,
}

/// Evaluate a lift against the standards table
///
/// Returns `None` when either weight is absent or zero, or when the exercise
/// name has no entry in the table.
#[must_use]
pub fn evaluate_standard(
    exercise_name: &str,
    lifted_weight_kg: Option<f64>,
    user_weight_kg: Option<f64>,
) -> Option<StrengthStanding> {
    let lifted = lifted_weight_kg.filter(|w| *w > 0.0)?;
    let bodyweight = user_weight_kg.filter(|w| *w > 0.0)?;
    let standard = STANDARDS.iter().find(|s| s.exercise_name == exercise_name)?;

    let level = standard.classify(lifted / bodyweight);
    Some(StrengthStanding {
        level,
        percentile: level.percentile(),
    })
}

/// Heaviest completed-set weight ever logged for the named exercise
///
/// Sessions of any status count. Returns 0 when the name is not in the catalog
/// or nothing was logged.
#[must_use]
pub fn max_weight_for(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    exercise_name: &str,
) -> f64 {
    let Some(definition) = catalog.find_by_name(exercise_name) else {
        return 0.0;
    };
    history
        .iter()
        .filter_map(|session| {
            session
                .exercises
                .iter()
                .find(|e| e.exercise_definition_id == definition.id)
        })
        .flat_map(|exercise| exercise.completed_sets())
        .filter_map(|set| set.positive_weight())
        .fold(0.0, f64::max)
}

/// One row of the profile's strength overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthProfileEntry {
    /// Lift display name
    pub exercise_name: String,
    /// Best logged weight in kilograms
    pub max_weight: f64,
    /// Standing, absent when the profile has no bodyweight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<StrengthStanding>,
}

/// Strength overview for the standard lifts the user has logged
#[must_use]
pub fn strength_profile(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    profile: &UserProfile,
) -> Vec<StrengthProfileEntry> {
    STANDARDS
        .iter()
        .filter_map(|standard| {
            let max_weight = max_weight_for(history, catalog, standard.exercise_name);
            (max_weight > 0.0).then(|| StrengthProfileEntry {
                exercise_name: standard.exercise_name.to_owned(),
                max_weight,
                standard: evaluate_standard(
                    standard.exercise_name,
                    Some(max_weight),
                    profile.weight,
                ),
            })
        })
        .collect()
}
