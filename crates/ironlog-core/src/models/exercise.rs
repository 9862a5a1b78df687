// ABOUTME: Exercise catalog types: muscle groups, exercise types and definitions
// ABOUTME: Provides an id-indexed read-only catalog view used by every analytics function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::met;

/// Muscle group an exercise primarily trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleGroup {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Legs and glutes
    Legs,
    /// Shoulders
    Shoulders,
    /// Arms
    Arms,
    /// Core
    Core,
    /// Conditioning work
    Cardio,
    /// Whole-body movements, warm-ups and mobility
    FullBody,
}

impl MuscleGroup {
    /// Every muscle group in declaration order
    pub const ALL: [Self; 8] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Arms,
        Self::Core,
        Self::Cardio,
        Self::FullBody,
    ];

    /// Wire representation (`CHEST`, `FULL_BODY`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "CHEST",
            Self::Back => "BACK",
            Self::Legs => "LEGS",
            Self::Shoulders => "SHOULDERS",
            Self::Arms => "ARMS",
            Self::Core => "CORE",
            Self::Cardio => "CARDIO",
            Self::FullBody => "FULL_BODY",
        }
    }

    /// Display glyph for the group
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Chest | Self::Arms => "💪",
            Self::Back => "🔙",
            Self::Legs => "🦵",
            Self::Shoulders => "🤷",
            Self::Core => "🧘",
            Self::Cardio => "🏃",
            Self::FullBody => "🏋️",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Core => "core",
            Self::Cardio => "cardio",
            Self::FullBody => "full body",
        };
        f.write_str(name)
    }
}

/// How an exercise is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// External load with reps
    Weighted,
    /// Bodyweight reps
    Bodyweight,
    /// Conditioning work
    Cardio,
    /// Timed holds
    Duration,
}

impl ExerciseType {
    /// Metabolic equivalent used for calorie estimation
    #[must_use]
    pub const fn met_value(self) -> f64 {
        match self {
            Self::Weighted => met::WEIGHTED,
            Self::Bodyweight => met::BODYWEIGHT,
            Self::Cardio => met::CARDIO,
            Self::Duration => met::DURATION,
        }
    }

    /// Whether the exercise counts as resistance training
    #[must_use]
    pub const fn is_strength(self) -> bool {
        matches!(self, Self::Weighted | Self::Bodyweight)
    }
}

/// Immutable catalog entry referenced by id from workout entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name, also the key for strength standards
    pub name: String,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Measurement type
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Coaching cues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Illustration reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ExerciseDefinition {
    /// Create a definition without description or image
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        muscle_group: MuscleGroup,
        exercise_type: ExerciseType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            muscle_group,
            exercise_type,
            description: None,
            image_url: None,
        }
    }

    /// Attach coaching cues
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Read-only id index over a slice of exercise definitions
///
/// Lookups that miss return `None`; callers skip such entries rather than
/// treating them as errors.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog<'a> {
    definitions: &'a [ExerciseDefinition],
    by_id: HashMap<&'a str, &'a ExerciseDefinition>,
}

impl<'a> ExerciseCatalog<'a> {
    /// Index the given definitions; on duplicate ids the first entry wins
    #[must_use]
    pub fn new(definitions: &'a [ExerciseDefinition]) -> Self {
        let mut by_id = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            by_id.entry(definition.id.as_str()).or_insert(definition);
        }
        Self {
            definitions,
            by_id,
        }
    }

    /// Look up a definition by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&'a ExerciseDefinition> {
        self.by_id.get(id).copied()
    }

    /// Look up a definition by exact display name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&'a ExerciseDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// All definitions in catalog order
    #[must_use]
    pub const fn definitions(&self) -> &'a [ExerciseDefinition] {
        self.definitions
    }

    /// Number of definitions
    #[must_use]
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
