// ABOUTME: Workout session, exercise instance and set types
// ABOUTME: Includes calendar-date serde handling and per-session aggregate helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::exercise::{ExerciseCatalog, MuscleGroup};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    /// Session in progress
    #[default]
    Active,
    /// Session finalized by the user
    Completed,
}

/// One attempt within an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Identifier
    pub id: String,
    /// Load in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Minutes, for timed exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Only completed sets contribute to aggregates
    #[serde(default)]
    pub completed: bool,
}

impl WorkoutSet {
    /// Create an uncompleted set with optional load and reps
    #[must_use]
    pub fn new(weight: Option<f64>, reps: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            weight,
            reps,
            duration: None,
            completed: false,
        }
    }

    /// Create an uncompleted timed set
    #[must_use]
    pub fn timed(minutes: f64) -> Self {
        Self {
            duration: Some(minutes),
            ..Self::new(None, None)
        }
    }

    /// Mark the set as completed
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Load when present and nonzero
    #[must_use]
    pub fn positive_weight(&self) -> Option<f64> {
        self.weight.filter(|w| *w > 0.0)
    }

    /// Reps when present and nonzero
    #[must_use]
    pub fn positive_reps(&self) -> Option<u32> {
        self.reps.filter(|r| *r > 0)
    }

    /// `weight × reps` when both are present and nonzero
    #[must_use]
    pub fn volume(&self) -> Option<f64> {
        match (self.positive_weight(), self.positive_reps()) {
            (Some(weight), Some(reps)) => Some(weight * f64::from(reps)),
            _ => None,
        }
    }
}

/// One exercise instance within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Identifier
    pub id: String,
    /// Catalog reference, resolved through `ExerciseCatalog`
    pub exercise_definition_id: String,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sets in display order
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// Create an exercise instance with no sets
    #[must_use]
    pub fn new(exercise_definition_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            exercise_definition_id: exercise_definition_id.into(),
            notes: None,
            sets: Vec::new(),
        }
    }

    /// Append a set
    #[must_use]
    pub fn with_set(mut self, set: WorkoutSet) -> Self {
        self.sets.push(set);
        self
    }

    /// Iterate the completed sets only
    pub fn completed_sets(&self) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(|s| s.completed)
    }
}

/// One training occasion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Calendar date used for grouping; time of day is ignored
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    /// When the session started
    pub start_time: DateTime<Utc>,
    /// When the session ended, absent while in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Lifecycle state
    #[serde(default)]
    pub status: WorkoutStatus,
    /// Exercises in display order
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutSession {
    /// Start a new active session
    #[must_use]
    pub fn new(name: impl Into<String>, date: NaiveDate, start_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date,
            start_time,
            end_time: None,
            status: WorkoutStatus::Active,
            exercises: Vec::new(),
        }
    }

    /// Append an exercise instance
    #[must_use]
    pub fn with_exercise(mut self, exercise: WorkoutExercise) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Finalize the session at `end_time`
    #[must_use]
    pub const fn completed_at(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self.status = WorkoutStatus::Completed;
        self
    }

    /// Whether the session has been finalized
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == WorkoutStatus::Completed
    }

    /// Elapsed minutes between start and end
    ///
    /// Absent while the session is in progress. An end time before the start
    /// time yields zero.
    #[must_use]
    pub fn duration_minutes(&self) -> Option<f64> {
        self.end_time.map(|end| {
            #[allow(clippy::cast_precision_loss)]
            let minutes = (end - self.start_time).num_milliseconds() as f64 / 60_000.0;
            minutes.max(0.0)
        })
    }

    /// Number of completed sets across all exercises
    #[must_use]
    pub fn completed_set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.completed_sets().count()).sum()
    }

    /// Total completed `weight × reps` across all exercises
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(WorkoutExercise::completed_sets)
            .filter_map(WorkoutSet::volume)
            .sum()
    }

    /// Distinct muscle groups this session touches, catalog misses skipped
    #[must_use]
    pub fn muscle_groups(&self, catalog: &ExerciseCatalog<'_>) -> BTreeSet<MuscleGroup> {
        self.exercises
            .iter()
            .filter_map(|e| catalog.find(&e.exercise_definition_id))
            .map(|d| d.muscle_group)
            .collect()
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or a full RFC 3339 timestamp
///
/// Timestamps are converted to the local calendar date.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    })
}

/// Serde adapter for date-only fields that tolerates full timestamps
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing fails
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    /// Deserialize from a bare date or an RFC 3339 timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the string is neither format
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{Duration, TimeZone};

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_duration_absent_while_active() {
        let session = WorkoutSession::new("Push", start().date_naive(), start());
        assert!(session.duration_minutes().is_none());
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let session = WorkoutSession::new("Push", start().date_naive(), start())
            .completed_at(start() - Duration::minutes(10));
        assert_eq!(session.duration_minutes(), Some(0.0));
    }

    #[test]
    fn test_totals_ignore_uncompleted_sets() {
        let session = WorkoutSession::new("Legs", start().date_naive(), start()).with_exercise(
            WorkoutExercise::new("ex_squat")
                .with_set(WorkoutSet::new(Some(50.0), Some(10)).completed())
                .with_set(WorkoutSet::new(Some(60.0), Some(8)))
                .with_set(WorkoutSet::new(None, Some(12)).completed()),
        );
        assert_eq!(session.completed_set_count(), 2);
        assert!((session.total_volume() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_date_accepts_timestamps() {
        let json = r#"{
            "id": "s1",
            "name": "Morning",
            "date": "2025-03-10",
            "startTime": "2025-03-10T07:00:00Z",
            "status": "completed"
        }"#;
        let session: WorkoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert!(session.exercises.is_empty());
        assert!(parse_calendar_date("2025-03-10T12:00:00+00:00").is_some());
        assert!(parse_calendar_date("yesterday").is_none());
    }
}
