// ABOUTME: Personal record tracking across completed workout history
// ABOUTME: Computes per-exercise maxima and classifies new sets against them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Personal Record Tracker
//!
//! Records are derived on demand from the authoritative history and never
//! cached. Four maxima are tracked independently per exercise: heaviest set,
//! most reps, largest single-set volume and largest per-session volume. Each
//! keeps the earliest date that reached it.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use ironlog_core::constants::records::{FIRST_PR_PERCENT, NEAR_PR_PERCENT, RECENT_WINDOW_DAYS};
use ironlog_core::models::{ExerciseCatalog, WorkoutSession, WorkoutSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar;

/// Metric a record or comparison refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrMetric {
    /// Heaviest load in a single set
    Weight,
    /// Most repetitions in a single set
    Reps,
    /// Largest `weight × reps` in a single set
    Volume,
}

impl PrMetric {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Max weight",
            Self::Reps => "Max reps",
            Self::Volume => "Max volume",
        }
    }
}

impl fmt::Display for PrMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All-time maxima for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Catalog id
    pub exercise_id: String,
    /// Catalog display name
    pub exercise_name: String,
    /// Heaviest completed set (kg)
    pub max_weight: f64,
    /// Date of the heaviest set
    pub max_weight_date: Option<NaiveDate>,
    /// Most reps in a completed set
    pub max_reps: u32,
    /// Date of the most reps
    pub max_reps_date: Option<NaiveDate>,
    /// Largest single-set volume (kg)
    pub max_volume: f64,
    /// Date of the largest single-set volume
    pub max_volume_date: Option<NaiveDate>,
    /// Largest volume accumulated in one session (kg)
    pub total_volume: f64,
    /// Date of the largest session volume
    pub total_volume_date: Option<NaiveDate>,
}

impl PersonalRecord {
    fn empty(exercise_id: &str, exercise_name: &str) -> Self {
        Self {
            exercise_id: exercise_id.to_owned(),
            exercise_name: exercise_name.to_owned(),
            max_weight: 0.0,
            max_weight_date: None,
            max_reps: 0,
            max_reps_date: None,
            max_volume: 0.0,
            max_volume_date: None,
            total_volume: 0.0,
            total_volume_date: None,
        }
    }

    /// Fold one session's sets for this exercise into the running maxima
    fn absorb<'s>(&mut self, date: NaiveDate, sets: impl Iterator<Item = &'s WorkoutSet>) {
        let mut session_volume = 0.0;
        for set in sets {
            if let Some(weight) = set.positive_weight() {
                if weight > self.max_weight {
                    self.max_weight = weight;
                    self.max_weight_date = Some(date);
                }
            }
            if let Some(reps) = set.positive_reps() {
                if reps > self.max_reps {
                    self.max_reps = reps;
                    self.max_reps_date = Some(date);
                }
            }
            if let Some(volume) = set.volume() {
                if volume > self.max_volume {
                    self.max_volume = volume;
                    self.max_volume_date = Some(date);
                }
                session_volume += volume;
            }
        }
        if session_volume > self.total_volume {
            self.total_volume = session_volume;
            self.total_volume_date = Some(date);
        }
    }

    /// Whether any measurable load or reps were ever logged
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.max_weight > 0.0 || self.max_reps > 0
    }
}

/// Compute personal records for every catalog exercise with logged data
///
/// Only completed sessions and completed sets count. Sessions are visited in
/// ascending date order so ties keep the earliest date. Within a session only
/// the first instance of each exercise is considered.
#[must_use]
pub fn compute_records(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
) -> BTreeMap<String, PersonalRecord> {
    let mut sessions: Vec<&WorkoutSession> = history.iter().filter(|s| s.is_completed()).collect();
    sessions.sort_by_key(|s| s.date);

    let mut records: BTreeMap<String, PersonalRecord> = BTreeMap::new();
    for session in sessions {
        let mut seen = HashSet::new();
        for exercise in &session.exercises {
            if !seen.insert(exercise.exercise_definition_id.as_str()) {
                continue;
            }
            let Some(definition) = catalog.find(&exercise.exercise_definition_id) else {
                continue;
            };
            records
                .entry(definition.id.clone())
                .or_insert_with(|| PersonalRecord::empty(&definition.id, &definition.name))
                .absorb(session.date, exercise.completed_sets());
        }
    }

    records.retain(|_, record| record.has_data());
    debug!(exercises = records.len(), "computed personal records");
    records
}

/// How a set compares to the existing record for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrComparison {
    /// Metric compared
    #[serde(rename = "type")]
    pub metric: PrMetric,
    /// Strictly beats the previous record, or is the first record
    #[serde(rename = "isNewPR")]
    pub is_new_pr: bool,
    /// Within `[90, 100)` percent of the previous record
    #[serde(rename = "isNearPR")]
    pub is_near_pr: bool,
    /// Value from the set
    pub current_value: f64,
    /// Previous record, 0 when none exists
    #[serde(rename = "previousPR")]
    pub previous_pr: f64,
    /// `current / previous × 100`
    #[serde(rename = "percentageOfPR")]
    pub percentage_of_pr: f64,
}

impl PrComparison {
    fn first(metric: PrMetric, current_value: f64) -> Self {
        Self {
            metric,
            is_new_pr: true,
            is_near_pr: false,
            current_value,
            previous_pr: 0.0,
            percentage_of_pr: FIRST_PR_PERCENT,
        }
    }

    fn against(metric: PrMetric, current_value: f64, previous_pr: f64) -> Self {
        let percentage_of_pr = current_value / previous_pr * 100.0;
        Self {
            metric,
            is_new_pr: current_value > previous_pr,
            is_near_pr: (NEAR_PR_PERCENT..100.0).contains(&percentage_of_pr),
            current_value,
            previous_pr,
            percentage_of_pr,
        }
    }
}

/// Compare a set against the exercise's existing records
///
/// Without a prior record any positive weight or reps is a first record and
/// volume is not evaluated. With a record, a metric is compared only when the
/// set carries it and the record for it is nonzero.
#[must_use]
pub fn classify_set(
    exercise_id: &str,
    set: &WorkoutSet,
    records: &BTreeMap<String, PersonalRecord>,
) -> Vec<PrComparison> {
    let Some(record) = records.get(exercise_id) else {
        return [
            set.positive_weight()
                .map(|w| PrComparison::first(PrMetric::Weight, w)),
            set.positive_reps()
                .map(|r| PrComparison::first(PrMetric::Reps, f64::from(r))),
        ]
        .into_iter()
        .flatten()
        .collect();
    };

    let mut comparisons = Vec::with_capacity(3);
    if let Some(weight) = set.positive_weight() {
        if record.max_weight > 0.0 {
            comparisons.push(PrComparison::against(
                PrMetric::Weight,
                weight,
                record.max_weight,
            ));
        }
    }
    if let Some(reps) = set.positive_reps() {
        if record.max_reps > 0 {
            comparisons.push(PrComparison::against(
                PrMetric::Reps,
                f64::from(reps),
                f64::from(record.max_reps),
            ));
        }
    }
    if let Some(volume) = set.volume() {
        if record.max_volume > 0.0 {
            comparisons.push(PrComparison::against(
                PrMetric::Volume,
                volume,
                record.max_volume,
            ));
        }
    }
    comparisons
}

/// A record set within the recent window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRecord {
    /// Catalog id
    pub exercise_id: String,
    /// Catalog display name
    pub exercise_name: String,
    /// Which maximum was reached
    #[serde(rename = "type")]
    pub metric: PrMetric,
    /// Record value
    pub value: f64,
    /// Date the record was set
    pub date: NaiveDate,
}

/// Records set within the last `window_days` days, most recent first
#[must_use]
pub fn recent_records(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    window_days: Option<i64>,
) -> Vec<RecentRecord> {
    recent_records_at(
        history,
        catalog,
        window_days.unwrap_or(RECENT_WINDOW_DAYS),
        calendar::today(),
    )
}

/// Records dated within `[today - window_days, today]`, most recent first
///
/// Session volume is not surfaced here. Entries sharing a date keep exercise id
/// order, then weight, reps, volume.
#[must_use]
pub fn recent_records_at(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    window_days: i64,
    today: NaiveDate,
) -> Vec<RecentRecord> {
    let cutoff = calendar::days_before(today, window_days);
    let in_window = |date: Option<NaiveDate>| date.filter(|d| (cutoff..=today).contains(d));

    let mut recent = Vec::new();
    for record in compute_records(history, catalog).into_values() {
        let candidates = [
            (PrMetric::Weight, record.max_weight, record.max_weight_date),
            (
                PrMetric::Reps,
                f64::from(record.max_reps),
                record.max_reps_date,
            ),
            (PrMetric::Volume, record.max_volume, record.max_volume_date),
        ];
        for (metric, value, date) in candidates {
            if value <= 0.0 {
                continue;
            }
            if let Some(date) = in_window(date) {
                recent.push(RecentRecord {
                    exercise_id: record.exercise_id.clone(),
                    exercise_name: record.exercise_name.clone(),
                    metric,
                    value,
                    date,
                });
            }
        }
    }

    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent
}
