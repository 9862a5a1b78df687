// ABOUTME: Muscle group recovery analysis from completed workout history
// ABOUTME: Days since last trained, back-to-back overtraining and neglect warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Analyzer
//!
//! Day counts are whole calendar days between the session date and today.
//! A group no completed session references reports the sentinel
//! [`NEVER_TRAINED_DAYS`] and is kept out of neglect warnings.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use ironlog_core::constants::recovery::{
    NEGLECT_HIGH_DAYS, NEGLECT_MIN_DAYS, NEVER_TRAINED_DAYS, OVERDUE_MAX_DAYS,
    READY_LONG_MAX_DAYS, READY_SHORT_MAX_DAYS,
};
use ironlog_core::models::{ExerciseCatalog, MuscleGroup, WorkoutSession};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar;

/// Recovery classification for a muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Trained today
    Fresh,
    /// Recovered and ready
    Ready,
    /// Trained yesterday
    Warning,
    /// Due for training, or never trained
    Overdue,
}

/// Recovery state of one muscle group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupRecovery {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Whole days since the most recent completed session touching the group
    pub days_since_last_trained: i64,
    /// Date of that session
    pub last_trained_date: Option<NaiveDate>,
    /// Classification from the day-count ladder
    pub status: RecoveryStatus,
    /// Display message
    pub message: String,
}

/// Kind of recovery warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    /// Same group on consecutive days
    Overtraining,
    /// Group untouched for too long
    Neglected,
}

/// Warning severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Low,
    /// Worth attention
    Medium,
    /// Act on it
    High,
}

/// A recovery warning for one muscle group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryWarning {
    /// Warning kind
    #[serde(rename = "type")]
    pub kind: WarningKind,
    /// Affected muscle group
    pub muscle_group: MuscleGroup,
    /// Display message
    pub message: String,
    /// Severity
    pub severity: Severity,
}

fn classify(days: i64) -> (RecoveryStatus, String) {
    match days {
        0 => (RecoveryStatus::Fresh, "Trained today! 💪".to_owned()),
        1 => (
            RecoveryStatus::Warning,
            "Trained yesterday, maybe take a rest?".to_owned(),
        ),
        d if d < 0 => (
            RecoveryStatus::Ready,
            "Logged for a later date - ready to train".to_owned(),
        ),
        d if d <= READY_SHORT_MAX_DAYS => (
            RecoveryStatus::Ready,
            format!("{d} days ago - ready to train"),
        ),
        d if d <= READY_LONG_MAX_DAYS => (
            RecoveryStatus::Ready,
            format!("{d} days ago - well rested"),
        ),
        d if d <= OVERDUE_MAX_DAYS => (
            RecoveryStatus::Overdue,
            format!("{d} days ago - time to train!"),
        ),
        NEVER_TRAINED_DAYS => (RecoveryStatus::Overdue, "Never trained".to_owned()),
        d => (
            RecoveryStatus::Overdue,
            format!("{d} days ago - it has been a while!"),
        ),
    }
}

/// Recovery state for every muscle group as of today
#[must_use]
pub fn compute_recovery(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
) -> Vec<MuscleGroupRecovery> {
    compute_recovery_at(history, catalog, calendar::today())
}

/// Recovery state for every muscle group as of `today`, in [`MuscleGroup::ALL`] order
#[must_use]
pub fn compute_recovery_at(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    today: NaiveDate,
) -> Vec<MuscleGroupRecovery> {
    let mut sessions: Vec<&WorkoutSession> = history.iter().filter(|s| s.is_completed()).collect();
    sessions.sort_by(|a, b| b.date.cmp(&a.date));

    let mut last_trained: HashMap<MuscleGroup, NaiveDate> = HashMap::new();
    for session in sessions {
        if last_trained.len() == MuscleGroup::ALL.len() {
            break;
        }
        for group in session.muscle_groups(catalog) {
            last_trained.entry(group).or_insert(session.date);
        }
    }
    debug!(resolved = last_trained.len(), "computed muscle group recovery");

    MuscleGroup::ALL
        .iter()
        .map(|&muscle_group| {
            let last_trained_date = last_trained.get(&muscle_group).copied();
            let days = last_trained_date.map_or(NEVER_TRAINED_DAYS, |date| {
                (today - date).num_days()
            });
            let (status, message) = classify(days);
            MuscleGroupRecovery {
                muscle_group,
                days_since_last_trained: days,
                last_trained_date,
                status,
                message,
            }
        })
        .collect()
}

/// Warn about groups planned today that were also trained yesterday
#[must_use]
pub fn check_overtraining_risk(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    todays_muscle_groups: &[MuscleGroup],
) -> Vec<RecoveryWarning> {
    check_overtraining_risk_at(history, catalog, todays_muscle_groups, calendar::today())
}

/// Warn about groups in `todays_muscle_groups` that a completed session dated
/// the day before `today` also trained
#[must_use]
pub fn check_overtraining_risk_at(
    history: &[WorkoutSession],
    catalog: &ExerciseCatalog<'_>,
    todays_muscle_groups: &[MuscleGroup],
    today: NaiveDate,
) -> Vec<RecoveryWarning> {
    let yesterday = calendar::days_before(today, 1);
    let yesterdays_groups: HashSet<MuscleGroup> = history
        .iter()
        .filter(|s| s.is_completed() && s.date == yesterday)
        .flat_map(|s| s.muscle_groups(catalog))
        .collect();

    todays_muscle_groups
        .iter()
        .filter(|group| yesterdays_groups.contains(*group))
        .map(|&muscle_group| RecoveryWarning {
            kind: WarningKind::Overtraining,
            muscle_group,
            message: format!(
                "You trained {muscle_group} yesterday. \
                 Consider a rest day or a different muscle group."
            ),
            severity: Severity::High,
        })
        .collect()
}

/// Groups untouched for at least ten days, excluding never-trained groups
#[must_use]
pub fn find_neglected_groups(recovery: &[MuscleGroupRecovery]) -> Vec<RecoveryWarning> {
    recovery
        .iter()
        .filter(|r| {
            (NEGLECT_MIN_DAYS..NEVER_TRAINED_DAYS).contains(&r.days_since_last_trained)
        })
        .map(|r| RecoveryWarning {
            kind: WarningKind::Neglected,
            muscle_group: r.muscle_group,
            message: format!(
                "No {} training for {} days. Fit a session in soon!",
                r.muscle_group, r.days_since_last_trained
            ),
            severity: if r.days_since_last_trained >= NEGLECT_HIGH_DAYS {
                Severity::High
            } else {
                Severity::Medium
            },
        })
        .collect()
}
