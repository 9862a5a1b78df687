// ABOUTME: Training analytics engine deriving insights from workout history
// ABOUTME: Calorie estimation, strength standards, personal records, recovery and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Stateless analytics over an in-memory workout history. Every function takes
//! the history, the exercise catalog and (where relevant) the profile by
//! reference and returns a freshly derived value; nothing here mutates its
//! inputs, performs I/O or fails. Missing optional data degrades to zero or
//! `None`, and exercise ids that do not resolve against the catalog are skipped.
//!
//! Time-dependent functions come in pairs: the plain form reads the local
//! clock, the `_at` form takes the reference date explicitly.

/// Calendar helpers shared by the weekly analytics
pub mod calendar;

/// MET-based calorie estimation
pub mod calories;

/// Personal record detection and set classification
pub mod personal_records;

/// Goal-conditioned rule-based coaching suggestions
pub mod recommendations;

/// Muscle group recovery, overtraining and neglect analysis
pub mod recovery;

/// Bodyweight-relative strength standards
pub mod strength_standards;

/// Weekly statistics, pep talks and achievements
pub mod weekly_summary;

pub use calories::estimate_calories;
pub use personal_records::{
    classify_set, compute_records, recent_records, recent_records_at, PersonalRecord, PrComparison,
    PrMetric, RecentRecord,
};
pub use recommendations::{
    generate_recommendations, generate_recommendations_at, WeekDistribution,
};
pub use recovery::{
    check_overtraining_risk, check_overtraining_risk_at, compute_recovery, compute_recovery_at,
    find_neglected_groups, MuscleGroupRecovery, RecoveryStatus, RecoveryWarning, Severity,
    WarningKind,
};
pub use strength_standards::{
    evaluate_standard, max_weight_for, strength_profile, StrengthLevel, StrengthProfileEntry,
    StrengthStandard, StrengthStanding, STANDARDS,
};
pub use weekly_summary::{
    achievements, pep_talk, weekly_stats, weekly_stats_at, weekly_summary, weekly_summary_at,
    Achievement, AchievementKind, PepTalk, WeeklyStats, WeeklySummary,
};
