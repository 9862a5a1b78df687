// ABOUTME: Fixed constants for calorie estimation, recovery ladders and recommendations
// ABOUTME: Organized by domain so analytics modules share one source of truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Metabolic equivalent (MET) values per exercise type
pub mod met {
    /// Weight training, vigorous
    pub const WEIGHTED: f64 = 6.0;
    /// Calisthenics, vigorous
    pub const BODYWEIGHT: f64 = 5.0;
    /// Cardio, moderate to vigorous
    pub const CARDIO: f64 = 7.0;
    /// Static holds such as planks
    pub const DURATION: f64 = 4.0;
    /// Used when no exercise in a session resolves against the catalog
    pub const FALLBACK: f64 = 5.0;
}

/// Recovery ladder thresholds (days since a muscle group was last trained)
pub mod recovery {
    /// Sentinel day count for a group that was never trained
    pub const NEVER_TRAINED_DAYS: i64 = 999;
    /// Upper bound of the first "ready" band
    pub const READY_SHORT_MAX_DAYS: i64 = 3;
    /// Upper bound of the second "ready" band
    pub const READY_LONG_MAX_DAYS: i64 = 7;
    /// Upper bound of the "time to train" overdue band
    pub const OVERDUE_MAX_DAYS: i64 = 14;
    /// Day count from which a group counts as neglected
    pub const NEGLECT_MIN_DAYS: i64 = 10;
    /// Day count from which neglect is high severity
    pub const NEGLECT_HIGH_DAYS: i64 = 14;
}

/// Personal record thresholds
pub mod records {
    /// Lower bound (inclusive) of the near-record percentage band
    pub const NEAR_PR_PERCENT: f64 = 90.0;
    /// Percentage reported for a first-ever record
    pub const FIRST_PR_PERCENT: f64 = 100.0;
    /// Default look-back window for recent records
    pub const RECENT_WINDOW_DAYS: i64 = 7;
}

/// Rule-based recommendation thresholds
pub mod recommendations {
    /// Maximum number of suggestions returned
    pub const MAX_SUGGESTIONS: usize = 3;
    /// Push exercises may exceed pull exercises by this many before warning
    pub const PUSH_PULL_TOLERANCE: u32 = 2;
    /// Strength goal: sessions per week before core work is expected
    pub const CORE_CHECK_MIN_SESSIONS: usize = 4;
    /// Strength goal: weekly session target
    pub const STRENGTH_WEEKLY_TARGET: usize = 3;
    /// Weight loss goal: weekly session target
    pub const WEIGHT_LOSS_WEEKLY_TARGET: usize = 4;
    /// Endurance goal: weekly cardio session target
    pub const ENDURANCE_CARDIO_TARGET: usize = 2;
    /// Weekly session count that triggers the rest reminder
    pub const REST_REMINDER_SESSIONS: usize = 5;
}

/// Weekly summary thresholds for pep talks and achievements
pub mod weekly {
    /// Rolling window used by the weekly summary
    pub const SUMMARY_WINDOW_DAYS: i64 = 7;
    /// Workouts for the highest tier
    pub const ELITE_WORKOUTS: u32 = 5;
    /// Sets for the highest tier
    pub const ELITE_SETS: u32 = 100;
    /// Workouts for the second tier
    pub const GREAT_WORKOUTS: u32 = 4;
    /// Sets for the second tier
    pub const GREAT_SETS: u32 = 60;
    /// Workouts for the consistency tier
    pub const CONSISTENT_WORKOUTS: u32 = 3;
    /// Volume (kg) for the large volume badge
    pub const HEAVY_VOLUME_KG: f64 = 10_000.0;
    /// Volume (kg) for the moderate volume badge
    pub const MODERATE_VOLUME_KG: f64 = 5_000.0;
    /// Distinct exercises for the variety badge
    pub const VARIETY_EXERCISES: usize = 15;
    /// Minutes for the endurance badge
    pub const LONG_WORKOUT_MINUTES: f64 = 90.0;
}
