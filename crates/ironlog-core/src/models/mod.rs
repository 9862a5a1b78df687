// ABOUTME: Core data models for the ironlog workout tracker
// ABOUTME: Re-exports sessions, exercise definitions, profile types and the default catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Pure data shapes consumed by the analytics engine and the HTTP layer.
//! Nothing in here performs I/O; callers own the authoritative history and
//! hand slices of it to the analytics functions.
//!
//! ## Core Models
//!
//! - `ExerciseDefinition`: immutable catalog entry, referenced by id
//! - `WorkoutSession`: one training occasion with its exercises and sets
//! - `UserProfile`: the singleton profile driving goal-based coaching
//!
//! JSON field names are camelCase to match the client's persisted format.

mod catalog;
mod exercise;
mod profile;
mod session;

pub use catalog::default_catalog;
pub use exercise::{ExerciseCatalog, ExerciseDefinition, ExerciseType, MuscleGroup};
pub use profile::{BmiCategory, Gender, Goal, UserProfile};
pub use session::{
    calendar_date, parse_calendar_date, WorkoutExercise, WorkoutSession, WorkoutSet, WorkoutStatus,
};
