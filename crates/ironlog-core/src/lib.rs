// ABOUTME: Core types and constants for the ironlog workout tracker
// ABOUTME: Foundation crate with the domain model, error handling, catalog, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing the shared domain model and error types for the
//! ironlog workout tracker. Both the analytics engine and the HTTP server
//! depend on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **models**: Sessions, exercises, sets, profiles and the exercise catalog
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: MET values, recovery thresholds and other fixed numbers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Fixed constants used by the analytics engine and the server
pub mod constants;

/// Core data models (sessions, exercise definitions, profile, catalog)
pub mod models;
