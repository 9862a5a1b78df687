// ABOUTME: Error handling re-exports for the server crate
// ABOUTME: Forwards the shared AppError and ErrorCode from ironlog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error type lives in `ironlog-core` so the analytics crates and the
//! server share one vocabulary. With the `http-response` feature enabled,
//! [`AppError`] renders as `{ "error", "details"?, "code" }` with the status
//! from [`ErrorCode::http_status`].

pub use ironlog_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
