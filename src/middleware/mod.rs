// ABOUTME: HTTP middleware for the ironlog server
// ABOUTME: Cross-origin request policy shared by every API route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
