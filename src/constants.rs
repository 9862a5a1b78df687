// ABOUTME: Server-wide constants for environment keys and configuration defaults
// ABOUTME: Keeps environment variable names and fallback values in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Environment variable names and their default values.

/// Environment variable names read at startup
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Fallback HTTP port variable used by common hosting platforms
    pub const PORT: &str = "PORT";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Gemini base URL override
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Days of history embedded in the coaching prompt
    pub const AI_HISTORY_WINDOW_DAYS: &str = "AI_HISTORY_WINDOW_DAYS";
}

/// Defaults applied when a variable is unset
pub mod defaults {
    use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Generation model
    pub const GEMINI_MODEL: &str = DEFAULT_MODEL;
    /// Gemini REST endpoint
    pub const GEMINI_BASE_URL: &str = DEFAULT_BASE_URL;
    /// Days of history embedded in the coaching prompt
    pub const AI_HISTORY_WINDOW_DAYS: i64 = 7;
}

/// Service identity
pub mod service {
    /// Service name used in logs and health responses
    pub const SERVICE_NAME: &str = "ironlog-server";
    /// Crate version
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}
