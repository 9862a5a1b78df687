// ABOUTME: Main library entry point for the ironlog workout tracker server
// ABOUTME: Exposes the AI recommendation service and the analytics HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ironlog Server
//!
//! HTTP front for the ironlog workout tracker. The client keeps its workout
//! history locally and posts it here to obtain AI coaching recommendations or
//! deterministic analytics computed by `ironlog-intelligence`.
//!
//! ## Architecture
//!
//! - **llm**: Provider abstraction and the Gemini implementation
//! - **services**: AI recommendation generation and reply parsing
//! - **routes**: Health, recommendation and analytics endpoints
//! - **config**: Environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ironlog_server::config::ServerConfig;
//! use ironlog_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("ironlog configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Environment keys and default values
pub mod constants;

/// Unified error handling re-exported from `ironlog-core`
pub mod errors;

/// LLM provider abstraction and the Gemini provider
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared state for request handlers
pub mod resources;

/// HTTP route definitions
pub mod routes;

/// Domain services behind the routes
pub mod services;

pub use ironlog_core::models;
pub use ironlog_intelligence as intelligence;
