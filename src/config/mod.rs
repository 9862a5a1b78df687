// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the ironlog server
//!
//! Configuration is read from environment variables only; there is no
//! configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{AiConfig, CorsConfig, ServerConfig};
