// ABOUTME: Environment configuration for the HTTP server and the AI recommendation backend
// ABOUTME: Parses bind address, CORS origins and Gemini settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{defaults, env_keys};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Cross-origin request settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl CorsConfig {
    /// Whether every origin is accepted
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        let trimmed = self.allowed_origins.trim();
        trimmed.is_empty() || trimmed == "*"
    }

    /// Individual configured origins, empty when any origin is accepted
    #[must_use]
    pub fn origins(&self) -> Vec<&str> {
        if self.allows_any_origin() {
            return Vec::new();
        }
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Text generation backend settings
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiConfig {
    /// Gemini API key; requests fail with a configuration error when absent
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,
    /// Generation model
    pub model: String,
    /// Upstream base URL
    pub base_url: String,
    /// Days of history embedded in each coaching prompt
    pub history_window_days: i64,
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("history_window_days", &self.history_window_days)
            .finish()
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// CORS settings
    pub cors: CorsConfig,
    /// AI recommendation backend
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let host = parse_var(env_keys::HOST, defaults::HOST)?;
        let port_raw = env::var(env_keys::HTTP_PORT)
            .or_else(|_| env::var(env_keys::PORT))
            .unwrap_or_else(|_| defaults::HTTP_PORT.to_string());
        let http_port = port_raw.trim().parse().map_err(|_| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {} value: {port_raw}", env_keys::HTTP_PORT),
            )
        })?;

        let history_window_days: i64 = parse_var(
            env_keys::AI_HISTORY_WINDOW_DAYS,
            &defaults::AI_HISTORY_WINDOW_DAYS.to_string(),
        )?;
        if history_window_days < 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must not be negative", env_keys::AI_HISTORY_WINDOW_DAYS),
            ));
        }

        Ok(Self {
            host,
            http_port,
            cors: CorsConfig {
                allowed_origins: env_var_or(env_keys::CORS_ALLOWED_ORIGINS, "*"),
            },
            ai: AiConfig {
                gemini_api_key: env::var(env_keys::GEMINI_API_KEY)
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env_var_or(env_keys::GEMINI_MODEL, defaults::GEMINI_MODEL),
                base_url: env_var_or(env_keys::GEMINI_BASE_URL, defaults::GEMINI_BASE_URL),
                history_window_days,
            },
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Ironlog Server Configuration:\n\
             - Host: {}\n\
             - HTTP Port: {}\n\
             - CORS Origins: {}\n\
             - Gemini API Key: {}\n\
             - Gemini Model: {}\n\
             - Gemini Base URL: {}\n\
             - AI History Window: {} days",
            self.host,
            self.http_port,
            if self.cors.allows_any_origin() {
                "*"
            } else {
                self.cors.allowed_origins.as_str()
            },
            if self.ai.gemini_api_key.is_some() {
                "Configured"
            } else {
                "Not configured"
            },
            self.ai.model,
            self.ai.base_url,
            self.ai.history_window_days
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: defaults::HTTP_PORT,
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            ai: AiConfig {
                gemini_api_key: None,
                model: defaults::GEMINI_MODEL.to_owned(),
                base_url: defaults::GEMINI_BASE_URL.to_owned(),
                history_window_days: defaults::AI_HISTORY_WINDOW_DAYS,
            },
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_var<T: FromStr>(key: &str, default: &str) -> AppResult<T> {
    let raw = env_var_or(key, default);
    raw.trim().parse().map_err(|_| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {key} value: {raw}"),
        )
    })
}
