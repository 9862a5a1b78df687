// ABOUTME: Unified error type and error codes shared by every ironlog crate
// ABOUTME: Maps error codes to HTTP statuses and renders JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The analytics engine degrades to defaults on missing data and never fails,
//! so errors only arise at the edges: configuration, the upstream text
//! generation service, and HTTP request validation. All of them are expressed
//! as an [`AppError`] carrying an [`ErrorCode`].

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "http-response")]
mod http_response;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// The request payload is invalid
    InvalidInput,
    /// A required field is missing from the request
    MissingRequiredField,
    /// The HTTP method is not supported by the endpoint
    MethodNotAllowed,

    // External services
    /// The upstream service returned an error or an unusable reply
    ExternalServiceError,
    /// The upstream service could not be reached
    ExternalServiceUnavailable,
    /// The upstream service rejected the call because of quota limits
    ExternalRateLimited,
    /// Recommendation generation failed as a whole
    GenerationFailed,

    // Configuration
    /// Required configuration is missing
    ConfigMissing,
    /// Configuration is present but invalid
    ConfigInvalid,

    // Internal
    /// Data could not be serialized or deserialized
    SerializationError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::MethodNotAllowed => 405,
            Self::ExternalRateLimited => 503,
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::GenerationFailed
            | Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::SerializationError
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this endpoint",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::GenerationFailed => "Recommendation generation failed",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional detail string surfaced to API callers
    pub details: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Attach a detail string shown to API callers
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    #[must_use]
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error body: `{ "error": ..., "details"?: ..., "code": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Optional detail, typically the upstream failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Machine-readable error code
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            details: error.details.clone(),
            code: error.code,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::MethodNotAllowed.http_status(), 405);
        assert_eq!(ErrorCode::GenerationFailed.http_status(), 500);
        assert_eq!(ErrorCode::ExternalRateLimited.http_status(), 503);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::new(ErrorCode::GenerationFailed, "Failed to generate recommendations")
            .with_details("upstream timed out");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["error"], "Failed to generate recommendations");
        assert_eq!(json["details"], "upstream timed out");
        assert_eq!(json["code"], "GENERATION_FAILED");
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let error = AppError::missing_field("Profile is required");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert!(!json.contains("details"));
    }
}
