// ABOUTME: Unified error handling with standard error codes and tagged outcomes
// ABOUTME: Defines AppError, ErrorCode, and conversions from domain-specific error enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the scoring and program-generation core returns
//! [`AppResult`]. The [`ErrorCode`] carried by an [`AppError`] is the tag the
//! calling API layer uses to pick a response: validation problems, unavailable
//! dependencies, or internal failures.

/// Assessment and constraint validation errors
pub mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed structural validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value is outside its permitted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Dependencies (5000-5999)
    /// Drill library or repository could not be reached
    #[serde(rename = "DEPENDENCY_UNAVAILABLE")]
    DependencyUnavailable = 5001,
    /// A dependency call exceeded its timeout
    #[serde(rename = "DEPENDENCY_TIMEOUT")]
    DependencyTimeout = 5002,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code the API layer should use for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::DependencyUnavailable => 503,
            Self::DependencyTimeout => 504,
            Self::ConfigInvalid
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::DependencyUnavailable => "A required dependency is currently unavailable",
            Self::DependencyTimeout => "A required dependency did not respond in time",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Coarse outcome tag for this code
    #[must_use]
    pub const fn outcome(&self) -> ErrorOutcome {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => {
                ErrorOutcome::Validation
            }
            Self::DependencyUnavailable | Self::DependencyTimeout => {
                ErrorOutcome::DependencyUnavailable
            }
            Self::ResourceNotFound
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => ErrorOutcome::Internal,
        }
    }
}

/// Tagged failure classes surfaced across the core boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorOutcome {
    /// Malformed input, returned immediately and never retried
    Validation,
    /// Drill library or repository unreachable after the retry budget
    DependencyUnavailable,
    /// Anything else
    Internal,
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Player the failing operation was working on
    pub player_id: Option<String>,
    /// Resource identifier if applicable
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            player_id: None,
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
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
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the player id to the error context
    #[must_use]
    pub fn with_player_id(mut self, player_id: impl Into<String>) -> Self {
        self.context.player_id = Some(player_id.into());
        self
    }

    /// Attach a resource id to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Replace the details of the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Tagged outcome for the calling layer
    #[must_use]
    pub const fn outcome(&self) -> ErrorOutcome {
        self.code.outcome()
    }

    /// Whether this error came from input validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.outcome(), ErrorOutcome::Validation)
    }

    /// Whether this error means a dependency could not be reached
    #[must_use]
    pub const fn is_dependency_unavailable(&self) -> bool {
        matches!(self.outcome(), ErrorOutcome::DependencyUnavailable)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload for downstream renderers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Outcome tag
    pub outcome: ErrorOutcome,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "is_empty_details")]
    pub details: serde_json::Value,
}

fn is_empty_details(value: &serde_json::Value) -> bool {
    value.is_null() || value.as_object().is_some_and(serde_json::Map::is_empty)
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                outcome: error.code.outcome(),
                message: error.message,
                details: error.context.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Dependency (drill library, repository) unreachable
    pub fn dependency_unavailable(dependency: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DependencyUnavailable,
            format!("{dependency}: {}", message.into()),
        )
        .with_details(serde_json::json!({ "dependency": dependency }))
    }

    /// Dependency call exceeded its timeout
    pub fn dependency_timeout(dependency: &str, timeout_ms: u64) -> Self {
        Self::new(
            ErrorCode::DependencyTimeout,
            format!("{dependency} did not respond within {timeout_ms}ms"),
        )
        .with_details(serde_json::json!({
            "dependency": dependency,
            "timeout_ms": timeout_ms,
        }))
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let message = error.to_string();
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::dependency_unavailable("database", message)
            }
            other => Self::database(message).with_source(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DependencyUnavailable.http_status(), 503);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_outcome_tags() {
        assert!(AppError::invalid_input("bad").is_validation());
        assert!(
            AppError::dependency_unavailable("drill_library", "down").is_dependency_unavailable()
        );
        assert!(AppError::dependency_timeout("repository", 5000).is_dependency_unavailable());
        assert_eq!(AppError::database("x").outcome(), ErrorOutcome::Internal);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::dependency_timeout("drill_library", 250);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("DEPENDENCY_TIMEOUT"));
        assert!(json.contains("dependency_unavailable"));
        assert!(json.contains("timeout_ms"));
    }
}
