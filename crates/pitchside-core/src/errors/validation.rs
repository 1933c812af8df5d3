// ABOUTME: Validation error types for assessments and planning constraints
// ABOUTME: Converts into AppError so validation failures surface as tagged results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Structural validation errors.
//!
//! These are raised before any scoring or planning happens and are never
//! retried by the core.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Reasons an assessment or planning request is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric value is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Offending field
        field: &'static str,
    },

    /// An ordinal 1-5 rating is outside its scale
    #[error("{field} must be between 1 and 5, got {value}")]
    OrdinalOutOfRange {
        /// Offending field
        field: &'static str,
        /// Value supplied
        value: f64,
    },

    /// A percentage metric is outside 0-100
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentageOutOfRange {
        /// Offending field
        field: &'static str,
        /// Value supplied
        value: f64,
    },

    /// A physical measurement is negative or zero where it must be positive
    #[error("{field} must be a positive measurement, got {value}")]
    NonPositiveMeasurement {
        /// Offending field
        field: &'static str,
        /// Value supplied
        value: f64,
    },

    /// Player age outside the supported range
    #[error("age must be between {min} and {max}, got {age}")]
    AgeOutOfRange {
        /// Age supplied
        age: u32,
        /// Lowest supported age
        min: u32,
        /// Highest supported age
        max: u32,
    },

    /// A required identifier is empty
    #[error("{field} must not be empty")]
    EmptyField {
        /// Offending field
        field: &'static str,
    },

    /// Training days per week not in the supported set
    #[error("training_days_per_week must be 3, 4, or 5, got {0}")]
    UnsupportedTrainingDays(u8),

    /// Program duration outside the supported range
    #[error("duration_weeks must be between {min} and {max}, got {weeks}")]
    DurationOutOfRange {
        /// Duration supplied
        weeks: u32,
        /// Shortest supported duration
        min: u32,
        /// Longest supported duration
        max: u32,
    },

    /// Planning input refers to a different player or assessment than expected
    #[error("score result does not belong to {expected}")]
    MismatchedSource {
        /// Identifier the caller expected
        expected: String,
    },
}

impl ValidationError {
    /// Field name the error refers to, when it targets a single field
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotFinite { field }
            | Self::OrdinalOutOfRange { field, .. }
            | Self::PercentageOutOfRange { field, .. }
            | Self::NonPositiveMeasurement { field, .. }
            | Self::EmptyField { field } => Some(field),
            Self::AgeOutOfRange { .. } => Some("age"),
            Self::UnsupportedTrainingDays(_) => Some("training_days_per_week"),
            Self::DurationOutOfRange { .. } => Some("duration_weeks"),
            Self::MismatchedSource { .. } => None,
        }
    }

    const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyField { .. } => ErrorCode::MissingRequiredField,
            Self::NotFinite { .. } | Self::MismatchedSource { .. } => ErrorCode::InvalidInput,
            Self::OrdinalOutOfRange { .. }
            | Self::PercentageOutOfRange { .. }
            | Self::NonPositiveMeasurement { .. }
            | Self::AgeOutOfRange { .. }
            | Self::UnsupportedTrainingDays(_)
            | Self::DurationOutOfRange { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let field = error.field();
        Self::new(error.code(), error.to_string())
            .with_details(serde_json::json!({ "field": field }))
            .with_source(error)
    }
}
