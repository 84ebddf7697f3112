//! Error types for the options risk engine.
//!
//! Every fallible operation in this crate happens at construction time:
//! strategy calculators validate their inputs once and metric computation
//! never fails afterwards. Degenerate arithmetic (division by zero in return
//! or annualization formulas) is defined to yield zero and is not an error.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected position input, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Name of the input field that failed validation (e.g. `"strike"`).
    pub field: &'static str,
    /// Human readable reason.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error for `field`.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Returns the name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Position input failed business-rule validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Risk threshold bands are inconsistent with each other.
    #[error("invalid risk thresholds: {field} {reason}")]
    InvalidThresholds {
        /// Threshold field that broke the band ordering.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// JSON thresholds or strategy input could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Creates a validation error for `field`.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(field, message))
    }

    /// Creates an invalid thresholds error.
    #[must_use]
    pub fn invalid_thresholds(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidThresholds {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the validation error if this is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the offending field name for validation and threshold errors.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.field),
            Self::InvalidThresholds { field, .. } => Some(*field),
            Self::Config(_) => None,
        }
    }
}
