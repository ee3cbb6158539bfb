//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Value at row {row}, column {column} is not finite")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a ragged rows validation error.
    pub fn ragged_rows(row: usize, expected: usize, actual: usize) -> Self {
        ValidationError::RaggedRows {
            row,
            expected,
            actual,
        }
    }

    /// Creates a non-finite value validation error.
    pub fn non_finite(row: usize, column: usize) -> Self {
        ValidationError::NonFiniteValue { row, column }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyInput,
    DimensionMismatch,
    InvalidWeights,

    // Configuration errors
    InvalidConfiguration,

    // Numerical errors
    DegenerateCriterion,

    // Infrastructure errors
    DataSourceError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::InvalidWeights => "INVALID_WEIGHTS",
            ErrorCode::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorCode::DegenerateCriterion => "DEGENERATE_CRITERION",
            ErrorCode::DataSourceError => "DATA_SOURCE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
