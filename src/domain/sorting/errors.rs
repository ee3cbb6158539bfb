//! Errors raised by the sorting pipeline.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failure of a single classification run. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortingError {
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Criterion {column} is degenerate: its range is zero or it has no positive maximum")]
    DegenerateCriterion { column: usize },

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SortingError {
    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        SortingError::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Creates an invalid configuration error for an unknown option value.
    pub fn unknown_option(option: &str, value: &str, expected: &str) -> Self {
        SortingError::InvalidConfiguration(format!(
            "unknown {} '{}', expected one of: {}",
            option, value, expected
        ))
    }

    /// Stable error code for presentation layers.
    pub fn code(&self) -> ErrorCode {
        match self {
            SortingError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            SortingError::InvalidConfiguration(_) => ErrorCode::InvalidConfiguration,
            SortingError::DegenerateCriterion { .. } => ErrorCode::DegenerateCriterion,
            SortingError::InvalidWeights(_) => ErrorCode::InvalidWeights,
            SortingError::EmptyInput(_) => ErrorCode::EmptyInput,
            SortingError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<SortingError> for DomainError {
    fn from(err: SortingError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            SortingError::DimensionMismatch {
                what,
                expected,
                actual,
            } => domain
                .with_detail("what", what)
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            SortingError::DegenerateCriterion { column } => {
                domain.with_detail("column", column.to_string())
            }
            _ => domain,
        }
    }
}
