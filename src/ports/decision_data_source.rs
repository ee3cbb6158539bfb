//! DecisionDataSource port - Supplies parsed matrices to the classifier.
//!
//! The sorting pipeline never reads files. Adapters behind this port turn
//! tables (CSV files, in-memory fixtures) into a [`DecisionInput`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Matrix, ValidationError};
use crate::domain::sorting::{CriterionKind, Weights};

/// Everything one classification run needs, already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionInput {
    /// m alternatives x n criteria.
    pub decision: Matrix,
    /// p boundary profiles x n criteria. `None` means "derive a central profile".
    #[serde(default)]
    pub profiles: Option<Matrix>,
    /// One weight per criterion.
    pub weights: Weights,
    /// Optional direction per criterion; empty means all benefit.
    #[serde(default)]
    pub criteria: Vec<CriterionKind>,
    /// Optional class name per profile.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl DecisionInput {
    pub fn new(decision: Matrix, profiles: Matrix, weights: Weights) -> Self {
        Self {
            decision,
            profiles: Some(profiles),
            weights,
            criteria: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: Vec<CriterionKind>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_labels(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Errors that can occur while loading decision data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataSourceError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("{path}:{line}:{column}: {reason}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("Invalid data in {source_name}: {error}")]
    Invalid {
        source_name: String,
        error: ValidationError,
    },
}

impl DataSourceError {
    pub fn invalid(source_name: impl Into<String>, error: ValidationError) -> Self {
        DataSourceError::Invalid {
            source_name: source_name.into(),
            error,
        }
    }
}

impl From<DataSourceError> for DomainError {
    fn from(err: DataSourceError) -> Self {
        DomainError::new(ErrorCode::DataSourceError, err.to_string())
    }
}

/// Loads the inputs of a classification run.
#[async_trait]
pub trait DecisionDataSource: Send + Sync {
    /// Load and parse all inputs.
    async fn load(&self) -> Result<DecisionInput, DataSourceError>;

    /// Human-readable description of where the data comes from.
    fn describe(&self) -> String;
}
