//! Weighter - Applies criterion weights to the normalized matrix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AugmentedMatrix, SortingError};
use crate::domain::foundation::Matrix;

/// Criterion weights, raw or already summing to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(Vec<f64>);

impl Weights {
    /// Wraps raw weights. Validation happens when they are normalized.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Raw values as supplied.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weights rescaled to sum to one.
    ///
    /// # Errors
    /// `InvalidWeights` if any weight is negative or not finite, or if the
    /// sum is zero.
    pub fn normalized(&self) -> Result<Vec<f64>, SortingError> {
        for (i, w) in self.0.iter().enumerate() {
            if !w.is_finite() {
                return Err(SortingError::InvalidWeights(format!(
                    "weight {} is not finite",
                    i
                )));
            }
            if *w < 0.0 {
                return Err(SortingError::InvalidWeights(format!(
                    "weight {} is negative ({})",
                    i, w
                )));
            }
        }

        let sum: f64 = self.0.iter().sum();
        if sum <= 0.0 {
            return Err(SortingError::InvalidWeights("weights sum to zero".to_string()));
        }

        Ok(self.0.iter().map(|w| w / sum).collect())
    }
}

impl From<Vec<f64>> for Weights {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Weighted-normalized rows: alternatives first, then profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMatrix {
    matrix: Matrix,
    alternatives: usize,
}

impl WeightedMatrix {
    /// All (m + p) weighted rows.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives
    }

    pub fn profile_count(&self) -> usize {
        self.matrix.row_count() - self.alternatives
    }

    /// Weighted alternative rows.
    pub fn alternatives(&self) -> Matrix {
        self.matrix.slice_rows(0..self.alternatives)
    }

    /// Weighted boundary profile rows.
    pub fn profiles(&self) -> Matrix {
        self.matrix
            .slice_rows(self.alternatives..self.matrix.row_count())
    }

    pub fn alternative_row(&self, index: usize) -> &[f64] {
        self.matrix.row(index)
    }

    pub fn profile_row(&self, index: usize) -> &[f64] {
        self.matrix.row(self.alternatives + index)
    }
}

/// Applies weights column by column.
pub struct Weighter;

impl Weighter {
    /// Drops the two domain rows and scales each column by its weight.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the weights length differs from the criteria count
    /// - `InvalidWeights` from [`Weights::normalized`]
    pub fn apply(normalized: &AugmentedMatrix, weights: &Weights) -> Result<WeightedMatrix, SortingError> {
        let n = normalized.criterion_count();
        if weights.len() != n {
            return Err(SortingError::dimension_mismatch("weights", n, weights.len()));
        }

        let w = weights.normalized()?;
        let rows = normalized.alternative_count() + normalized.profile_count();
        let matrix = normalized
            .matrix()
            .slice_rows(0..rows)
            .map_cells(|c, v| v * w[c]);

        debug!(weights = ?w, rows, "Applied normalized weights");

        Ok(WeightedMatrix {
            matrix,
            alternatives: normalized.alternative_count(),
        })
    }
}
