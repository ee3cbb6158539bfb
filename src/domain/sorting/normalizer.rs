//! Normalizer - Rescales criteria onto a common unitless scale.

use tracing::{debug, warn};

use super::{AugmentedMatrix, DegenerateCriterionPolicy, NormalizationMethod, SortingError};
use crate::domain::foundation::Matrix;

/// Column-wise normalization of the augmented matrix.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes the augmented matrix, keeping its row layout.
    pub fn normalize(
        augmented: &AugmentedMatrix,
        method: NormalizationMethod,
        policy: DegenerateCriterionPolicy,
    ) -> Result<AugmentedMatrix, SortingError> {
        let normalized = Self::normalize_matrix(augmented.matrix(), method, policy)?;
        Ok(augmented.with_matrix(normalized))
    }

    /// Normalizes any matrix column by column.
    ///
    /// # Algorithm
    /// - `Max`: `x / max(column)`
    /// - `Interval`: `(x - min(column)) / (max(column) - min(column))`
    ///
    /// Extremes are taken over every row of `matrix`.
    ///
    /// # Edge Cases
    /// A column is degenerate when its range is zero (interval) or its
    /// maximum is not positive (max). The latter covers all-zero columns and
    /// all-negative columns, whose divisor is nonzero but would flip their
    /// order. Under `Neutralize` every value of such a column becomes 0;
    /// under `Reject` the call fails.
    pub fn normalize_matrix(
        matrix: &Matrix,
        method: NormalizationMethod,
        policy: DegenerateCriterionPolicy,
    ) -> Result<Matrix, SortingError> {
        let max = matrix.column_max();
        let min = matrix.column_min();

        // (offset, divisor) per column; None marks a degenerate column
        let scales: Vec<Option<(f64, f64)>> = max
            .iter()
            .zip(&min)
            .map(|(&hi, &lo)| match method {
                NormalizationMethod::Max if hi > 0.0 => Some((0.0, hi)),
                NormalizationMethod::Interval if hi - lo > 0.0 => Some((lo, hi - lo)),
                _ => None,
            })
            .collect();

        for (column, scale) in scales.iter().enumerate() {
            if scale.is_none() {
                match policy {
                    DegenerateCriterionPolicy::Reject => {
                        return Err(SortingError::DegenerateCriterion { column });
                    }
                    DegenerateCriterionPolicy::Neutralize => {
                        warn!(column, method = %method, "Degenerate criterion neutralized to 0");
                    }
                }
            }
        }

        let normalized = matrix.map_cells(|c, v| match scales[c] {
            Some((offset, divisor)) => (v - offset) / divisor,
            None => 0.0,
        });

        debug!(method = %method, rows = normalized.row_count(), "Normalized matrix");

        Ok(normalized)
    }
}
