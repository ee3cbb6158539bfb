//! Matrix Assembler - Builds the augmented decision space.

use tracing::debug;

use super::SortingError;
use crate::domain::foundation::Matrix;

/// Alternatives, then profiles, then the column-wise max and min rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    matrix: Matrix,
    alternatives: usize,
    profiles: usize,
}

impl AugmentedMatrix {
    /// The full (m + p + 2) x n matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Number of alternative rows (m).
    pub fn alternative_count(&self) -> usize {
        self.alternatives
    }

    /// Number of boundary profile rows (p).
    pub fn profile_count(&self) -> usize {
        self.profiles
    }

    /// Number of criteria (n).
    pub fn criterion_count(&self) -> usize {
        self.matrix.column_count()
    }

    /// Rebuilds the wrapper around a transformed matrix of the same layout.
    pub(crate) fn with_matrix(&self, matrix: Matrix) -> Self {
        debug_assert_eq!(matrix.row_count(), self.matrix.row_count());
        Self {
            matrix,
            alternatives: self.alternatives,
            profiles: self.profiles,
        }
    }
}

/// Builds the augmented matrix from raw inputs.
pub struct MatrixAssembler;

impl MatrixAssembler {
    /// Stacks alternatives, profiles and the decision matrix's domain rows.
    ///
    /// The domain rows are the column-wise max and min of the decision
    /// matrix only; profiles do not widen them.
    ///
    /// # Errors
    /// - `EmptyInput` when there are no alternatives, profiles or criteria
    /// - `DimensionMismatch` when the profiles have a different column count
    pub fn assemble(decision: &Matrix, profiles: &Matrix) -> Result<AugmentedMatrix, SortingError> {
        if decision.is_empty() {
            return Err(SortingError::EmptyInput("decision matrix has no alternatives"));
        }
        if decision.column_count() == 0 {
            return Err(SortingError::EmptyInput("decision matrix has no criteria"));
        }
        if profiles.is_empty() {
            return Err(SortingError::EmptyInput("no boundary profiles"));
        }
        if profiles.column_count() != decision.column_count() {
            return Err(SortingError::dimension_mismatch(
                "boundary profiles",
                decision.column_count(),
                profiles.column_count(),
            ));
        }

        let max_row = Matrix::from_row(decision.column_max())?;
        let min_row = Matrix::from_row(decision.column_min())?;
        let matrix = Matrix::vstack(&[decision, profiles, &max_row, &min_row])?;

        debug!(
            alternatives = decision.row_count(),
            profiles = profiles.row_count(),
            criteria = decision.column_count(),
            "Assembled augmented matrix"
        );

        Ok(AugmentedMatrix {
            matrix,
            alternatives: decision.row_count(),
            profiles: profiles.row_count(),
        })
    }

    /// Single profile at the column-wise mean of the decision matrix.
    ///
    /// Used when the caller has no boundary profiles of its own.
    pub fn central_profile(decision: &Matrix) -> Result<Matrix, SortingError> {
        if decision.is_empty() {
            return Err(SortingError::EmptyInput("decision matrix has no alternatives"));
        }
        Ok(Matrix::from_row(decision.column_mean())?)
    }
}
