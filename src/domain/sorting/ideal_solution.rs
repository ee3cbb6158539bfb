//! Ideal Solution Finder - Ideal and anti-ideal reference vectors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CriterionKind, ReferenceRows, WeightedMatrix};
use crate::domain::foundation::Matrix;

/// Best and worst attainable weighted value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolution {
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
}

/// Extracts the reference vectors from the weighted matrix.
pub struct IdealSolutionFinder;

impl IdealSolutionFinder {
    /// Column-wise best and worst values over the chosen reference rows.
    ///
    /// For a benefit criterion the ideal is the column maximum; for a cost
    /// criterion it is the column minimum. `criteria` must have one entry per
    /// column.
    pub fn find(
        weighted: &WeightedMatrix,
        reference_rows: ReferenceRows,
        criteria: &[CriterionKind],
    ) -> IdealSolution {
        let reference = Self::reference_matrix(weighted, reference_rows);
        let max = reference.column_max();
        let min = reference.column_min();

        let (ideal, anti_ideal) = criteria
            .iter()
            .enumerate()
            .map(|(c, kind)| match kind {
                CriterionKind::Benefit => (max[c], min[c]),
                CriterionKind::Cost => (min[c], max[c]),
            })
            .unzip();

        let solution = IdealSolution { ideal, anti_ideal };
        debug!(
            reference_rows = %reference_rows,
            ideal = ?solution.ideal,
            anti_ideal = ?solution.anti_ideal,
            "Found ideal solutions"
        );
        solution
    }

    fn reference_matrix(weighted: &WeightedMatrix, reference_rows: ReferenceRows) -> Matrix {
        if reference_rows.includes_profiles() {
            weighted.matrix().clone()
        } else {
            weighted.alternatives()
        }
    }
}
