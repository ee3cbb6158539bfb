//! Pipeline - Runs every stage of TOPSIS-Sort-C in order.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use super::{
    ClassAssignment, Classifier, ClosenessEvaluator, ClosenessScores, DistanceCalculator,
    DistanceSet, IdealSolution, IdealSolutionFinder, MatrixAssembler, Normalizer, SortingError,
    SortingOptions, Weighter, Weights,
};
use crate::domain::foundation::Matrix;

/// Every intermediate value of a run, for diagnostics and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingOutcome {
    /// Normalized augmented matrix, domain rows included.
    pub normalized: Matrix,
    /// Weighted alternative and profile rows.
    pub weighted: Matrix,
    pub ideal_solution: IdealSolution,
    pub distances: DistanceSet,
    pub closeness: ClosenessScores,
    /// One entry per alternative, in input order.
    pub assignments: Vec<ClassAssignment>,
}

/// A configured TOPSIS-Sort-C classifier.
///
/// Holds only options; each run is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct TopsisSortC {
    options: SortingOptions,
}

impl TopsisSortC {
    pub fn new(options: SortingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SortingOptions {
        &self.options
    }

    /// Runs the full pipeline and keeps every intermediate result.
    ///
    /// # Errors
    /// Any `SortingError`; no partial outcome is returned.
    pub fn run(
        &self,
        decision: &Matrix,
        profiles: &Matrix,
        weights: &Weights,
    ) -> Result<SortingOutcome, SortingError> {
        let span = debug_span!(
            "topsis_sort_c",
            method = %self.options.method,
            reference_rows = %self.options.reference_rows,
            mode = %self.options.mode,
        );
        let _guard = span.enter();

        let augmented = MatrixAssembler::assemble(decision, profiles)?;
        let criteria = self.options.criteria_for(augmented.criterion_count())?;

        let normalized = Normalizer::normalize(
            &augmented,
            self.options.method,
            self.options.degenerate_criterion,
        )?;
        let weighted = Weighter::apply(&normalized, weights)?;
        let ideal_solution =
            IdealSolutionFinder::find(&weighted, self.options.reference_rows, &criteria);
        let distances = DistanceCalculator::compute(&weighted, &ideal_solution);
        let closeness = ClosenessEvaluator::evaluate(&distances);
        let assignments = Classifier::assign(&closeness, self.options.mode);

        Ok(SortingOutcome {
            normalized: normalized.matrix().clone(),
            weighted: weighted.matrix().clone(),
            ideal_solution,
            distances,
            closeness,
            assignments,
        })
    }

    /// Runs the pipeline and returns only the assignments.
    pub fn classify(
        &self,
        decision: &Matrix,
        profiles: &Matrix,
        weights: &Weights,
    ) -> Result<Vec<ClassAssignment>, SortingError> {
        self.run(decision, profiles, weights)
            .map(|outcome| outcome.assignments)
    }
}

/// Classifies every alternative of `decision` against `profiles`.
///
/// Returns exactly one assignment per decision row, in row order.
pub fn classify(
    decision: &Matrix,
    profiles: &Matrix,
    weights: &Weights,
    options: &SortingOptions,
) -> Result<Vec<ClassAssignment>, SortingError> {
    TopsisSortC::new(options.clone()).classify(decision, profiles, weights)
}
