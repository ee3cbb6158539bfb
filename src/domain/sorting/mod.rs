//! Sorting Module - TOPSIS-Sort-C classification pipeline.
//!
//! Stateless domain services that sort alternatives into ordered classes
//! defined by boundary profiles.
//!
//! # Components
//!
//! - `MatrixAssembler` - Augmented matrix (alternatives, profiles, domain rows)
//! - `Normalizer` - Max or interval rescaling per criterion
//! - `Weighter` - Renormalized criterion weights applied per column
//! - `IdealSolutionFinder` - Ideal and anti-ideal vectors over the reference rows
//! - `DistanceCalculator` - Euclidean separations
//! - `ClosenessEvaluator` - Closeness coefficients in [0, 1]
//! - `Classifier` - Binary verdicts or nearest-profile classes
//!
//! # Design Philosophy
//!
//! Every stage takes immutable input and returns a new value. There is no
//! I/O here; loading and rendering live in ports and adapters.

mod classifier;
mod closeness_evaluator;
mod distance_calculator;
mod errors;
mod ideal_solution;
mod matrix_assembler;
mod normalizer;
mod options;
mod pipeline;
mod weighter;

pub use classifier::{ClassAssignment, Classifier, Verdict};
pub use closeness_evaluator::{ClosenessEvaluator, ClosenessScores, NEUTRAL_CLOSENESS};
pub use distance_calculator::{AlternativeDistances, DistanceCalculator, DistanceSet, Separation};
pub use errors::SortingError;
pub use ideal_solution::{IdealSolution, IdealSolutionFinder};
pub use matrix_assembler::{AugmentedMatrix, MatrixAssembler};
pub use normalizer::Normalizer;
pub use options::{
    AssignmentMode, CriterionKind, DegenerateCriterionPolicy, NormalizationMethod, ReferenceRows,
    SortingOptions,
};
pub use pipeline::{classify, SortingOutcome, TopsisSortC};
pub use weighter::{WeightedMatrix, Weighter, Weights};
