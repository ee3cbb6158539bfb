//! Closeness Evaluator - Relative closeness to the ideal solution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DistanceSet, Separation};

/// Coefficient assigned when a row sits on both reference vectors at once.
pub const NEUTRAL_CLOSENESS: f64 = 0.5;

/// Closeness coefficients of a run, each in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosenessScores {
    pub alternatives: Vec<f64>,
    pub profiles: Vec<f64>,
}

/// Turns distance pairs into closeness coefficients.
pub struct ClosenessEvaluator;

impl ClosenessEvaluator {
    /// `d- / (d+ + d-)` for every alternative and every profile.
    pub fn evaluate(distances: &DistanceSet) -> ClosenessScores {
        let alternatives = distances
            .alternatives
            .iter()
            .enumerate()
            .map(|(i, d)| Self::coefficient(d.separation(), "alternative", i))
            .collect();

        let profiles = distances
            .profiles
            .iter()
            .enumerate()
            .map(|(k, s)| Self::coefficient(*s, "profile", k))
            .collect();

        let scores = ClosenessScores {
            alternatives,
            profiles,
        };
        debug!(
            alternatives = ?scores.alternatives,
            profiles = ?scores.profiles,
            "Evaluated closeness coefficients"
        );
        scores
    }

    /// Closeness of a single separation pair.
    ///
    /// # Edge Cases
    /// Both distances zero: returns [`NEUTRAL_CLOSENESS`].
    pub fn closeness(separation: Separation) -> f64 {
        let total = separation.to_ideal + separation.to_anti_ideal;
        if total > 0.0 {
            (separation.to_anti_ideal / total).clamp(0.0, 1.0)
        } else {
            NEUTRAL_CLOSENESS
        }
    }

    fn coefficient(separation: Separation, kind: &'static str, index: usize) -> f64 {
        if separation.to_ideal + separation.to_anti_ideal <= 0.0 {
            debug!(kind, index, "Degenerate row, using neutral closeness");
        }
        Self::closeness(separation)
    }
}
