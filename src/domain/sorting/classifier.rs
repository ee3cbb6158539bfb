//! Classifier - Assigns alternatives to profile classes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AssignmentMode, ClosenessScores};
use crate::domain::foundation::ClassIndex;

/// Binary verdict of an alternative against one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Adequate,
    Inadequate,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Adequate => "Adequate",
            Verdict::Inadequate => "Inadequate",
        }
    }

    pub fn is_adequate(&self) -> bool {
        matches!(self, Verdict::Adequate)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome for one alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassAssignment {
    /// Nearest-profile class, one-based.
    Class(ClassIndex),
    /// One verdict per profile, in profile order.
    Verdicts(Vec<Verdict>),
}

impl ClassAssignment {
    /// The class index in nearest mode.
    pub fn class_index(&self) -> Option<ClassIndex> {
        match self {
            ClassAssignment::Class(index) => Some(*index),
            ClassAssignment::Verdicts(_) => None,
        }
    }

    /// The verdicts in binary mode.
    pub fn verdicts(&self) -> Option<&[Verdict]> {
        match self {
            ClassAssignment::Class(_) => None,
            ClassAssignment::Verdicts(v) => Some(v),
        }
    }
}

impl fmt::Display for ClassAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassAssignment::Class(index) => write!(f, "{}", index),
            ClassAssignment::Verdicts(verdicts) => {
                let labels: Vec<&str> = verdicts.iter().map(Verdict::label).collect();
                write!(f, "{}", labels.join(", "))
            }
        }
    }
}

/// Comparison of alternative closeness against profile closeness.
pub struct Classifier;

impl Classifier {
    /// Assigns every alternative, preserving input order.
    pub fn assign(scores: &ClosenessScores, mode: AssignmentMode) -> Vec<ClassAssignment> {
        scores
            .alternatives
            .iter()
            .map(|&closeness| match mode {
                AssignmentMode::Binary => {
                    ClassAssignment::Verdicts(Self::verdicts(closeness, &scores.profiles))
                }
                AssignmentMode::Nearest => {
                    ClassAssignment::Class(Self::nearest(closeness, &scores.profiles))
                }
            })
            .collect()
    }

    /// Adequate for every profile whose closeness does not exceed the alternative's.
    pub fn verdicts(closeness: f64, profiles: &[f64]) -> Vec<Verdict> {
        profiles
            .iter()
            .map(|&profile| {
                if closeness >= profile {
                    Verdict::Adequate
                } else {
                    Verdict::Inadequate
                }
            })
            .collect()
    }

    /// Profile minimizing `|closeness - profile|`.
    ///
    /// # Edge Cases
    /// - Ties: lowest profile index wins
    /// - No profiles: class 1 (the assembler rejects this case upstream)
    pub fn nearest(closeness: f64, profiles: &[f64]) -> ClassIndex {
        let mut best = 0;
        let mut best_gap = f64::INFINITY;

        for (k, &profile) in profiles.iter().enumerate() {
            let gap = (closeness - profile).abs();
            // strict comparison keeps the first minimum
            if gap < best_gap {
                best = k;
                best_gap = gap;
            }
        }

        ClassIndex::from_position(best)
    }
}
