//! Distance Calculator - Euclidean separations in weighted criterion space.

use serde::{Deserialize, Serialize};

use super::{IdealSolution, WeightedMatrix};
use crate::domain::foundation::euclidean_distance;

/// Separation of one row from the two reference vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_ideal: f64,
    pub to_anti_ideal: f64,
}

impl Separation {
    fn of(row: &[f64], solution: &IdealSolution) -> Self {
        Self {
            to_ideal: euclidean_distance(row, &solution.ideal),
            to_anti_ideal: euclidean_distance(row, &solution.anti_ideal),
        }
    }
}

/// Distances of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeDistances {
    pub to_ideal: f64,
    pub to_anti_ideal: f64,
    /// Distance to each weighted boundary profile, in profile order.
    pub to_profiles: Vec<f64>,
}

impl AlternativeDistances {
    pub fn separation(&self) -> Separation {
        Separation {
            to_ideal: self.to_ideal,
            to_anti_ideal: self.to_anti_ideal,
        }
    }
}

/// All distances of a run, indexed by original row position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceSet {
    pub alternatives: Vec<AlternativeDistances>,
    pub profiles: Vec<Separation>,
}

/// Computes every distance the closeness evaluator needs.
pub struct DistanceCalculator;

impl DistanceCalculator {
    pub fn compute(weighted: &WeightedMatrix, solution: &IdealSolution) -> DistanceSet {
        let profiles: Vec<&[f64]> = (0..weighted.profile_count())
            .map(|k| weighted.profile_row(k))
            .collect();

        let alternatives = (0..weighted.alternative_count())
            .map(|i| {
                let row = weighted.alternative_row(i);
                let separation = Separation::of(row, solution);
                AlternativeDistances {
                    to_ideal: separation.to_ideal,
                    to_anti_ideal: separation.to_anti_ideal,
                    to_profiles: profiles
                        .iter()
                        .map(|profile| euclidean_distance(row, profile))
                        .collect(),
                }
            })
            .collect();

        let profile_separations = profiles
            .iter()
            .map(|profile| Separation::of(profile, solution))
            .collect();

        DistanceSet {
            alternatives,
            profiles: profile_separations,
        }
    }
}
