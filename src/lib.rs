//! TOPSIS-Sort-C - Multi-criteria sorting into ordered classes
//!
//! This crate classifies alternatives described by numeric criteria into
//! ordered classes delimited by boundary profiles, using closeness
//! coefficients to an ideal and an anti-ideal solution.
//!
//! The domain pipeline lives in [`domain::sorting`]; [`ports`] and
//! [`adapters`] load decision tables; [`application`] runs a classification
//! end to end.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::foundation::Matrix;
pub use domain::sorting::{classify, ClassAssignment, SortingError, SortingOptions, Weights};
