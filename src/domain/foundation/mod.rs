//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the matrix type, and error types
//! that form the vocabulary of the sorting domain.

mod errors;
mod ids;
mod matrix;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClassIndex, RunId};
pub use matrix::{euclidean_distance, Matrix};
pub use timestamp::Timestamp;
