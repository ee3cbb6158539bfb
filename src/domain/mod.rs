//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (matrix, IDs, timestamps, errors)
//! - `sorting` - The TOPSIS-Sort-C classification pipeline

pub mod foundation;
pub mod sorting;
