//! Command handlers for the application layer.

pub mod sorting;

pub use sorting::{ClassificationReport, ClassifyCommand, ClassifyError, ClassifyHandler};
