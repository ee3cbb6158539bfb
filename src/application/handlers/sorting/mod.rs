//! Sorting handlers - Classification runs over a decision data source.

mod classify;
mod report;

pub use classify::{ClassifyCommand, ClassifyError, ClassifyHandler};
pub use report::ClassificationReport;
