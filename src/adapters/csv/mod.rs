//! CSV adapter - Headerless comma-separated decision tables.

mod data_source;
pub mod parser;

pub use data_source::CsvDataSource;
