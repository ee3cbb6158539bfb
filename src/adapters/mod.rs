//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `csv` - Decision tables read from headerless CSV files
//! - `memory` - Pre-built inputs held in memory

pub mod csv;
pub mod memory;

pub use csv::CsvDataSource;
pub use memory::InMemoryDataSource;
