//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Input Ports
//!
//! - `DecisionDataSource` - Loads decision matrix, profiles and weights

mod decision_data_source;

pub use decision_data_source::{DataSourceError, DecisionDataSource, DecisionInput};
