//! In-Memory Data Source Adapter
//!
//! Serves a pre-built `DecisionInput`. Useful for testing and for callers
//! that already hold their matrices.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{DataSourceError, DecisionDataSource, DecisionInput};

/// In-memory decision data source
#[derive(Debug, Clone)]
pub struct InMemoryDataSource {
    input: Arc<RwLock<DecisionInput>>,
}

impl InMemoryDataSource {
    /// Create a source serving `input`
    pub fn new(input: DecisionInput) -> Self {
        Self {
            input: Arc::new(RwLock::new(input)),
        }
    }

    /// Replace the served input (useful for tests)
    pub async fn replace(&self, input: DecisionInput) {
        *self.input.write().await = input;
    }
}

#[async_trait]
impl DecisionDataSource for InMemoryDataSource {
    async fn load(&self) -> Result<DecisionInput, DataSourceError> {
        Ok(self.input.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
