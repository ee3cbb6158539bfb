//! Filesystem adapter reading decision data from CSV files.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::parser;
use crate::ports::{DataSourceError, DecisionDataSource, DecisionInput};

/// CSV-backed decision data source.
///
/// The decision matrix and weights are required. Profiles, criterion kinds
/// and class labels each live in their own optional file.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    decision: PathBuf,
    weights: PathBuf,
    profiles: Option<PathBuf>,
    criteria: Option<PathBuf>,
    labels: Option<PathBuf>,
}

impl CsvDataSource {
    pub fn new(decision: impl AsRef<Path>, weights: impl AsRef<Path>) -> Self {
        Self {
            decision: decision.as_ref().to_path_buf(),
            weights: weights.as_ref().to_path_buf(),
            profiles: None,
            criteria: None,
            labels: None,
        }
    }

    pub fn with_profiles(mut self, path: impl AsRef<Path>) -> Self {
        self.profiles = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_criteria(mut self, path: impl AsRef<Path>) -> Self {
        self.criteria = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_labels(mut self, path: impl AsRef<Path>) -> Self {
        self.labels = Some(path.as_ref().to_path_buf());
        self
    }

    async fn read(path: &Path) -> Result<(String, String), DataSourceError> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataSourceError::NotFound(path_str.clone())
            } else {
                DataSourceError::Io(format!("Failed to read {}: {}", path_str, e))
            }
        })?;

        debug!(path = %path_str, bytes = content.len(), "Read CSV file");
        Ok((path_str, content))
    }
}

#[async_trait]
impl DecisionDataSource for CsvDataSource {
    async fn load(&self) -> Result<DecisionInput, DataSourceError> {
        let (path, content) = Self::read(&self.decision).await?;
        let decision = parser::parse_matrix(&path, &content)?;

        let (path, content) = Self::read(&self.weights).await?;
        let weights = parser::parse_weights(&path, &content)?;

        let profiles = match &self.profiles {
            Some(file) => {
                let (path, content) = Self::read(file).await?;
                Some(parser::parse_matrix(&path, &content)?)
            }
            None => None,
        };

        let criteria = match &self.criteria {
            Some(file) => {
                let (path, content) = Self::read(file).await?;
                parser::parse_criteria(&path, &content)?
            }
            None => Vec::new(),
        };

        let labels = match &self.labels {
            Some(file) => {
                let (path, content) = Self::read(file).await?;
                parser::parse_labels(&path, &content)?
            }
            None => Vec::new(),
        };

        Ok(DecisionInput {
            decision,
            profiles,
            weights,
            criteria,
            labels,
        })
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.decision.display())
    }
}
