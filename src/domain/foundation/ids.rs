//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a single classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random RunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RunId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One-based index of a boundary profile class.
///
/// Index 1 is the first profile row supplied by the caller. Zero is never a
/// valid class, including on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ClassIndex(usize);

impl ClassIndex {
    /// Creates a ClassIndex from a zero-based profile position.
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// Returns the one-based value.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Returns the zero-based profile position.
    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for ClassIndex {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(ValidationError::invalid_format(
                "class_index",
                "must be at least 1",
            ));
        }
        Ok(Self(value))
    }
}

impl From<ClassIndex> for usize {
    fn from(index: ClassIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ClassIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
