//! Configuration for the in-memory task repository.

use serde::{Deserialize, Serialize};

/// Strategy used to assign identifiers to newly created tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAssignment {
    /// Assigns `record count + 1`.
    ///
    /// After a deletion the computed identifier can collide with a live
    /// record, in which case the new task overwrites it.
    #[default]
    RecordCount,
    /// Assigns one more than the largest identifier the store has held, so
    /// identifiers are never reused.
    Monotonic,
}

/// Settings for [`super::InMemoryTaskRepository`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskRepositoryConfig {
    /// Identifier assignment strategy for `create`.
    pub id_assignment: IdAssignment,
}

impl TaskRepositoryConfig {
    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id_assignment: IdAssignment::RecordCount,
        }
    }

    /// Sets the identifier assignment strategy.
    #[must_use]
    pub const fn with_id_assignment(mut self, id_assignment: IdAssignment) -> Self {
        self.id_assignment = id_assignment;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not valid JSON, names
    /// an unknown field, or names an unknown strategy.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
