//! Task value type.

use super::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// A tracked unit of work.
///
/// Tasks are immutable values. Updating a task replaces it wholesale with a
/// new value carrying the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    status: TaskStatus,
}

impl Task {
    /// Creates a task from its parts.
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}
