//! Task completion status and its integer wire representation.

use super::InvalidStatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a task.
///
/// Each variant carries the integer code used when the status is stored or
/// serialised: `0` for incomplete and `1` for complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TaskStatus {
    /// Work on the task has not finished.
    Incomplete = 0,
    /// The task is done.
    Complete = 1,
}

impl TaskStatus {
    /// Returns the integer storage code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Incomplete => 0,
            Self::Complete => 1,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }
}

impl TryFrom<i64> for TaskStatus {
    type Error = InvalidStatusCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Incomplete),
            1 => Ok(Self::Complete),
            _ => Err(InvalidStatusCode(code)),
        }
    }
}

impl From<TaskStatus> for i64 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
