//! Repository port for task persistence.

use crate::task::domain::{InvalidStatusCode, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations may suspend on storage access; callers must not assume
/// the operations complete synchronously.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::InvalidStatusCode`] when a stored record
    /// carries an unknown status code.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Stores a new incomplete task with a freshly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    async fn create(&self, name: String) -> TaskRepositoryResult<Task>;

    /// Replaces the task stored at `id` with the given name and status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task exists at `id`.
    async fn update(
        &self,
        name: String,
        status: TaskStatus,
        id: TaskId,
    ) -> TaskRepositoryResult<Task>;

    /// Removes the task stored at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task exists at `id`.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task id: {0} not found in task repository")]
    NotFound(TaskId),

    /// A stored record carries a status code outside the known set.
    #[error(transparent)]
    InvalidStatusCode(#[from] InvalidStatusCode),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
