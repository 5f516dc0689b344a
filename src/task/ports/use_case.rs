//! Application-facing contract for task operations.
//!
//! Callers such as request handlers depend on [`TaskUseCase`] alone and only
//! ever see [`TaskUseCaseError`], never the storage layer's error type.

use crate::task::{
    domain::{InvalidStatusCode, Task, TaskId, TaskStatus},
    ports::TaskRepositoryError,
};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for task use-case operations.
pub type TaskUseCaseResult<T> = Result<T, TaskUseCaseError>;

/// Task operations offered to external callers.
#[async_trait]
pub trait TaskUseCase: Send + Sync {
    /// Returns every task. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::InvalidStatusCode`] when stored data is
    /// malformed.
    async fn list_tasks(&self) -> TaskUseCaseResult<Vec<Task>>;

    /// Creates a new incomplete task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::Repository`] when the backing store fails.
    async fn create_task(&self, name: String) -> TaskUseCaseResult<Task>;

    /// Replaces the task at `id` with the given name and status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::NotFound`] when no task exists at `id`.
    async fn update_task(
        &self,
        name: String,
        status: TaskStatus,
        id: TaskId,
    ) -> TaskUseCaseResult<Task>;

    /// Deletes the task at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::NotFound`] when no task exists at `id`.
    async fn delete_task(&self, id: TaskId) -> TaskUseCaseResult<()>;
}

/// Errors surfaced by task use cases.
#[derive(Debug, Clone, Error)]
pub enum TaskUseCaseError {
    /// The task was not found.
    #[error("task id: {0} not found in task service")]
    NotFound(TaskId),

    /// Stored data carried a status code outside the known set.
    #[error(transparent)]
    InvalidStatusCode(InvalidStatusCode),

    /// Any other storage failure, passed through untouched.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}
