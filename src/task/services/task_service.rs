//! Service layer implementing the task use cases over a repository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{
        TaskRepository, TaskRepositoryError, TaskUseCase, TaskUseCaseError, TaskUseCaseResult,
    },
};

/// Task use-case service.
///
/// Delegates every operation to the injected repository and converts
/// repository errors into [`TaskUseCaseError`] so callers never depend on
/// the storage layer.
#[derive(Debug)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the repository this service delegates to.
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Creates a task from any string-like name.
    ///
    /// # Errors
    ///
    /// See [`TaskUseCase::create_task`].
    pub async fn create(&self, name: impl Into<String> + Send) -> TaskUseCaseResult<Task> {
        self.create_task(name.into()).await
    }
}

/// Maps repository errors that callers may observe unchanged.
fn pass_through(err: TaskRepositoryError) -> TaskUseCaseError {
    match err {
        TaskRepositoryError::InvalidStatusCode(code) => TaskUseCaseError::InvalidStatusCode(code),
        other => TaskUseCaseError::Repository(other),
    }
}

#[async_trait]
impl<R> TaskUseCase for TaskService<R>
where
    R: TaskRepository,
{
    async fn list_tasks(&self) -> TaskUseCaseResult<Vec<Task>> {
        self.repository.list().await.map_err(pass_through)
    }

    async fn create_task(&self, name: String) -> TaskUseCaseResult<Task> {
        self.repository.create(name).await.map_err(pass_through)
    }

    async fn update_task(
        &self,
        name: String,
        status: TaskStatus,
        id: TaskId,
    ) -> TaskUseCaseResult<Task> {
        match self.repository.update(name, status, id).await {
            Ok(task) => Ok(task),
            Err(TaskRepositoryError::NotFound(missing)) => {
                debug!(task_id = %missing, "update target missing");
                Err(TaskUseCaseError::NotFound(missing))
            }
            Err(other) => Err(pass_through(other)),
        }
    }

    async fn delete_task(&self, id: TaskId) -> TaskUseCaseResult<()> {
        match self.repository.delete(id).await {
            Ok(()) => Ok(()),
            Err(TaskRepositoryError::NotFound(missing)) => {
                debug!(task_id = %missing, "delete target missing");
                Err(TaskUseCaseError::NotFound(missing))
            }
            Err(other) => Err(pass_through(other)),
        }
    }
}
