//! In-memory repository adapter for tasks.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{IdAssignment, StoreState, TaskRecord, TaskRepositoryConfig, TaskStore};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Task repository backed by an injected [`TaskStore`].
///
/// Every operation holds the store lock for its whole check-then-act
/// sequence, so a single call is atomic with respect to other callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: TaskStore,
    config: TaskRepositoryConfig,
}

impl InMemoryTaskRepository {
    /// Creates a repository over `store` with the default configuration.
    #[must_use]
    pub const fn new(store: TaskStore) -> Self {
        Self::with_config(store, TaskRepositoryConfig::new())
    }

    /// Creates a repository over `store` with an explicit configuration.
    #[must_use]
    pub const fn with_config(store: TaskStore, config: TaskRepositoryConfig) -> Self {
        Self { store, config }
    }

    /// Returns the backing store handle.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> TaskRepositoryConfig {
        self.config
    }

    fn assign_id(&self, state: &StoreState) -> TaskId {
        match self.config.id_assignment {
            IdAssignment::RecordCount => {
                let id = TaskId::after_count(state.records.len());
                if state.records.contains_key(&id) {
                    warn!(task_id = %id, "count-based id collides with a stored task");
                }
                id
            }
            IdAssignment::Monotonic => state.next_unused_id(),
        }
    }
}

fn decode(id: TaskId, record: &TaskRecord) -> TaskRepositoryResult<Task> {
    let status = TaskStatus::try_from(record.status)?;
    Ok(Task::new(id, record.name.clone(), status))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.store.read()?;
        let tasks = state
            .records
            .iter()
            .map(|(id, record)| decode(*id, record))
            .collect::<TaskRepositoryResult<Vec<_>>>()?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    async fn create(&self, name: String) -> TaskRepositoryResult<Task> {
        let mut state = self.store.write()?;
        let id = self.assign_id(&state);
        let status = TaskStatus::Incomplete;
        state.insert(id, TaskRecord::new(name.clone(), status.code()));
        debug!(task_id = %id, "created task");
        Ok(Task::new(id, name, status))
    }

    async fn update(
        &self,
        name: String,
        status: TaskStatus,
        id: TaskId,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.store.write()?;
        if !state.records.contains_key(&id) {
            return Err(TaskRepositoryError::NotFound(id));
        }

        state.insert(id, TaskRecord::new(name.clone(), status.code()));
        debug!(task_id = %id, %status, "updated task");
        Ok(Task::new(id, name, status))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.store.write()?;
        state
            .records
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        debug!(task_id = %id, "deleted task");
        Ok(())
    }
}
