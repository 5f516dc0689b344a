//! Shared in-memory task store injected into the repository adapter.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::task::{
    domain::TaskId,
    ports::{TaskRepositoryError, TaskRepositoryResult},
};

/// Raw stored form of a task.
///
/// The status is kept as its integer code so that malformed data written by
/// another producer surfaces as a decoding error on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task name.
    pub name: String,
    /// Integer status code, `0` for incomplete and `1` for complete.
    pub status: i64,
}

impl TaskRecord {
    /// Creates a record from a name and raw status code.
    #[must_use]
    pub fn new(name: impl Into<String>, status: i64) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Cloneable handle to a mutable map from task identifier to record.
///
/// Clones share the same underlying map, so a caller can keep a handle for
/// inspection while the repository adapter mutates it.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
pub(super) struct StoreState {
    pub(super) records: HashMap<TaskId, TaskRecord>,
    high_water: Option<TaskId>,
}

impl StoreState {
    pub(super) fn insert(&mut self, id: TaskId, record: TaskRecord) {
        if self.high_water.is_none_or(|current| id > current) {
            self.high_water = Some(id);
        }
        self.records.insert(id, record);
    }

    /// Returns an identifier above every identifier this store has held.
    pub(super) fn next_unused_id(&self) -> TaskId {
        self.high_water
            .map_or_else(|| TaskId::after_count(0), TaskId::next)
    }
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = (TaskId, TaskRecord)>) -> Self {
        let mut state = StoreState::default();
        for (id, record) in records {
            state.insert(id, record);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inspect().records.len()
    }

    /// Returns `true` when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when a record exists at `id`.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.inspect().records.contains_key(&id)
    }

    /// Returns a copy of the record stored at `id`.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<TaskRecord> {
        self.inspect().records.get(&id).cloned()
    }

    /// Returns a copy of every record, ordered by identifier.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(TaskId, TaskRecord)> {
        let mut records: Vec<_> = self
            .inspect()
            .records
            .iter()
            .map(|(id, record)| (*id, record.clone()))
            .collect();
        records.sort_by_key(|(id, _)| *id);
        records
    }

    // Inspection tolerates poisoning; the adapter paths below do not.
    fn inspect(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    pub(super) fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}
