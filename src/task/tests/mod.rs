//! Unit tests for the task module.


use crate::task::{
    adapters::memory::{TaskRecord, TaskStore},
    domain::{TaskId, TaskStatus},
};

/// Builds a task identifier, panicking on zero.
fn id(value: u64) -> TaskId {
    TaskId::new(value).expect("test ids are positive")
}

/// Store seeded with one incomplete and one complete task.
fn seeded_store() -> TaskStore {
    TaskStore::from_records([
        (
            id(1),
            TaskRecord::new("Task 1", TaskStatus::Incomplete.code()),
        ),
        (id(2), TaskRecord::new("Task 2", TaskStatus::Complete.code())),
    ])
}
