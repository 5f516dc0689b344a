//! In-memory adapter for the task repository port.

mod config;
mod store;
mod task;

pub use config::{IdAssignment, TaskRepositoryConfig};
use store::StoreState;
pub use store::{TaskRecord, TaskStore};
pub use task::InMemoryTaskRepository;
