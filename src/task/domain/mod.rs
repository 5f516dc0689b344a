//! Domain model for task tracking.
//!
//! The domain holds plain values only; storage and orchestration concerns
//! live in the port, adapter and service modules.

mod error;
mod ids;
mod status;
mod task;

pub use error::{InvalidStatusCode, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::Task;
