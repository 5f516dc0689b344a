//! Port contracts for task tracking.
//!
//! [`TaskRepository`] is the outbound storage port; [`TaskUseCase`] is the
//! inbound contract exposed to callers.

pub mod repository;
pub mod use_case;

#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use use_case::{TaskUseCase, TaskUseCaseError, TaskUseCaseResult};
