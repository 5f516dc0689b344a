//! Error types for task domain validation and decoding.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(u64),
}

/// Error returned while decoding a task status from its integer code.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid task status code: {0}")]
pub struct InvalidStatusCode(pub i64);
