//! Task tracking for taskport.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]: the [`ports::TaskRepository`] storage port
//!   and the [`ports::TaskUseCase`] caller-facing contract
//! - Adapter implementations in [`adapters`]
//! - The use-case service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
