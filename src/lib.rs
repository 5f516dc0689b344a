//! Taskport: a small task tracker built on ports and adapters.
//!
//! # Architecture
//!
//! Taskport follows hexagonal architecture principles:
//!
//! - **Domain**: Plain task values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and for callers
//! - **Adapters**: Concrete implementations of ports (an in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task listing, creation, update and deletion

pub mod task;
