//! Port contracts for the kanban board.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! controller.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
