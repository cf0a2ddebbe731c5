//! Kanban board core for Corkboard.
//!
//! This module implements the task lifecycle behind a three-column board:
//! creating short text tasks, dragging them between the todo, in-progress,
//! and done columns with write-once lifecycle timestamps, and deleting
//! them, with every mutation synchronized to a remote task store. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
