//! Application services for the kanban board.

mod controller;

pub use controller::{BoardController, BoardError, BoardResult, MoveOutcome};
