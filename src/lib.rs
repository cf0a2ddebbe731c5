//! Corkboard: kanban task-board core.
//!
//! This crate provides the behavioral core of a single-page kanban board:
//! short text tasks moving between three status columns, persisted through
//! a thin client to a remote task table. Presentation is an external
//! collaborator: it forwards completed drop interactions and delete
//! requests to the board controller and renders the derived column views.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Task lifecycle, store port and adapters, board controller

pub mod board;
