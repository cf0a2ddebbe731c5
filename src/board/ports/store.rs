//! Store port for task persistence.

use crate::board::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Persistence contract for the remote task table.
///
/// Exactly four operations, each a single round trip: no batching,
/// transactions, pagination, retries, or timeouts. Any persistent
/// key-value or relational backend can stand behind this trait without
/// touching board controller logic.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns all tasks ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] on transport, authentication,
    /// or backend failure.
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Creates a record in the todo column and returns it, including the
    /// store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the record cannot be
    /// created; the caller must not mutate local state in that case.
    async fn insert(&self, new_task: &NewTask) -> TaskStoreResult<Task>;

    /// Patches only the fields present in `patch` on the matching record.
    ///
    /// An all-empty patch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record has `id`, or
    /// [`TaskStoreError::Persistence`] on backend failure.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()>;

    /// Removes the record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record has `id`, or
    /// [`TaskStoreError::Persistence`] on backend failure.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// No record exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Transport, authentication, or backend failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
