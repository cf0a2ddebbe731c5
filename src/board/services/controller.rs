//! Board controller owning the authoritative in-memory task list.

use crate::board::{
    domain::{NewTask, Task, TaskId, TaskStatus, TaskText},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors surfaced by the fallible board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The initial fetch of the task list failed.
    #[error("failed to fetch tasks: {0}")]
    Fetch(TaskStoreError),

    /// A create, update, or delete against the store failed.
    #[error("failed to write task change: {0}")]
    Write(TaskStoreError),
}

/// Result type for fallible board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Result of a drop interaction that names a target column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed column and the store confirmed the patch.
    Moved,
    /// The task already sat in the target column; no store call was made.
    AlreadyInColumn,
    /// No task with the given identifier is on the board; no store call
    /// was made.
    UnknownTask,
}

/// Controller for a three-column kanban board.
///
/// Owns the authoritative in-memory task list for its full lifetime:
/// initialized empty, populated wholesale by [`BoardController::load`], and
/// mutated only by the add, remove, and move handlers. Column views are
/// derived from the single list on every call and never stored per column.
///
/// Every mutation is synchronized to the store first and applied to the
/// in-memory copy only after the store confirms, so no transition is ever
/// shown as committed unless it actually was. The plain handler methods
/// implement the boundary policy for store failures: log and leave state
/// unchanged, with no retry and no rollback to perform. The `try_`
/// variants expose the same operations with explicit errors.
pub struct BoardController<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    tasks: Vec<Task>,
    loaded: bool,
}

impl<S, C> BoardController<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty, not-yet-loaded board.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            tasks: Vec::new(),
            loaded: false,
        }
    }

    /// Returns `true` once the initial load attempt has settled.
    ///
    /// Until then the board is in its loading state and the presentation
    /// layer renders nothing interactive.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the full task list in store order, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks sitting in the given column.
    ///
    /// A derived view over the single task list: order is preserved from
    /// the source list and nothing is cached between calls.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .collect()
    }

    /// Loads all tasks from the store, replacing the in-memory list
    /// wholesale.
    ///
    /// The loading state ends whether or not the fetch succeeded; on
    /// failure the previous list is kept.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Fetch`] when the store call fails.
    pub async fn try_load(&mut self) -> BoardResult<()> {
        let result = self.store.list_all().await;
        self.loaded = true;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => Err(BoardError::Fetch(err)),
        }
    }

    /// Creates a task from raw user input and prepends it to the list.
    ///
    /// Input is trimmed; input that is empty after trimming is rejected
    /// silently with no store call, returning `Ok(None)`. The task is
    /// added to the list only after the store returns the created record,
    /// so a failed insert leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Write`] when the store insert fails.
    pub async fn try_add(&mut self, raw_text: &str) -> BoardResult<Option<TaskId>> {
        let Ok(text) = TaskText::new(raw_text) else {
            return Ok(None);
        };

        let new_task = NewTask::new(text, &*self.clock);
        let task = self
            .store
            .insert(&new_task)
            .await
            .map_err(BoardError::Write)?;
        let id = task.id();
        info!(id = %id, text = %task.text(), "created task");
        self.tasks.insert(0, task);
        Ok(Some(id))
    }

    /// Deletes a task from the store, then from the in-memory list.
    ///
    /// Returns whether a task was actually removed from the list. On store
    /// failure, including [`TaskStoreError::NotFound`] for an identifier
    /// the store does not have, the list is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Write`] when the store delete fails.
    pub async fn try_remove(&mut self, id: TaskId) -> BoardResult<bool> {
        self.store.delete(id).await.map_err(BoardError::Write)?;
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        info!(id = %id, "deleted task");
        Ok(self.tasks.len() < before)
    }

    /// Moves a task to the target column per the drop interaction.
    ///
    /// An unknown identifier or a same-column drop is a no-op with zero
    /// store calls. Otherwise the planned patch is persisted first and
    /// applied to the in-memory copy only after the store confirms; on
    /// failure the task remains in its prior column with no timestamp
    /// change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Write`] when the store update fails.
    pub async fn try_move(&mut self, id: TaskId, target: TaskStatus) -> BoardResult<MoveOutcome> {
        let patch = {
            let Some(task) = self.tasks.iter().find(|task| task.id() == id) else {
                return Ok(MoveOutcome::UnknownTask);
            };
            let Some(patch) = task.plan_move(target, &*self.clock) else {
                return Ok(MoveOutcome::AlreadyInColumn);
            };
            patch
        };

        self.store
            .update(id, &patch)
            .await
            .map_err(BoardError::Write)?;

        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.apply_patch(&patch);
        }
        info!(id = %id, status = target.as_str(), "moved task");
        Ok(MoveOutcome::Moved)
    }

    /// Boundary handler for the initial load.
    ///
    /// Store failures are logged and swallowed.
    pub async fn load(&mut self) {
        if let Err(err) = self.try_load().await {
            error!(error = %err, "failed to load tasks");
        }
    }

    /// Boundary handler for the add-task submission.
    ///
    /// Store failures are logged and swallowed.
    pub async fn add(&mut self, raw_text: &str) {
        if let Err(err) = self.try_add(raw_text).await {
            error!(error = %err, "failed to add task");
        }
    }

    /// Boundary handler for the delete-task request.
    ///
    /// Store failures are logged and swallowed.
    pub async fn remove(&mut self, id: TaskId) {
        if let Err(err) = self.try_remove(id).await {
            error!(error = %err, id = %id, "failed to delete task");
        }
    }

    /// Boundary handler for the completed drop interaction.
    ///
    /// Store failures are logged and swallowed; the card simply stays in
    /// its prior column.
    pub async fn move_task(&mut self, id: TaskId, target: TaskStatus) {
        if let Err(err) = self.try_move(id, target).await {
            error!(error = %err, id = %id, status = target.as_str(), "failed to move task");
        }
    }
}
