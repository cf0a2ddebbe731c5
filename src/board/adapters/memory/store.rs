//! In-memory store for board tests and backend substitution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Identifiers are assigned from a monotonically increasing counter and are
/// never reused, matching the hosted table's generated integer key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug)]
struct InMemoryBoardState {
    tasks: HashMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryBoardState {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps a poisoned-lock failure to a persistence error.
fn lock_poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(tasks)
    }

    async fn insert(&self, new_task: &NewTask) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let id = TaskId::from_raw(state.next_id);
        state.next_id += 1;

        let task = Task::from_persisted(PersistedTaskData {
            id,
            text: new_task.text().clone(),
            status: TaskStatus::Todo,
            created_at: new_task.created_at(),
            started_at: None,
            completed_at: None,
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let current = state
            .tasks
            .get(&id)
            .ok_or(TaskStoreError::NotFound(id))?
            .clone();

        // The store patches supplied fields verbatim, like the hosted
        // table; the write-once timestamp rule is the caller's contract.
        let patched = Task::from_persisted(PersistedTaskData {
            id,
            text: current.text().clone(),
            status: patch.status.unwrap_or(current.status()),
            created_at: current.created_at(),
            started_at: patch.started_at.or(current.started_at()),
            completed_at: patch.completed_at.or(current.completed_at()),
        });
        state.tasks.insert(id, patched);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskStoreError::NotFound(id));
        }
        Ok(())
    }
}
