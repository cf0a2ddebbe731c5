//! `PostgreSQL` store implementation for the hosted task table.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::board::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch, TaskStatus, TaskText},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: BoardPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order((todos::created_at.desc(), todos::id.desc()))
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, new_task: &NewTask) -> TaskStoreResult<Task> {
        let new_row = NewTodoRow {
            text: new_task.text().as_str().to_owned(),
            status: TaskStatus::Todo.as_str().to_owned(),
            created_at: new_task.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let changeset = TodoChangeset {
            status: patch.status.map(|status| status.as_str().to_owned()),
            started_at: patch.started_at,
            completed_at: patch.completed_at,
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.filter(todos::id.eq(id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if affected == 0 {
                return Err(TaskStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.filter(todos::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if affected == 0 {
                return Err(TaskStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TodoRow) -> TaskStoreResult<Task> {
    let TodoRow {
        id,
        created_at,
        text: persisted_text,
        status: persisted_status,
        started_at,
        completed_at,
        ..
    } = row;

    let text = TaskText::new(persisted_text).map_err(TaskStoreError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_raw(id),
        text,
        status,
        created_at,
        started_at,
        completed_at,
    }))
}
