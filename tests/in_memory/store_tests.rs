//! Store port contract tests for the in-memory adapter.

use chrono::{DateTime, Utc};
use corkboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{NewTask, TaskId, TaskPatch, TaskStatus, TaskText},
    ports::{TaskStore, TaskStoreError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

fn new_task(text: &str) -> NewTask {
    NewTask::new(
        TaskText::new(text).expect("valid task text"),
        &DefaultClock,
    )
}

fn stamp() -> DateTime<Utc> {
    "2024-05-01T12:00:00Z".parse().expect("valid timestamp")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_assigned_sequentially_and_never_reused(store: InMemoryTaskStore) {
    let first = store
        .insert(&new_task("First"))
        .await
        .expect("insert should succeed");
    let second = store
        .insert(&new_task("Second"))
        .await
        .expect("insert should succeed");
    assert_eq!(first.id(), TaskId::from_raw(1));
    assert_eq!(second.id(), TaskId::from_raw(2));

    store
        .delete(first.id())
        .await
        .expect("delete should succeed");
    let third = store
        .insert(&new_task("Third"))
        .await
        .expect("insert should succeed");

    assert_eq!(third.id(), TaskId::from_raw(3));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inserted_tasks_enter_the_todo_column_unstamped(store: InMemoryTaskStore) {
    let task = store
        .insert(&new_task("Buy milk"))
        .await
        .expect("insert should succeed");

    assert_eq!(task.text().as_str(), "Buy milk");
    assert_eq!(task.status(), TaskStatus::Todo);
    assert!(task.started_at().is_none());
    assert!(task.completed_at().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_newest_first(store: InMemoryTaskStore) {
    store
        .insert(&new_task("First"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_task("Second"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_task("Third"))
        .await
        .expect("insert should succeed");

    let listed = store.list_all().await.expect("list should succeed");
    let texts: Vec<&str> = listed.iter().map(|task| task.text().as_str()).collect();

    assert_eq!(texts, vec!["Third", "Second", "First"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_only_the_named_fields(store: InMemoryTaskStore) {
    let task = store
        .insert(&new_task("Buy milk"))
        .await
        .expect("insert should succeed");

    store
        .update(
            task.id(),
            &TaskPatch {
                status: Some(TaskStatus::Done),
                started_at: None,
                completed_at: Some(stamp()),
            },
        )
        .await
        .expect("update should succeed");

    let listed = store.list_all().await.expect("list should succeed");
    let updated = listed.first().expect("store should have a task");
    assert_eq!(updated.status(), TaskStatus::Done);
    assert_eq!(updated.completed_at(), Some(stamp()));
    assert!(updated.started_at().is_none());
    assert_eq!(updated.text().as_str(), "Buy milk");
    assert_eq!(updated.created_at(), task.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_empty_patch_is_a_noop(store: InMemoryTaskStore) {
    let task = store
        .insert(&new_task("Buy milk"))
        .await
        .expect("insert should succeed");

    store
        .update(task.id(), &TaskPatch::default())
        .await
        .expect("empty patch should succeed");

    let listed = store.list_all().await.expect("list should succeed");
    assert_eq!(listed.first(), Some(&task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_supplied_fields_verbatim(store: InMemoryTaskStore) {
    let task = store
        .insert(&new_task("Buy milk"))
        .await
        .expect("insert should succeed");
    let later: DateTime<Utc> = "2024-06-01T08:00:00Z".parse().expect("valid timestamp");

    // The store is a dumb table: a re-supplied field overwrites. The
    // write-once timestamp rule lives in the transition planner, which
    // never re-sends a stamp that is already set.
    store
        .update(
            task.id(),
            &TaskPatch {
                status: Some(TaskStatus::InProgress),
                started_at: Some(stamp()),
                completed_at: None,
            },
        )
        .await
        .expect("update should succeed");
    store
        .update(
            task.id(),
            &TaskPatch {
                status: None,
                started_at: Some(later),
                completed_at: None,
            },
        )
        .await
        .expect("update should succeed");

    let listed = store.list_all().await.expect("list should succeed");
    let updated = listed.first().expect("store should have a task");
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.started_at(), Some(later));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_reports_not_found(store: InMemoryTaskStore) {
    let result = store
        .update(
            TaskId::from_raw(99),
            &TaskPatch {
                status: Some(TaskStatus::Done),
                started_at: None,
                completed_at: None,
            },
        )
        .await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == TaskId::from_raw(99)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_id_reports_not_found(store: InMemoryTaskStore) {
    let result = store.delete(TaskId::from_raw(99)).await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == TaskId::from_raw(99)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_record_permanently(store: InMemoryTaskStore) {
    let task = store
        .insert(&new_task("Buy milk"))
        .await
        .expect("insert should succeed");

    store
        .delete(task.id())
        .await
        .expect("delete should succeed");

    let listed = store.list_all().await.expect("list should succeed");
    assert!(listed.is_empty());
    let repeat = store.delete(task.id()).await;
    assert!(matches!(repeat, Err(TaskStoreError::NotFound(_))));
}
