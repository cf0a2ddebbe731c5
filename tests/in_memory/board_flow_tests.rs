//! Full board sessions through the public controller API.

use std::sync::Arc;

use corkboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskId, TaskStatus},
    ports::TaskStore,
    services::{BoardController, MoveOutcome},
};
use eyre::{ensure, eyre};
use mockable::DefaultClock;
use rstest::rstest;

type FlowController = BoardController<InMemoryTaskStore, DefaultClock>;

fn controller_over(store: &Arc<InMemoryTaskStore>) -> FlowController {
    BoardController::new(Arc::clone(store), Arc::new(DefaultClock))
}

async fn add_task(controller: &mut FlowController, text: &str) -> eyre::Result<TaskId> {
    controller
        .try_add(text)
        .await?
        .ok_or_else(|| eyre!("expected a created task for {text:?}"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_sequence_keeps_first_entry_stamps() -> eyre::Result<()> {
    let store = Arc::new(InMemoryTaskStore::new());
    let mut controller = controller_over(&store);
    controller.try_load().await?;

    let id = add_task(&mut controller, "Ship release").await?;

    controller.try_move(id, TaskStatus::InProgress).await?;
    let started = controller
        .tasks()
        .first()
        .and_then(|task| task.started_at())
        .ok_or_else(|| eyre!("expected a started_at stamp"))?;

    controller.try_move(id, TaskStatus::Done).await?;
    let completed = controller
        .tasks()
        .first()
        .and_then(|task| task.completed_at())
        .ok_or_else(|| eyre!("expected a completed_at stamp"))?;

    controller.try_move(id, TaskStatus::Todo).await?;
    let task = controller
        .tasks()
        .first()
        .ok_or_else(|| eyre!("expected the task to remain listed"))?;

    ensure!(task.status() == TaskStatus::Todo);
    ensure!(task.started_at() == Some(started));
    ensure!(task.completed_at() == Some(completed));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_state_survives_a_wholesale_reload() -> eyre::Result<()> {
    let store = Arc::new(InMemoryTaskStore::new());
    let mut controller = controller_over(&store);
    controller.try_load().await?;

    let groceries = add_task(&mut controller, "Buy milk").await?;
    let laundry = add_task(&mut controller, "Do laundry").await?;
    let release = add_task(&mut controller, "Ship release").await?;

    controller.try_move(release, TaskStatus::InProgress).await?;
    controller.try_move(groceries, TaskStatus::Done).await?;
    controller.try_remove(laundry).await?;

    // A second controller over the same store sees the identical board.
    let mut rejoined = controller_over(&store);
    ensure!(!rejoined.is_loaded());
    rejoined.try_load().await?;
    ensure!(rejoined.is_loaded());

    ensure!(rejoined.tasks() == controller.tasks());
    ensure!(rejoined.column(TaskStatus::Todo).is_empty());
    ensure!(rejoined.column(TaskStatus::InProgress).len() == 1);
    ensure!(rejoined.column(TaskStatus::Done).len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn boundary_handlers_drive_a_full_session() -> eyre::Result<()> {
    let store = Arc::new(InMemoryTaskStore::new());
    let mut controller = controller_over(&store);

    controller.load().await;
    ensure!(controller.is_loaded());

    controller.add("  Buy milk  ").await;
    controller.add("").await;
    ensure!(controller.tasks().len() == 1);

    let id = controller
        .tasks()
        .first()
        .map(corkboard::board::domain::Task::id)
        .ok_or_else(|| eyre!("expected a created task"))?;

    controller.move_task(id, TaskStatus::InProgress).await;
    ensure!(controller.column(TaskStatus::InProgress).len() == 1);

    controller.remove(id).await;
    ensure!(controller.tasks().is_empty());
    let listed = store.list_all().await?;
    ensure!(listed.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_column_drop_reports_already_in_column() -> eyre::Result<()> {
    let store = Arc::new(InMemoryTaskStore::new());
    let mut controller = controller_over(&store);
    controller.try_load().await?;
    let id = add_task(&mut controller, "Buy milk").await?;

    let outcome = controller.try_move(id, TaskStatus::Todo).await?;

    ensure!(outcome == MoveOutcome::AlreadyInColumn);
    Ok(())
}
