//! Task aggregate root and drag-transition planning.

use super::{ParseTaskStatusError, TaskId, TaskText};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Board column a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "inProgress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Partial update for a stored task.
///
/// Absent fields are left untouched by the store. A drop that changes the
/// column always names `status`; the timestamp fields are present only when
/// the move stamps them for the first time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New board column.
    pub status: Option<TaskStatus>,
    /// First entry into the in-progress column.
    pub started_at: Option<DateTime<Utc>>,
    /// First entry into the done column.
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Returns `true` when the patch names no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.started_at.is_none() && self.completed_at.is_none()
    }
}

/// Payload for creating a task record in the store.
///
/// New tasks always enter the board in [`TaskStatus::Todo`] with no
/// lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    text: TaskText,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates an insert payload stamped with the current clock time.
    #[must_use]
    pub fn new(text: TaskText, clock: &impl Clock) -> Self {
        Self {
            text,
            created_at: clock.utc(),
        }
    }

    /// Returns the validated task label.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task label.
    pub text: TaskText,
    /// Persisted board column.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted first entry into the in-progress column, if any.
    pub started_at: Option<DateTime<Utc>>,
    /// Persisted first entry into the done column, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            status: data.status,
            created_at: data.created_at,
            started_at: data.started_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task label.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the board column the task sits in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the first entry into the in-progress
    /// column, if the task has ever been there.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the timestamp of the first entry into the done column, if
    /// the task has ever been there.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Plans the field changes for dropping this task onto `target`.
    ///
    /// Returns `None` when the task already sits in the target column; a
    /// same-column drop is a no-op and the caller must issue no store call.
    /// All six cross-column moves are permitted, backward ones included.
    /// `started_at` is stamped on the first move into
    /// [`TaskStatus::InProgress`] and `completed_at` on the first move into
    /// [`TaskStatus::Done`]; a timestamp that is already set is never
    /// restated. The stamped instant is shared by the remote patch and the
    /// local application so both copies agree exactly.
    #[must_use]
    pub fn plan_move(&self, target: TaskStatus, clock: &impl Clock) -> Option<TaskPatch> {
        if target == self.status {
            return None;
        }

        let mut patch = TaskPatch {
            status: Some(target),
            ..TaskPatch::default()
        };
        if target == TaskStatus::InProgress && self.started_at.is_none() {
            patch.started_at = Some(clock.utc());
        }
        if target == TaskStatus::Done && self.completed_at.is_none() {
            patch.completed_at = Some(clock.utc());
        }
        Some(patch)
    }

    /// Applies a planned patch to this in-memory copy.
    ///
    /// Intended for use after the store has confirmed the same patch. The
    /// timestamp fields obey the write-once rule: a value that is already
    /// set is left untouched.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        stamp_once(&mut self.started_at, patch.started_at);
        stamp_once(&mut self.completed_at, patch.completed_at);
    }
}

/// Sets a write-once timestamp field, leaving an existing value untouched.
fn stamp_once(field: &mut Option<DateTime<Utc>>, value: Option<DateTime<Utc>>) {
    if field.is_none() {
        *field = value;
    }
}
