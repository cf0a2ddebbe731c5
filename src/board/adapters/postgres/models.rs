//! Diesel row models for task persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// User-entered task label.
    pub text: String,
    /// Board column, camelCase enum spelling.
    pub status: String,
    /// First entry into the in-progress column.
    pub started_at: Option<DateTime<Utc>>,
    /// First entry into the done column.
    pub completed_at: Option<DateTime<Utc>>,
    /// Owning user identifier; carried by the hosted schema but never
    /// populated or filtered on by this crate.
    pub user_id: Option<String>,
}

/// Insert model for task records.
///
/// The identifier is generated by the store; new records always carry the
/// todo column spelling and no lifecycle timestamps.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// User-entered task label.
    pub text: String,
    /// Board column at creation.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Partial update model; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChangeset {
    /// New board column.
    pub status: Option<String>,
    /// Write-once first entry into the in-progress column.
    pub started_at: Option<DateTime<Utc>>,
    /// Write-once first entry into the done column.
    pub completed_at: Option<DateTime<Utc>>,
}
