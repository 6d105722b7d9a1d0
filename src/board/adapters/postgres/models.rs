//! Diesel row models for board persistence.

use super::schema::{board_columns, board_tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for board columns.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_columns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ColumnRow {
    /// Column identifier.
    pub id: String,
    /// Owning board identifier.
    pub board_id: String,
    /// Display title.
    pub title: String,
    /// Ordinal position among the board's columns.
    pub ordinal: i32,
}

/// Insert model for board columns.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_columns)]
pub struct NewColumnRow {
    /// Column identifier.
    pub id: String,
    /// Owning board identifier.
    pub board_id: String,
    /// Display title.
    pub title: String,
    /// Ordinal position among the board's columns.
    pub ordinal: i32,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning board identifier.
    pub board_id: String,
    /// Owning column identifier.
    pub column_id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority label.
    pub priority: String,
    /// Optional assignee label.
    pub assignee: Option<String>,
    /// Integer sort key within the column.
    pub position: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning board identifier.
    pub board_id: String,
    /// Owning column identifier.
    pub column_id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority label.
    pub priority: String,
    /// Optional assignee label.
    pub assignee: Option<String>,
    /// Integer sort key within the column.
    pub position: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
