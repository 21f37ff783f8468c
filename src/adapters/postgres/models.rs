//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Priority level.
    pub priority: i16,
    /// Due timestamp.
    pub due_date: DateTime<Utc>,
    /// Completion flag.
    pub completed: bool,
    /// Tag set as a JSON array of strings.
    pub tags: Value,
    /// Reminder flag.
    pub reminder_enabled: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert and update model for task records.
///
/// Doubles as the changeset for updates; the primary key column is excluded
/// from `AsChangeset` by derivation.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Priority level.
    pub priority: i16,
    /// Due timestamp.
    pub due_date: DateTime<Utc>,
    /// Completion flag.
    pub completed: bool,
    /// Tag set as a JSON array of strings.
    pub tags: Value,
    /// Reminder flag.
    pub reminder_enabled: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
