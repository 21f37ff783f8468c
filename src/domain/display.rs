//! Presentation-neutral display model for task rows.
//!
//! A pure function from [`Task`] to a plain record; how the record is
//! rendered (list cell, table row, export line) is the presentation layer's
//! business.

use super::Task;

/// Date format used for due-date labels.
const DUE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Flat display record for a single task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    /// Task title.
    pub title: String,
    /// Category label.
    pub category: String,
    /// Numeric priority level (1 = highest).
    pub priority: u8,
    /// Due date formatted as `YYYY-MM-DD HH:MM`.
    pub due_label: String,
    /// Whether the task has been completed.
    pub completed: bool,
}

/// Produces the display record for a task.
#[must_use]
pub fn summarize(task: &Task) -> TaskSummary {
    TaskSummary {
        title: task.title().to_owned(),
        category: task.category().to_owned(),
        priority: task.priority().level(),
        due_label: task.due_date().format(DUE_LABEL_FORMAT).to_string(),
        completed: task.is_completed(),
    }
}
