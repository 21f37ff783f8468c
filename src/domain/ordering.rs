//! The two named orderings maintained by the task index.
//!
//! Scheduling order and completion order deliberately stay separate
//! comparators: the first encodes "what to act on next", the second a
//! chronological audit trail. Both embed the task identifier as the final
//! tie-break so keys are unique within ordered sets and iteration order is
//! deterministic.

use super::{Priority, Task, TaskId};
use chrono::{DateTime, Utc};

/// Ordering key for active tasks: priority ascending, then due date
/// ascending, then identifier.
///
/// Field order drives the derived lexicographic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduleKey {
    priority: Priority,
    due_date: DateTime<Utc>,
    id: TaskId,
}

impl ScheduleKey {
    /// Builds the scheduling key for a task's current attribute values.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            priority: task.priority(),
            due_date: task.due_date(),
            id: task.id(),
        }
    }

    /// Returns the identifier of the keyed task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }
}

/// Ordering key for completed tasks: due date ascending, then identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompletionKey {
    due_date: DateTime<Utc>,
    id: TaskId,
}

impl CompletionKey {
    /// Builds the completion key for a task's current due date.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            due_date: task.due_date(),
            id: task.id(),
        }
    }

    /// Returns the identifier of the keyed task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }
}
