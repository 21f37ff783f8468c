//! Multiply-indexed in-memory task store.
//!
//! [`TaskIndex`] keeps five cooperating structures mutually consistent on
//! every mutation: an authoritative id map, a scheduling-ordered active set,
//! three secondary maps (category, due date, priority), a tag trie, and a
//! chronologically ordered completed set. Queries run in time proportional
//! to result size wherever an index covers the query dimension, and degrade
//! to empty results rather than erroring: "no matching tasks" is a normal
//! outcome.
//!
//! The index is single-threaded and synchronous. It provides no internal
//! locking; a concurrent adaptation wraps it behind external
//! synchronization.

mod trie;

pub use trie::TagTrie;

use crate::domain::{
    CompletionKey, Priority, ScheduleKey, Task, TaskDomainError, TaskId, TaskPatch,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;

/// Result type for task index operations.
pub type TaskIndexResult<T> = Result<T, TaskIndexError>;

/// Errors raised by index mutations. Queries never error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIndexError {
    /// A task with the same identifier is already indexed.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// No indexed task carries the identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A patch failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// In-memory repository of tasks under a single consistency discipline.
#[derive(Debug, Default)]
pub struct TaskIndex {
    /// Authoritative id → task map; owns every task value.
    tasks: HashMap<TaskId, Task>,
    /// Active tasks in scheduling order (priority, due date).
    active: BTreeSet<ScheduleKey>,
    /// Active tasks grouped by exact category label.
    by_category: BTreeMap<String, BTreeSet<ScheduleKey>>,
    /// Active tasks grouped by exact due timestamp.
    by_due_date: BTreeMap<DateTime<Utc>, BTreeSet<ScheduleKey>>,
    /// Active tasks grouped by priority level.
    by_priority: BTreeMap<Priority, BTreeSet<ScheduleKey>>,
    /// Historical tag corpus for suggestions.
    tags: TagTrie,
    /// Completed tasks in chronological audit order.
    completed: BTreeSet<CompletionKey>,
}

impl TaskIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a task, fanning out to every structure.
    ///
    /// The duplicate check precedes all inserts, so a rejected task leaves
    /// the index untouched. Completed tasks (the hydrate-from-storage path)
    /// land directly in the completed set and skip the secondary maps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::DuplicateTask`] when the identifier is
    /// already present.
    pub fn insert(&mut self, task: Task) -> TaskIndexResult<()> {
        if self.tasks.contains_key(&task.id()) {
            return Err(TaskIndexError::DuplicateTask(task.id()));
        }
        if task.is_completed() {
            self.completed.insert(CompletionKey::for_task(&task));
        } else {
            self.index_active(&task);
        }
        for tag in task.tags() {
            self.tags.insert(tag);
        }
        self.tasks.insert(task.id(), task);
        Ok(())
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns the active tasks indexed under the exact category, in
    /// scheduling order. Unknown categories yield an empty vector.
    #[must_use]
    pub fn tasks_by_category(&self, category: &str) -> Vec<&Task> {
        self.by_category
            .get(category)
            .map_or_else(Vec::new, |keys| self.resolve(keys.iter()))
    }

    /// Returns the active tasks at the exact priority level, in scheduling
    /// order. Levels outside 1..=5 yield an empty vector, not an error:
    /// range is a data concern, not an index concern.
    #[must_use]
    pub fn tasks_by_priority(&self, level: u8) -> Vec<&Task> {
        Priority::new(level)
            .ok()
            .and_then(|priority| self.by_priority.get(&priority))
            .map_or_else(Vec::new, |keys| self.resolve(keys.iter()))
    }

    /// Returns the active tasks due within the inclusive interval
    /// `[start, end]`, in due-date order.
    ///
    /// `start > end` is a valid empty interval and yields an empty vector.
    #[must_use]
    pub fn tasks_due_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Task> {
        if start > end {
            return Vec::new();
        }
        self.resolve(
            self.by_due_date
                .range(start..=end)
                .flat_map(|(_, keys)| keys.iter()),
        )
    }

    /// Returns every tag ever inserted that starts with the prefix,
    /// case-insensitively.
    ///
    /// The corpus is historical: completing a task does not retract its
    /// tags, so suggestions reflect tag usage over the index's lifetime,
    /// not currently-active tasks.
    #[must_use]
    pub fn tag_suggestions(&self, prefix: &str) -> Vec<String> {
        self.tags.suggest(prefix)
    }

    /// Returns the next task to act on (highest priority, earliest due
    /// date) without removing it, or `None` when no active tasks remain.
    #[must_use]
    pub fn peek_next_active(&self) -> Option<&Task> {
        self.active.first().and_then(|key| self.tasks.get(&key.id()))
    }

    /// Transitions a task to the completed state.
    ///
    /// Removes the task from the active set and every secondary map entry
    /// keyed by its current attributes, then records it in the completed
    /// set. Completing an already-completed task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::TaskNotFound`] for an unknown identifier.
    pub fn complete(&mut self, id: TaskId) -> TaskIndexResult<()> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(TaskIndexError::TaskNotFound(id))?;
        if task.is_completed() {
            return Ok(());
        }
        let schedule_key = ScheduleKey::for_task(task);
        let category = task.category().to_owned();
        let due_date = task.due_date();
        let priority = task.priority();
        task.mark_completed();
        let completion_key = CompletionKey::for_task(task);

        self.active.remove(&schedule_key);
        remove_entry(&mut self.by_category, &category, &schedule_key);
        remove_entry(&mut self.by_due_date, &due_date, &schedule_key);
        remove_entry(&mut self.by_priority, &priority, &schedule_key);
        self.completed.insert(completion_key);
        Ok(())
    }

    /// Applies a patch to an indexed task, re-keying every structure that
    /// ordered the task by a changed attribute.
    ///
    /// The patch is validated before any structure is touched; on failure
    /// the index is unchanged. Active tasks are removed from the scheduling
    /// set and secondary maps under their old keys and re-inserted under the
    /// new ones; completed tasks are re-keyed in the completed set. Tags
    /// added by the patch enter the suggestion corpus.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexError::TaskNotFound`] for an unknown identifier
    /// and [`TaskIndexError::Domain`] when the patch fails validation.
    pub fn update(&mut self, id: TaskId, patch: &TaskPatch) -> TaskIndexResult<()> {
        patch.validate()?;
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(TaskIndexError::TaskNotFound(id))?;

        let was_completed = task.is_completed();
        let old_schedule = ScheduleKey::for_task(task);
        let old_completion = CompletionKey::for_task(task);
        let old_category = task.category().to_owned();
        let old_due_date = task.due_date();
        let old_priority = task.priority();

        patch.apply_to(task);
        let new_schedule = ScheduleKey::for_task(task);
        let new_completion = CompletionKey::for_task(task);
        let new_category = task.category().to_owned();
        let new_due_date = task.due_date();
        let new_priority = task.priority();

        if was_completed {
            self.completed.remove(&old_completion);
            self.completed.insert(new_completion);
        } else {
            self.active.remove(&old_schedule);
            remove_entry(&mut self.by_category, &old_category, &old_schedule);
            remove_entry(&mut self.by_due_date, &old_due_date, &old_schedule);
            remove_entry(&mut self.by_priority, &old_priority, &old_schedule);
            self.active.insert(new_schedule);
            self.by_category
                .entry(new_category)
                .or_default()
                .insert(new_schedule);
            self.by_due_date
                .entry(new_due_date)
                .or_default()
                .insert(new_schedule);
            self.by_priority
                .entry(new_priority)
                .or_default()
                .insert(new_schedule);
        }
        for tag in patch.added_tags() {
            self.tags.insert(tag);
        }
        Ok(())
    }

    /// Materializes the active scheduling order into a vector without
    /// disturbing the underlying set.
    #[must_use]
    pub fn active_by_priority(&self) -> Vec<&Task> {
        self.resolve(self.active.iter())
    }

    /// Returns all active tasks sorted by due date across categories and
    /// priorities. Completed tasks were removed from the due-date map at
    /// completion time and do not appear.
    #[must_use]
    pub fn all_by_due_date(&self) -> Vec<&Task> {
        self.resolve(self.by_due_date.values().flat_map(BTreeSet::iter))
    }

    /// Returns completed tasks in chronological audit order (due date, then
    /// identifier).
    #[must_use]
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.completed
            .iter()
            .filter_map(|key| self.tasks.get(&key.id()))
            .collect()
    }

    /// Returns the number of tasks known to the index, active or completed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the index holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Records an active task in the scheduling set and all three secondary
    /// maps.
    fn index_active(&mut self, task: &Task) {
        let key = ScheduleKey::for_task(task);
        self.active.insert(key);
        self.by_category
            .entry(task.category().to_owned())
            .or_default()
            .insert(key);
        self.by_due_date.entry(task.due_date()).or_default().insert(key);
        self.by_priority
            .entry(task.priority())
            .or_default()
            .insert(key);
    }

    /// Resolves schedule keys back to task references via the authoritative
    /// map, preserving iteration order.
    fn resolve<'a>(&'a self, keys: impl Iterator<Item = &'a ScheduleKey>) -> Vec<&'a Task> {
        keys.filter_map(|key| self.tasks.get(&key.id())).collect()
    }
}

/// Removes a schedule key from one secondary map entry, pruning the entry
/// when it empties.
fn remove_entry<K: Ord>(
    map: &mut BTreeMap<K, BTreeSet<ScheduleKey>>,
    map_key: &K,
    entry: &ScheduleKey,
) {
    if let Some(keys) = map.get_mut(map_key) {
        keys.remove(entry);
        if keys.is_empty() {
            map.remove(map_key);
        }
    }
}
