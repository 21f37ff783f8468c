//! Task aggregate root and its patch record.

use super::{Priority, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Task aggregate root.
///
/// Fields that participate in index orderings (category, priority, due date,
/// completion flag) are private and carry no public setters; the index
/// applies changes through [`TaskPatch`] so no sorted structure ever holds a
/// task under a stale key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    category: String,
    priority: Priority,
    due_date: DateTime<Utc>,
    completed: bool,
    tags: BTreeSet<String>,
    reminder_enabled: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTask {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted category label.
    pub category: String,
    /// Persisted priority level.
    pub priority: Priority,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted tag set.
    pub tags: BTreeSet<String>,
    /// Persisted reminder flag.
    pub reminder_enabled: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new active task with an empty description and tag set.
    ///
    /// The identifier is assigned here and the creation timestamp is taken
    /// from the injected clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        priority: Priority,
        due_date: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = validated_title(title.into())?;
        Ok(Self {
            id: TaskId::new(),
            title,
            description: String::new(),
            category: category.into(),
            priority,
            due_date,
            completed: false,
            tags: BTreeSet::new(),
            reminder_enabled: false,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTask) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            category: data.category,
            priority: data.priority,
            due_date: data.due_date,
            completed: data.completed,
            tags: data.tags,
            reminder_enabled: data.reminder_enabled,
            created_at: data.created_at,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task tags, dropping blank entries and duplicates.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags
            .into_iter()
            .filter(|tag| !tag.trim().is_empty())
            .collect();
        self
    }

    /// Enables or disables the due-date reminder.
    #[must_use]
    pub const fn with_reminder(mut self, enabled: bool) -> Self {
        self.reminder_enabled = enabled;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the tag set.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Returns whether the due-date reminder is enabled.
    #[must_use]
    pub const fn reminder_enabled(&self) -> bool {
        self.reminder_enabled
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task completed. Index-internal: callers go through
    /// [`crate::index::TaskIndex::complete`].
    pub(crate) const fn mark_completed(&mut self) {
        self.completed = true;
    }
}

/// Field-by-field change set applied to an indexed task.
///
/// Every field is optional; absent fields leave the task untouched. Priority
/// changes carry an already-validated [`Priority`], title changes are
/// validated when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    priority: Option<Priority>,
    due_date: Option<DateTime<Utc>>,
    reminder_enabled: Option<bool>,
    add_tags: BTreeSet<String>,
    remove_tags: BTreeSet<String>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to another category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Changes the priority level.
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Reschedules the due date.
    #[must_use]
    pub const fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Enables or disables the due-date reminder.
    #[must_use]
    pub const fn reminder(mut self, enabled: bool) -> Self {
        self.reminder_enabled = Some(enabled);
        self
    }

    /// Adds a tag to the task.
    #[must_use]
    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tags.insert(tag.into());
        self
    }

    /// Removes a tag from the task.
    #[must_use]
    pub fn remove_tag(mut self, tag: impl Into<String>) -> Self {
        self.remove_tags.insert(tag.into());
        self
    }

    /// Tags the patch adds, in stored casing.
    pub(crate) const fn added_tags(&self) -> &BTreeSet<String> {
        &self.add_tags
    }

    /// Checks the patch against domain validation rules without applying it,
    /// so the index can reject the whole update before touching any
    /// structure.
    pub(crate) fn validate(&self) -> Result<(), TaskDomainError> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(())
    }

    /// Applies the patch to a task. Infallible: [`Self::validate`] must have
    /// accepted the patch first.
    pub(crate) fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.trim().to_owned();
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(category) = &self.category {
            task.category.clone_from(category);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(enabled) = self.reminder_enabled {
            task.reminder_enabled = enabled;
        }
        for tag in &self.remove_tags {
            task.tags.remove(tag);
        }
        for tag in &self.add_tags {
            if !tag.trim().is_empty() {
                task.tags.insert(tag.clone());
            }
        }
    }
}

/// Trims the title and rejects the empty result.
fn validated_title(raw: String) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
