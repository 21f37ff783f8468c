//! Task management service: owns the index, persists through the store.

use crate::domain::{Priority, Task, TaskDomainError, TaskId, TaskPatch};
use crate::index::{TaskIndex, TaskIndexError};
use crate::ports::{TaskStore, TaskStoreError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    category: String,
    priority: u8,
    due_date: DateTime<Utc>,
    tags: Vec<String>,
    reminder_enabled: bool,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        priority: u8,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: category.into(),
            priority,
            due_date,
            tags: Vec::new(),
            reminder_enabled: false,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Enables the due-date reminder.
    #[must_use]
    pub const fn with_reminder(mut self, enabled: bool) -> Self {
        self.reminder_enabled = enabled;
        self
    }
}

/// Service-level errors for task management operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Index mutation failed.
    #[error(transparent)]
    Index(#[from] TaskIndexError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management service.
///
/// Owns the in-memory [`TaskIndex`] and writes through to an injected
/// [`TaskStore`]; there is no global storage handle. The index mutates
/// first and the store is written behind it, so a failed write surfaces as
/// an error while the in-memory view stays authoritative for the session.
///
/// The service assumes a single logical owner drives all calls (an
/// interactive application's event loop); it adds no locking of its own.
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    index: TaskIndex,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty index.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            index: TaskIndex::new(),
            store,
            clock,
        }
    }

    /// Loads every stored task into the index, returning how many were
    /// loaded. Intended to run once against an empty index at startup;
    /// completed tasks land directly in the completed set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when loading fails and
    /// [`TaskServiceError::Index`] when a stored task collides with an
    /// already-indexed identifier.
    pub async fn hydrate(&mut self) -> TaskServiceResult<usize> {
        let tasks = self.store.load_all().await?;
        let count = tasks.len();
        for task in tasks {
            self.index.insert(task)?;
        }
        Ok(count)
    }

    /// Validates the request, creates the task, indexes it, and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an empty title or an
    /// out-of-range priority, [`TaskServiceError::Index`] on identifier
    /// collision, and [`TaskServiceError::Store`] when persistence fails.
    pub async fn create_task(&mut self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let priority = Priority::new(request.priority)?;
        let mut task = Task::new(
            request.title,
            request.category,
            priority,
            request.due_date,
            &*self.clock,
        )?
        .with_tags(request.tags)
        .with_reminder(request.reminder_enabled);
        if let Some(description) = request.description {
            task = task.with_description(description);
        }

        self.index.insert(task.clone())?;
        self.store.insert(&task).await?;
        Ok(task)
    }

    /// Transitions a task to completed and persists the change. Completing
    /// an already-completed task is a no-op beyond the store write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Index`] for an unknown identifier and
    /// [`TaskServiceError::Store`] when persistence fails.
    pub async fn complete_task(&mut self, id: TaskId) -> TaskServiceResult<Task> {
        self.index.complete(id)?;
        let task = self
            .index
            .get(id)
            .cloned()
            .ok_or(TaskIndexError::TaskNotFound(id))?;
        self.store.update(&task).await?;
        Ok(task)
    }

    /// Applies a patch to a task and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Index`] for an unknown identifier or an
    /// invalid patch, and [`TaskServiceError::Store`] when persistence
    /// fails.
    pub async fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> TaskServiceResult<Task> {
        self.index.update(id, patch)?;
        let task = self
            .index
            .get(id)
            .cloned()
            .ok_or(TaskIndexError::TaskNotFound(id))?;
        self.store.update(&task).await?;
        Ok(task)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.index.get(id).cloned()
    }

    /// Returns the active tasks in the given category, scheduling order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<Task> {
        cloned(self.index.tasks_by_category(category))
    }

    /// Returns the active tasks at the given priority level.
    #[must_use]
    pub fn by_priority(&self, level: u8) -> Vec<Task> {
        cloned(self.index.tasks_by_priority(level))
    }

    /// Returns the active tasks due within the inclusive interval.
    #[must_use]
    pub fn due_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Task> {
        cloned(self.index.tasks_due_between(start, end))
    }

    /// Returns tag suggestions for the prefix.
    #[must_use]
    pub fn tag_suggestions(&self, prefix: &str) -> Vec<String> {
        self.index.tag_suggestions(prefix)
    }

    /// Returns the next task to act on without removing it.
    #[must_use]
    pub fn next_active(&self) -> Option<Task> {
        self.index.peek_next_active().cloned()
    }

    /// Returns all active tasks in scheduling order.
    #[must_use]
    pub fn active_by_priority(&self) -> Vec<Task> {
        cloned(self.index.active_by_priority())
    }

    /// Returns all active tasks sorted by due date.
    #[must_use]
    pub fn all_by_due_date(&self) -> Vec<Task> {
        cloned(self.index.all_by_due_date())
    }

    /// Returns completed tasks in chronological audit order.
    #[must_use]
    pub fn completed(&self) -> Vec<Task> {
        cloned(self.index.completed_tasks())
    }
}

/// Clones borrowed query results into owned values for callers.
fn cloned(tasks: Vec<&Task>) -> Vec<Task> {
    tasks.into_iter().cloned().collect()
}
