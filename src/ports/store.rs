//! Storage port for durable task persistence.

use crate::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Durable task persistence contract.
///
/// The store is a write-behind collaborator of the in-memory index: the
/// index answers queries, the store survives restarts. Implementations are
/// injected into the service at construction; there is no process-wide
/// storage singleton.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the identifier is
    /// already stored.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Persists changes to an existing task (field edits, completion).
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Loads every stored task, used to hydrate the index at startup.
    async fn load_all(&self) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier is already stored.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
