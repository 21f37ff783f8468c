//! `PostgreSQL` task store implementation.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::domain::{PersistedTask, Priority, Task, TaskId};
use crate::ports::{TaskStore, TaskStoreError, TaskStoreResult};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id();
        let new_row = to_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskStoreError::DuplicateTask(task_id)
                    }
                    _ => TaskStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id();
        let row = to_row(task)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&row)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if updated == 0 {
                return Err(TaskStoreError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn load_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::due_date.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

/// Converts a domain task to its insert/update row.
fn to_row(task: &Task) -> TaskStoreResult<NewTaskRow> {
    let tags = serde_json::to_value(task.tags()).map_err(TaskStoreError::persistence)?;

    Ok(NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        category: task.category().to_owned(),
        priority: i16::from(task.priority().level()),
        due_date: task.due_date(),
        completed: task.is_completed(),
        tags,
        reminder_enabled: task.reminder_enabled(),
        created_at: task.created_at(),
    })
}

/// Reconstructs a domain task from a stored row.
fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let priority_level =
        u8::try_from(row.priority).map_err(TaskStoreError::persistence)?;
    let priority = Priority::new(priority_level).map_err(TaskStoreError::persistence)?;
    let tags: BTreeSet<String> =
        serde_json::from_value(row.tags).map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTask {
        id: TaskId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        category: row.category,
        priority,
        due_date: row.due_date,
        completed: row.completed,
        tags,
        reminder_enabled: row.reminder_enabled,
        created_at: row.created_at,
    }))
}
