//! Shared world state for task lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::adapters::memory::InMemoryTaskStore;
use taskdesk::domain::{Task, TaskId};
use taskdesk::services::TaskService;

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub ids_by_title: HashMap<String, TaskId>,
    pub next_active: Option<Task>,
    pub suggestions: Option<Vec<String>>,
}

impl TaskWorld {
    /// Creates a world with an empty service and no recorded results.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock));
        Self {
            service,
            ids_by_title: HashMap::new(),
            next_active: None,
            suggestions: None,
        }
    }

    /// Due date for a scenario day number.
    #[must_use]
    pub fn day(day: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(2026, 5, day, 9, 0, 0).single()
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
