//! Domain model for the task catalogue.
//!
//! The domain owns the task aggregate, its validated scalar types, and the
//! two named orderings the index maintains, while keeping all infrastructure
//! concerns outside of the domain boundary. Indexed tasks expose no public
//! setters: mutation flows through [`crate::index::TaskIndex::update`] so
//! that sorted structures never hold a task under a stale key.

mod display;
mod error;
mod ids;
mod ordering;
mod task;

pub use display::{TaskSummary, summarize};
pub use error::TaskDomainError;
pub use ids::{Priority, TaskId};
pub use ordering::{CompletionKey, ScheduleKey};
pub use task::{PersistedTask, Task, TaskPatch};
