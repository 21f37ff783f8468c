//! Port contracts for infrastructure collaborators.

mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
