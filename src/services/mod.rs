//! Application services orchestrating the index and the storage port.

mod manager;

pub use manager::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
