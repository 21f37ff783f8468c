//! `PostgreSQL` adapter for durable task storage.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};
