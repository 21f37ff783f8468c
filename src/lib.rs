//! Taskdesk: task indexing and retrieval core for a personal task manager.
//!
//! The heart of the crate is [`index::TaskIndex`], an in-memory repository
//! of task records built from five cooperating structures kept mutually
//! consistent on every mutation: an authoritative id map, a
//! scheduling-ordered active set, category/due-date/priority secondary maps,
//! a tag prefix trie for suggestions, and a chronologically ordered
//! completed set.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model and orderings with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`domain`]: Task aggregate, validated scalars, named orderings
//! - [`index`]: The multiply-indexed in-memory core
//! - [`ports`]: Storage port contract
//! - [`adapters`]: In-memory and `PostgreSQL` stores
//! - [`services`]: Orchestration over index and store

pub mod adapters;
pub mod domain;
pub mod index;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
