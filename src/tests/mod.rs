//! Unit tests for the task indexing core.
//!
//! Tests are organised by layer: domain validation and orderings, the tag
//! trie, the index consistency discipline, and service orchestration.

mod support;
mod trie_tests;
