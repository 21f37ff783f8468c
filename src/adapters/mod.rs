//! Adapter implementations of the storage port.

pub mod memory;
pub mod postgres;
