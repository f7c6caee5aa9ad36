//! Infrastructure implementations.
//!
//! Contains the wildcard catalog port trait and its in-memory adapter.

pub mod memory_catalog;
pub mod ports;
