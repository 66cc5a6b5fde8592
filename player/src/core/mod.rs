//! Deterministic, pure logic shared by the player.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod policy;
pub mod recovery;
pub mod resupply;
pub mod risk;
pub mod selector;
pub mod state_update;
pub mod summary;
pub mod types;
