//! I/O helpers for the player: game service access, config and reports.

mod atomic;
pub mod config;
pub mod gateway;
pub mod http;
pub mod report_store;
