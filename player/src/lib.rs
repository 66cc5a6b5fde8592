//! Automated player for a turn-based mission game service.
//!
//! A session starts a game, then each turn picks the most valuable mission that
//! is safe enough for the remaining lives, buys a life when gold allows, and
//! stops once the target score is reached or the lives run out. The crate keeps
//! a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (risk tiers, selection, resupply
//!   gate, state updates, summaries). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (HTTP gateway, config, reports).
//!   Hidden behind the [`io::gateway::Gateway`] trait to enable scripting in tests.
//!
//! Orchestration modules ([`session`], [`resupply`], [`play`]) coordinate core
//! logic with the gateway to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod play;
pub mod resupply;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
