//! Session view transitions driven by service responses.
//!
//! Each update builds a new [`Session`] from the previous one. Counters the
//! response leaves out keep their previous value.

use crate::core::types::{PurchaseOutcome, Session, SolveOutcome};

/// Apply a solve response. Session id and level are never taken from it.
pub fn apply_solve(prev: &Session, outcome: &SolveOutcome) -> Session {
    Session {
        id: prev.id.clone(),
        lives: outcome.lives.unwrap_or(prev.lives),
        gold: outcome.gold.unwrap_or(prev.gold),
        level: prev.level,
        score: outcome.score.unwrap_or(prev.score),
        turn: outcome.turn.unwrap_or(prev.turn),
        high_score: outcome.high_score.unwrap_or(prev.high_score),
    }
}

/// Apply a purchase response. Score and high score are never taken from it.
pub fn apply_purchase(prev: &Session, outcome: &PurchaseOutcome) -> Session {
    Session {
        id: prev.id.clone(),
        lives: outcome.lives.unwrap_or(prev.lives),
        gold: outcome.gold.unwrap_or(prev.gold),
        level: outcome.level.unwrap_or(prev.level),
        score: prev.score,
        turn: outcome.turn.unwrap_or(prev.turn),
        high_score: prev.high_score,
    }
}
