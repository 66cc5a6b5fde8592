//! Shared deterministic types for the player core.
//!
//! These records mirror the game service's payloads. Outcome records keep every
//! counter optional so that a partial response can never zero out local state.

use serde::{Deserialize, Serialize};

use crate::core::risk::{RiskBand, deserialize_lenient};

/// Session id reported when the game could not be started.
pub const UNSTARTED_SESSION_ID: &str = "error";

/// Local view of one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "gameId")]
    pub id: String,
    pub lives: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub turn: u32,
    #[serde(default)]
    pub high_score: u32,
}

/// A mission offered for the current turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "adId")]
    pub id: String,
    #[serde(rename = "message", default)]
    pub description: String,
    #[serde(
        rename = "probability",
        default,
        deserialize_with = "deserialize_lenient"
    )]
    pub risk: Option<RiskBand>,
    #[serde(default)]
    pub expires_in: i32,
    #[serde(default)]
    pub reward: u32,
    #[serde(default)]
    pub encrypted: Option<u32>,
}

impl Task {
    /// Whether the task can still be attempted this turn.
    pub fn is_live(&self) -> bool {
        self.expires_in > 0
    }
}

/// Response to a solve attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOutcome {
    #[serde(default)]
    pub success: bool,
    pub lives: Option<u32>,
    pub gold: Option<u32>,
    pub score: Option<u32>,
    pub high_score: Option<u32>,
    pub turn: Option<u32>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: u32,
}

/// Response to a shop purchase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    #[serde(rename = "shoppingSuccess", alias = "success", default)]
    pub success: bool,
    pub lives: Option<u32>,
    pub gold: Option<u32>,
    pub level: Option<u32>,
    pub turn: Option<u32>,
}

/// Terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Score reached the target.
    Won,
    /// Lives dropped to zero.
    LivesExhausted,
    /// The session could not continue (start or task listing failed).
    Errored,
}

/// Result of one played session, handed to the summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    #[serde(rename = "gameId")]
    pub session_id: String,
    pub final_score: u32,
    pub turns_played: u32,
    pub success: bool,
    pub failure_reason: Option<String>,
    pub outcome: SessionOutcome,
}

impl SessionResult {
    /// Result for a session that ended normally (won or out of lives).
    pub fn finished(session: &Session, outcome: SessionOutcome) -> Self {
        Self {
            session_id: session.id.clone(),
            final_score: session.score,
            turns_played: session.turn,
            success: outcome == SessionOutcome::Won,
            failure_reason: None,
            outcome,
        }
    }

    /// Result for a session that stopped on an unrecoverable failure.
    pub fn errored(session_id: &str, score: u32, turn: u32, reason: impl Into<String>) -> Self {
        Self {
            session_id: session_id.to_string(),
            final_score: score,
            turns_played: turn,
            success: false,
            failure_reason: Some(reason.into()),
            outcome: SessionOutcome::Errored,
        }
    }
}
