//! Tunable thresholds for the turn loop and the resupply gate.

use serde::{Deserialize, Serialize};

/// Policy thresholds (the `[policy]` table of the player config).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Policy {
    /// Score at which a session counts as won.
    pub target_score: u32,
    /// Resupply is considered while lives are below this.
    pub low_life_threshold: u32,
    /// Minimum gold before the loop asks the resupply advisor at all.
    pub min_purchase_gold: u32,
    /// Consecutive dead-end turns before the fallback selector is forced.
    pub max_skips_before_force: u32,
    /// Gold kept in reserve when a purchase is not urgent.
    pub min_gold_reserve: u32,
    /// Gold at or above which a purchase is always urgent.
    pub gold_high_priority_threshold: u32,
    /// Shop item id (case-insensitive) that restores a life.
    pub life_item_id: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            target_score: 1_000,
            low_life_threshold: 3,
            min_purchase_gold: 50,
            max_skips_before_force: 5,
            min_gold_reserve: 40,
            gold_high_priority_threshold: 100,
            life_item_id: "hpot".to_string(),
        }
    }
}

impl Policy {
    /// Whether the loop should consult the resupply advisor this turn.
    pub fn wants_resupply(&self, lives: u32, gold: u32) -> bool {
        lives < self.low_life_threshold && gold >= self.min_purchase_gold
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.target_score == 0 {
            return Err("policy.target_score must be > 0".to_string());
        }
        if self.max_skips_before_force == 0 {
            return Err("policy.max_skips_before_force must be > 0".to_string());
        }
        if self.life_item_id.trim().is_empty() {
            return Err("policy.life_item_id must be non-empty".to_string());
        }
        Ok(())
    }
}
