//! Pure decision gate for buying a life-restoring item.

use crate::core::policy::Policy;
use crate::core::types::ShopItem;

/// Why the shop is not worth visiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Lives are at or above the comfort level.
    LivesSufficient,
    /// Two lives left and gold below the reserve.
    ReserveProtected,
    /// Not urgent and gold below the reserve.
    BelowReserve,
}

/// Outcome of the resupply gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopDecision {
    Skip(SkipReason),
    Visit { high_priority: bool },
}

/// Decide whether the shop should be queried at all.
pub fn shop_decision(gold: u32, lives: u32, policy: &Policy) -> ShopDecision {
    if lives >= policy.low_life_threshold {
        return ShopDecision::Skip(SkipReason::LivesSufficient);
    }
    if lives == 2 && gold < policy.min_gold_reserve {
        return ShopDecision::Skip(SkipReason::ReserveProtected);
    }
    if gold >= policy.gold_high_priority_threshold || lives == 1 {
        return ShopDecision::Visit {
            high_priority: true,
        };
    }
    if gold < policy.min_gold_reserve {
        return ShopDecision::Skip(SkipReason::BelowReserve);
    }
    ShopDecision::Visit {
        high_priority: false,
    }
}

/// Find the life-restoring item by case-insensitive id.
pub fn find_life_item<'a>(items: &'a [ShopItem], item_id: &str) -> Option<&'a ShopItem> {
    items
        .iter()
        .find(|item| item.id.eq_ignore_ascii_case(item_id))
}
