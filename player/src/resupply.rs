//! Resupply advisor: buys a life-restoring item when the gate allows it.

use tracing::{debug, info, warn};

use crate::core::policy::Policy;
use crate::core::resupply::{ShopDecision, find_life_item, shop_decision};
use crate::core::types::PurchaseOutcome;
use crate::io::gateway::Gateway;

/// Try to buy the life item for `session_id`.
///
/// Returns the purchase outcome when an item was bought. Every gateway failure
/// (including insufficient resources) is logged and turned into `None`.
pub fn try_restore_life<G: Gateway + ?Sized>(
    gateway: &G,
    session_id: &str,
    gold: u32,
    lives: u32,
    policy: &Policy,
) -> Option<PurchaseOutcome> {
    match shop_decision(gold, lives, policy) {
        ShopDecision::Skip(reason) => {
            debug!(gold, lives, ?reason, "skipping shop");
            return None;
        }
        ShopDecision::Visit { high_priority } => {
            debug!(gold, lives, high_priority, "visiting shop");
        }
    }

    let items = match gateway.list_shop_items(session_id) {
        Ok(items) => items,
        Err(err) => {
            warn!(session_id, kind = err.kind(), err = %err, "shop listing failed");
            return None;
        }
    };
    let Some(item) = find_life_item(&items, &policy.life_item_id) else {
        debug!(item_id = %policy.life_item_id, "life item not offered");
        return None;
    };
    if gold < item.cost {
        debug!(gold, cost = item.cost, "cannot afford life item");
        return None;
    }

    match gateway.purchase_item(session_id, &item.id) {
        Ok(outcome) => {
            info!(
                session_id,
                item_id = %item.id,
                success = outcome.success,
                lives = ?outcome.lives,
                gold = ?outcome.gold,
                "purchased life item"
            );
            Some(outcome)
        }
        Err(err) => {
            warn!(session_id, item_id = %item.id, kind = err.kind(), err = %err, "purchase failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::gateway::GatewayError;
    use crate::test_support::{GatewayCall, ScriptedGateway, purchased, shop_item};

    fn shop() -> Vec<crate::core::types::ShopItem> {
        vec![
            shop_item("cs", "Claw Sharpening", 100),
            shop_item("hpot", "Healing potion", 50),
        ]
    }

    #[test]
    fn protected_reserve_never_queries_shop() {
        let gateway = ScriptedGateway::new();
        let outcome = try_restore_life(&gateway, "g1", 30, 2, &Policy::default());
        assert!(outcome.is_none());
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn last_life_buys_potion() {
        let gateway = ScriptedGateway::new()
            .with_shop(Ok(shop()))
            .with_purchase(Ok(purchased(2, 50, 8)));

        let outcome = try_restore_life(&gateway, "g1", 100, 1, &Policy::default()).expect("bought");

        assert_eq!(outcome.lives, Some(2));
        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::ListShopItems("g1".to_string()),
                GatewayCall::PurchaseItem {
                    session_id: "g1".to_string(),
                    item_id: "hpot".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_item_skips_purchase() {
        let gateway =
            ScriptedGateway::new().with_shop(Ok(vec![shop_item("cs", "Claw Sharpening", 100)]));
        assert!(try_restore_life(&gateway, "g1", 100, 1, &Policy::default()).is_none());
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn unaffordable_item_skips_purchase() {
        let gateway = ScriptedGateway::new().with_shop(Ok(shop()));
        assert!(try_restore_life(&gateway, "g1", 20, 1, &Policy::default()).is_none());
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn gateway_failures_are_swallowed() {
        let gateway = ScriptedGateway::new()
            .with_shop(Ok(shop()))
            .with_purchase(Err(GatewayError::InsufficientResources {
                item_id: "hpot".to_string(),
            }));
        assert!(try_restore_life(&gateway, "g1", 60, 1, &Policy::default()).is_none());

        let gateway = ScriptedGateway::new().with_shop(Err(GatewayError::SessionNotFound {
            session_id: "g1".to_string(),
        }));
        assert!(try_restore_life(&gateway, "g1", 60, 1, &Policy::default()).is_none());
    }
}
