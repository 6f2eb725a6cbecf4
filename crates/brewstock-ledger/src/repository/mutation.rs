//! # Coffee Mutations
//!
//! The only write path exposed to callers: purchasing.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchaseCoffee(id: "1", quantity: 2)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CoffeeMutations::purchase_coffee ← THIS MODULE                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ledger::purchase  (write guard: validate → lookup → check → commit)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PurchaseResult { success, remaining_quantity, outcome, ... }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No update, delete or set-quantity mutation is exposed.

use brewstock_core::{PurchaseOutcome, PurchaseResult};
use tracing::{debug, info};

use crate::store::Ledger;

/// Purchase operations over a ledger.
#[derive(Debug, Clone)]
pub struct CoffeeMutations {
    ledger: Ledger,
}

impl CoffeeMutations {
    pub fn new(ledger: Ledger) -> Self {
        CoffeeMutations { ledger }
    }

    /// Buys `quantity` units of coffee `id`.
    ///
    /// Ordinary failures (unknown id, bad quantity, not enough stock) come
    /// back as `success: false`; this never returns an error.
    pub async fn purchase_coffee(&self, id: &str, quantity: i64) -> PurchaseResult {
        let result = self.ledger.purchase(id, quantity).await;

        match result.outcome {
            PurchaseOutcome::Completed => info!(
                id = %id,
                quantity,
                remaining = result.remaining_quantity,
                "Coffee purchased"
            ),
            outcome => debug!(
                id = %id,
                quantity,
                remaining = result.remaining_quantity,
                ?outcome,
                "Purchase rejected"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewstock_core::{Coffee, CoffeeSize, Money};

    async fn mutations_with_stock(quantity: i64) -> (Ledger, CoffeeMutations) {
        let ledger = Ledger::new();
        ledger
            .add(Coffee::new("1", "Test Coffee", CoffeeSize::Grande, Money::from_cents(450), quantity))
            .await;
        let mutations = ledger.mutations();
        (ledger, mutations)
    }

    #[tokio::test]
    async fn test_purchase_coffee() {
        let (_, mutations) = mutations_with_stock(10).await;

        let result = mutations.purchase_coffee("1", 2).await;
        assert!(result.success);
        assert_eq!(result.remaining_quantity, 8);
        assert_eq!(result.coffee_id, "1");
        assert_eq!(result.quantity, 2);

        let result = mutations.purchase_coffee("1", 20).await;
        assert!(!result.success);
        assert_eq!(result.remaining_quantity, 8);

        let result = mutations.purchase_coffee("999", 1).await;
        assert!(!result.success);
        assert_eq!(result.outcome, PurchaseOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_purchase_visible_through_queries() {
        let (ledger, mutations) = mutations_with_stock(10).await;

        mutations.purchase_coffee("1", 3).await;

        let coffee = ledger.queries().coffee("1").await.unwrap();
        assert_eq!(coffee.quantity_available, 7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_purchases() {
        let (ledger, mutations) = mutations_with_stock(100).await;

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let mutations = mutations.clone();
                tokio::spawn(async move { mutations.purchase_coffee("1", 5).await })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap();
            assert!(result.success, "purchase failed: {:?}", result.outcome);
        }

        let coffee = ledger.queries().coffee("1").await.unwrap();
        assert_eq!(coffee.quantity_available, 50); // 100 - (10 * 5)
    }
}
