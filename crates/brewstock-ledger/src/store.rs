//! # Ledger Store
//!
//! The shared coffee map and its locking discipline.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Ledger (Clone handle)                          │
//! │                                                                         │
//! │   Arc<RwLock<HashMap<String, Coffee>>>                                  │
//! │                                                                         │
//! │   list() / get()         ──► read guard  (many at once)                 │
//! │   add()  / purchase()    ──► write guard (one at a time)                │
//! │                                                                         │
//! │   purchase(id, qty): ONE write guard spans the whole sequence           │
//! │   ┌──────────┐   ┌────────┐   ┌────────────┐   ┌──────────────────┐    │
//! │   │ Validate │──►│ Lookup │──►│ CheckStock │──►│ Commit / Reject  │    │
//! │   └──────────┘   └────────┘   └────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │   Taking the guard only around the final write would let two buyers    │
//! │   both pass CheckStock before either decrements.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Guards are never held across another `.await`, so hold times are bounded
//! by a hash lookup plus a clone.

use std::collections::HashMap;
use std::sync::Arc;

use brewstock_core::validation::validate_quantity;
use brewstock_core::{Coffee, CoreError, PurchaseResult};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::repository::mutation::CoffeeMutations;
use crate::repository::query::CoffeeQueries;

// =============================================================================
// Ledger
// =============================================================================

/// Handle to an in-memory coffee ledger.
///
/// Cloning is cheap and every clone addresses the same store, so one ledger
/// can be handed to as many request handlers as needed.
///
/// ## Example
/// ```rust
/// use brewstock_core::{Coffee, CoffeeSize, Money};
/// use brewstock_ledger::Ledger;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let ledger = Ledger::new();
/// ledger
///     .add(Coffee::new("1", "Pike Place Roast", CoffeeSize::Grande, Money::from_cents(395), 10))
///     .await;
///
/// let result = ledger.purchase("1", 2).await;
/// assert!(result.success);
/// assert_eq!(result.remaining_quantity, 8);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    coffees: Arc<RwLock<HashMap<String, Coffee>>>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Inserts `coffee` at `coffee.id`, replacing whatever was there.
    ///
    /// No merge and no validation: the caller hands over a fully formed
    /// coffee. The replaced entry, if any, is returned.
    pub async fn add(&self, coffee: Coffee) -> Option<Coffee> {
        let mut coffees = self.coffees.write().await;
        let replaced = coffees.insert(coffee.id.clone(), coffee);
        if let Some(old) = &replaced {
            debug!(id = %old.id, "Replaced existing coffee");
        }
        replaced
    }

    /// Snapshot of every coffee, ordered by id.
    pub async fn list(&self) -> Vec<Coffee> {
        let mut snapshot: Vec<Coffee> = {
            let coffees = self.coffees.read().await;
            coffees.values().cloned().collect()
        };
        snapshot.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot
    }

    /// Returns the coffee stored at `id`.
    ///
    /// ## Returns
    /// * `Ok(Coffee)` - a copy as of this instant
    /// * `Err(LedgerError::NotFound)` - no coffee with that id
    pub async fn get(&self, id: &str) -> LedgerResult<Coffee> {
        self.coffees
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::coffee_not_found(id))
    }

    /// Atomically checks and decrements stock for `id`.
    ///
    /// Never fails: unknown ids, non-positive quantities, insufficient
    /// stock and totals too large to represent come back as
    /// `success: false` with the stock left untouched. Validation runs
    /// before lookup, so a non-positive quantity for an unknown id reports
    /// `InvalidQuantity`.
    ///
    /// Works on whatever [`Ledger::add`] stored, including values a catalog
    /// would have refused (negative stock, huge prices).
    pub async fn purchase(&self, id: &str, quantity: i64) -> PurchaseResult {
        let mut coffees = self.coffees.write().await;

        if let Err(err) = validate_quantity(quantity) {
            let remaining = coffees.get(id).map_or(0, |c| c.quantity_available);
            return PurchaseResult::rejected(&CoreError::from(err), id, quantity, remaining);
        }

        let Some(coffee) = coffees.get_mut(id) else {
            let err = CoreError::CoffeeNotFound(id.to_string());
            return PurchaseResult::rejected(&err, id, quantity, 0);
        };

        match coffee.take_stock(quantity) {
            Ok(total) => PurchaseResult::completed(coffee, quantity, total),
            Err(err) => PurchaseResult::rejected(&err, id, quantity, coffee.quantity_available),
        }
    }

    /// Number of coffees in the ledger.
    pub async fn len(&self) -> usize {
        self.coffees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.coffees.read().await.is_empty()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.coffees.read().await.contains_key(id)
    }

    /// Returns the read-only facade.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let menu = ledger.queries().coffees().await;
    /// ```
    pub fn queries(&self) -> CoffeeQueries {
        CoffeeQueries::new(self.clone())
    }

    /// Returns the purchase facade.
    pub fn mutations(&self) -> CoffeeMutations {
        CoffeeMutations::new(self.clone())
    }
}

/// Builds a ledger without going through the lock; later entries with the
/// same id win, matching [`Ledger::add`].
impl FromIterator<Coffee> for Ledger {
    fn from_iter<I: IntoIterator<Item = Coffee>>(iter: I) -> Self {
        let coffees = iter
            .into_iter()
            .map(|coffee| (coffee.id.clone(), coffee))
            .collect::<HashMap<_, _>>();
        Ledger {
            coffees: Arc::new(RwLock::new(coffees)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
