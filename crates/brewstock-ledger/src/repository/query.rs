//! # Coffee Queries
//!
//! Read-only facade: list the catalog, look up one coffee.

use brewstock_core::Coffee;
use tracing::debug;

use crate::error::LedgerResult;
use crate::store::Ledger;

/// Read-only operations over a ledger.
///
/// ## Usage
/// ```rust,ignore
/// let queries = ledger.queries();
///
/// let menu = queries.coffees().await;
/// let latte = queries.coffee("3").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CoffeeQueries {
    ledger: Ledger,
}

impl CoffeeQueries {
    pub fn new(ledger: Ledger) -> Self {
        CoffeeQueries { ledger }
    }

    /// All coffees, ordered by id.
    pub async fn coffees(&self) -> Vec<Coffee> {
        let coffees = self.ledger.list().await;
        debug!(count = coffees.len(), "Listed coffees");
        coffees
    }

    /// One coffee by id.
    ///
    /// ## Returns
    /// * `Ok(Coffee)` - coffee found
    /// * `Err(LedgerError::NotFound)` - no coffee with that id
    pub async fn coffee(&self, id: &str) -> LedgerResult<Coffee> {
        debug!(id = %id, "Fetching coffee");
        self.ledger.get(id).await
    }

    /// Number of coffees on the menu.
    pub async fn count(&self) -> usize {
        self.ledger.len().await
    }
}
