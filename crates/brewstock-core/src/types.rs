//! # Domain Types
//!
//! Core domain types used throughout Brewstock.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │      Coffee         │   │   PurchaseResult    │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  id (caller-given)  │   │  success            │                     │
//! │  │  name               │   │  remaining_quantity │                     │
//! │  │  size               │   │  outcome            │                     │
//! │  │  price              │   │  coffee (snapshot)  │                     │
//! │  │  quantity_available │◄──│  total, purchase_id │                     │
//! │  │  description?       │   └─────────────────────┘                     │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │    CoffeeSize       │   │  PurchaseOutcome    │                     │
//! │  │  Short | Tall       │   │  Completed          │                     │
//! │  │  Grande | Venti     │   │  InsufficientStock  │                     │
//! │  └─────────────────────┘   │  NotFound           │                     │
//! │                            │  InvalidQuantity    │                     │
//! │                            └─────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `quantity_available` ever changes after a coffee enters a ledger,
//! and only through [`Coffee::take_stock`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Coffee Size
// =============================================================================

/// Cup size a coffee is sold in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CoffeeSize {
    /// 8 fl oz.
    Short,
    /// 12 fl oz.
    Tall,
    /// 16 fl oz.
    #[default]
    Grande,
    /// 20 fl oz.
    Venti,
}

impl CoffeeSize {
    /// All sizes, smallest first.
    pub const ALL: [CoffeeSize; 4] = [
        CoffeeSize::Short,
        CoffeeSize::Tall,
        CoffeeSize::Grande,
        CoffeeSize::Venti,
    ];

    /// Display name, e.g. `"Grande"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CoffeeSize::Short => "Short",
            CoffeeSize::Tall => "Tall",
            CoffeeSize::Grande => "Grande",
            CoffeeSize::Venti => "Venti",
        }
    }
}

impl fmt::Display for CoffeeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Case-insensitive: `"grande"`, `"GRANDE"` and `"Grande"` all parse.
impl FromStr for CoffeeSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CoffeeSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "size".to_string(),
                reason: format!("unknown size '{}', expected Short, Tall, Grande or Venti", wanted),
            })
    }
}

// =============================================================================
// Coffee
// =============================================================================

/// A purchasable catalog entry.
///
/// ## Identity
/// `id` is assigned by whoever creates the coffee (seed data, catalog file,
/// admin tooling). The ledger never generates ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    /// Unique identifier within a ledger.
    pub id: String,

    /// Display name shown on the menu.
    pub name: String,

    /// Cup size.
    pub size: CoffeeSize,

    /// Unit price, serialized as plain cents.
    pub price: Money,

    /// Units left to sell. Never negative.
    pub quantity_available: i64,

    /// Optional menu description.
    pub description: Option<String>,
}

impl Coffee {
    /// Creates a coffee without a description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size: CoffeeSize,
        price: Money,
        quantity_available: i64,
    ) -> Self {
        Coffee {
            id: id.into(),
            name: name.into(),
            size,
            price,
            quantity_available,
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks and decrements stock in one step, returning the charge
    /// (`price × quantity`).
    ///
    /// ## Rules
    /// ```text
    /// quantity <= 0                  → InvalidQuantity   (stock untouched)
    /// quantity > quantity_available  → InsufficientStock (stock untouched)
    /// price × quantity overflows     → TotalOverflow     (stock untouched)
    /// otherwise                      → quantity_available -= quantity
    /// ```
    ///
    /// Every check runs before the decrement, so an `Err` never leaves stock
    /// changed. This is only atomic with respect to other callers when the
    /// caller holds the coffee exclusively (the ledger's write guard).
    pub fn take_stock(&mut self, quantity: i64) -> CoreResult<Money> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if self.quantity_available < quantity {
            return Err(CoreError::InsufficientStock {
                id: self.id.clone(),
                available: self.quantity_available,
                requested: quantity,
            });
        }

        let total = self
            .price
            .multiply_quantity(quantity)
            .ok_or_else(|| CoreError::TotalOverflow {
                id: self.id.clone(),
                price_cents: self.price.cents(),
                requested: quantity,
            })?;

        self.quantity_available -= quantity;
        Ok(total)
    }
}

// =============================================================================
// Purchase Outcome
// =============================================================================

/// How a purchase request ended.
///
/// Every variant is an ordinary business outcome; none of them is a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOutcome {
    /// Stock was decremented.
    Completed,
    /// Not enough units; stock unchanged.
    InsufficientStock,
    /// No coffee with the requested id.
    NotFound,
    /// Requested quantity was zero or negative.
    InvalidQuantity,
}

impl From<&CoreError> for PurchaseOutcome {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::CoffeeNotFound(_) => PurchaseOutcome::NotFound,
            CoreError::InsufficientStock { .. } => PurchaseOutcome::InsufficientStock,
            CoreError::InvalidQuantity { .. }
            | CoreError::TotalOverflow { .. }
            | CoreError::Validation(_) => PurchaseOutcome::InvalidQuantity,
        }
    }
}

// =============================================================================
// Purchase Result
// =============================================================================

/// What a purchase call reports back.
///
/// ## Shapes
/// ```text
/// Completed          { success: true,  remaining: new qty,       coffee/total/purchase_id: Some }
/// InsufficientStock  { success: false, remaining: unchanged qty, coffee/total/purchase_id: None }
/// InvalidQuantity    { success: false, remaining: unchanged qty (0 if no such coffee)           }
///                    (also a non-positive quantity, or a total too large to represent)
/// NotFound           { success: false, remaining: 0                                             }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    /// Whether stock was decremented.
    pub success: bool,

    /// Quantity left after this call.
    pub remaining_quantity: i64,

    /// Why the call ended the way it did.
    pub outcome: PurchaseOutcome,

    /// Requested coffee id.
    pub coffee_id: String,

    /// Requested quantity.
    pub quantity: i64,

    /// Post-commit snapshot of the coffee, on success.
    pub coffee: Option<Coffee>,

    /// Price × quantity, on success.
    pub total: Option<Money>,

    /// Receipt identifier, on success.
    #[ts(as = "Option<String>")]
    pub purchase_id: Option<Uuid>,

    #[ts(as = "String")]
    pub processed_at: DateTime<Utc>,
}

impl PurchaseResult {
    /// Builds the result of a committed purchase from the coffee as it is
    /// right after the decrement and the total [`Coffee::take_stock`] charged.
    pub fn completed(coffee: &Coffee, quantity: i64, total: Money) -> Self {
        PurchaseResult {
            success: true,
            remaining_quantity: coffee.quantity_available,
            outcome: PurchaseOutcome::Completed,
            coffee_id: coffee.id.clone(),
            quantity,
            coffee: Some(coffee.clone()),
            total: Some(total),
            purchase_id: Some(Uuid::new_v4()),
            processed_at: Utc::now(),
        }
    }

    /// Builds a rejected result, with the outcome taken from `err`.
    /// `remaining_quantity` must be the coffee's current, unchanged stock
    /// (0 when the coffee doesn't exist).
    pub fn rejected(
        err: &CoreError,
        coffee_id: impl Into<String>,
        quantity: i64,
        remaining_quantity: i64,
    ) -> Self {
        PurchaseResult {
            success: false,
            remaining_quantity,
            outcome: PurchaseOutcome::from(err),
            coffee_id: coffee_id.into(),
            quantity,
            coffee: None,
            total: None,
            purchase_id: None,
            processed_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn latte(quantity: i64) -> Coffee {
        Coffee::new("3", "Caffè Latte", CoffeeSize::Grande, Money::from_cents(495), quantity)
    }

    #[test]
    fn test_size_parses_case_insensitively() {
        assert_eq!("grande".parse::<CoffeeSize>().unwrap(), CoffeeSize::Grande);
        assert_eq!(" VENTI ".parse::<CoffeeSize>().unwrap(), CoffeeSize::Venti);
        assert_eq!("Short".parse::<CoffeeSize>().unwrap(), CoffeeSize::Short);
        assert!("trenta".parse::<CoffeeSize>().is_err());
    }

    #[test]
    fn test_size_defaults_to_grande() {
        assert_eq!(CoffeeSize::default(), CoffeeSize::Grande);
    }

    #[test]
    fn test_size_display_round_trips_through_from_str() {
        for size in CoffeeSize::ALL {
            assert_eq!(size.to_string().parse::<CoffeeSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_take_stock_decrements() {
        let mut coffee = latte(10);
        assert_eq!(coffee.take_stock(2), Ok(Money::from_cents(990)));
        assert_eq!(coffee.quantity_available, 8);
    }

    #[test]
    fn test_take_stock_can_empty_the_shelf() {
        let mut coffee = latte(5);
        assert!(coffee.take_stock(5).is_ok());
        assert_eq!(coffee.quantity_available, 0);
        assert!(matches!(
            coffee.take_stock(1),
            Err(CoreError::InsufficientStock { available: 0, .. })
        ));
    }

    #[test]
    fn test_take_stock_refuses_oversell() {
        let mut coffee = latte(8);
        let err = coffee.take_stock(20).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                id: "3".to_string(),
                available: 8,
                requested: 20,
            }
        );
        assert_eq!(coffee.quantity_available, 8);
    }

    #[test]
    fn test_take_stock_refuses_non_positive_quantity() {
        let mut coffee = latte(8);
        assert_eq!(
            coffee.take_stock(0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        );
        assert_eq!(
            coffee.take_stock(-3),
            Err(CoreError::InvalidQuantity { requested: -3 })
        );
        assert_eq!(coffee.quantity_available, 8);
    }

    #[test]
    fn test_take_stock_refuses_overflowing_total() {
        let mut coffee = latte(3);
        coffee.price = Money::from_cents(i64::MAX / 2);

        let err = coffee.take_stock(3).unwrap_err();
        assert!(matches!(err, CoreError::TotalOverflow { requested: 3, .. }));
        assert_eq!(coffee.quantity_available, 3);

        // Two still fit.
        assert_eq!(coffee.take_stock(2), Ok(Money::from_cents(i64::MAX - 1)));
        assert_eq!(coffee.quantity_available, 1);
    }

    #[test]
    fn test_take_stock_with_negative_stock_is_insufficient() {
        let mut coffee = latte(-4);
        assert!(matches!(
            coffee.take_stock(1),
            Err(CoreError::InsufficientStock { available: -4, .. })
        ));
        assert_eq!(coffee.quantity_available, -4);
    }

    #[test]
    fn test_completed_result_carries_receipt() {
        let mut coffee = latte(10);
        let total = coffee.take_stock(3).unwrap();
        let result = PurchaseResult::completed(&coffee, 3, total);

        assert!(result.success);
        assert_eq!(result.outcome, PurchaseOutcome::Completed);
        assert_eq!(result.remaining_quantity, 7);
        assert_eq!(result.total, Some(Money::from_cents(1485)));
        assert!(result.purchase_id.is_some());
        assert_eq!(result.coffee.as_ref().map(|c| c.quantity_available), Some(7));
    }

    #[test]
    fn test_rejected_result_has_no_receipt() {
        let err = CoreError::CoffeeNotFound("999".to_string());
        let result = PurchaseResult::rejected(&err, "999", 1, 0);
        assert!(!result.success);
        assert_eq!(result.outcome, PurchaseOutcome::NotFound);
        assert_eq!(result.remaining_quantity, 0);
        assert!(result.coffee.is_none());
        assert!(result.total.is_none());
        assert!(result.purchase_id.is_none());
    }

    #[test]
    fn test_outcome_from_core_error() {
        let err = CoreError::InsufficientStock {
            id: "1".to_string(),
            available: 1,
            requested: 2,
        };
        assert_eq!(PurchaseOutcome::from(&err), PurchaseOutcome::InsufficientStock);
        assert_eq!(
            PurchaseOutcome::from(&CoreError::CoffeeNotFound("9".to_string())),
            PurchaseOutcome::NotFound
        );
        assert_eq!(
            PurchaseOutcome::from(&CoreError::TotalOverflow {
                id: "1".to_string(),
                price_cents: i64::MAX,
                requested: 2,
            }),
            PurchaseOutcome::InvalidQuantity
        );

        let validation = crate::validation::validate_quantity(0).unwrap_err();
        assert_eq!(
            PurchaseOutcome::from(&CoreError::from(validation)),
            PurchaseOutcome::InvalidQuantity
        );
    }

    #[test]
    fn test_coffee_serializes_camel_case() {
        let coffee = latte(15).with_description("Rich espresso");
        let json = serde_json::to_value(&coffee).unwrap();
        assert_eq!(json["quantityAvailable"], 15);
        assert_eq!(json["price"], 495);
        assert!(json.get("priceCents").is_none());
        assert_eq!(json["size"], "Grande");
        assert_eq!(json["description"], "Rich espresso");
    }

    #[test]
    fn test_result_serializes_outcome_code() {
        let err = CoreError::InsufficientStock {
            id: "1".to_string(),
            available: 8,
            requested: 20,
        };
        let result = PurchaseResult::rejected(&err, "1", 20, 8);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["remainingQuantity"], 8);
        assert_eq!(json["outcome"], "INSUFFICIENT_STOCK");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: take_stock never drives stock negative and only
            /// changes it on success.
            #[test]
            fn take_stock_never_goes_negative(
                start in 0i64..500,
                requests in proptest::collection::vec(-5i64..60, 0..50)
            ) {
                let mut coffee = latte(start);
                for quantity in requests {
                    let before = coffee.quantity_available;
                    match coffee.take_stock(quantity) {
                        Ok(total) => {
                            prop_assert_eq!(coffee.quantity_available, before - quantity);
                            prop_assert_eq!(total.cents(), 495 * quantity);
                        }
                        Err(_) => prop_assert_eq!(coffee.quantity_available, before),
                    }
                    prop_assert!(coffee.quantity_available >= 0);
                }
            }
        }
    }
}
