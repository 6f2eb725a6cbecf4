//! # brewstock-core: Pure Domain Logic for Brewstock
//!
//! This crate holds the coffee catalog's domain model and the stock rules
//! every purchase has to obey. It has zero I/O and zero shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brewstock Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Protocol layer (GraphQL gateway, out of workspace)       │   │
//! │  │        coffees / coffee(id) / purchaseCoffee(id, quantity)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        brewstock-ledger (RwLock-guarded store + facades)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Coffee (write guard held)         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brewstock-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│   │   │
//! │  │   │  Coffee   │  │   Money   │  │ CoreError │  │   rules   │   │   │
//! │  │   │ Purchase* │  │           │  │           │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Coffee, CoffeeSize, PurchaseResult)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog entry validation
//!
//! ## Example Usage
//!
//! ```rust
//! use brewstock_core::{Coffee, CoffeeSize, Money};
//!
//! let mut latte = Coffee::new("3", "Caffè Latte", CoffeeSize::Grande, Money::from_cents(495), 15);
//!
//! let total = latte.take_stock(2).unwrap();
//! assert_eq!(total.to_string(), "$9.90");
//! assert_eq!(latte.quantity_available, 13);
//!
//! // Overselling is refused and leaves stock untouched.
//! assert!(latte.take_stock(20).is_err());
//! assert_eq!(latte.quantity_available, 13);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a coffee id.
pub const MAX_ID_LENGTH: usize = 64;

/// Maximum length of a coffee display name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a coffee description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Highest catalog price, in cents ($10,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000;
