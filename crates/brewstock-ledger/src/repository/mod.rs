//! # Facade Module
//!
//! Read-only and mutating method groups over one [`crate::Ledger`].
//!
//! ## Facade Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two Facades, One Store                               │
//! │                                                                         │
//! │  Protocol layer (Query resolver)     Protocol layer (Mutation resolver) │
//! │       │                                      │                          │
//! │       │ ledger.queries()                     │ ledger.mutations()       │
//! │       ▼                                      ▼                          │
//! │  CoffeeQueries                          CoffeeMutations                 │
//! │  ├── coffees()                          └── purchase_coffee(id, qty)    │
//! │  ├── coffee(id)                                                         │
//! │  └── count()                                                            │
//! │       │                                      │                          │
//! │       └──────────────┬───────────────────────┘                          │
//! │                      ▼                                                  │
//! │            Ledger (same Arc<RwLock<..>>)                                │
//! │                                                                         │
//! │  Neither facade holds data of its own.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Facades
//!
//! - [`CoffeeQueries`] - catalog listing and lookup
//! - [`CoffeeMutations`] - purchases

pub mod mutation;
pub mod query;

pub use mutation::CoffeeMutations;
pub use query::CoffeeQueries;
