//! # brewstock-ledger: Inventory Ledger for Brewstock
//!
//! The authoritative, in-memory record of coffees and their remaining stock,
//! safe to share between any number of concurrent callers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brewstock Data Flow                              │
//! │                                                                         │
//! │  GraphQL resolver (purchaseCoffee)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  brewstock-ledger (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │    Ledger     │    │   Facades     │    │   Catalog    │   │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │ (catalog.rs) │   │   │
//! │  │   │               │    │               │    │              │   │   │
//! │  │   │ RwLock<Map>   │◄───│ CoffeeQueries │    │ sample menu  │   │   │
//! │  │   │               │    │ CoffeeMutat.. │    │ toml / json  │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  brewstock-core: Coffee::take_stock under the write guard              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The lock-guarded ledger
//! - [`repository`] - Query and mutation facades
//! - [`catalog`] - Sample data and catalog files
//! - [`config`] - Environment configuration
//! - [`error`] - Ledger error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brewstock_ledger::{catalog, Ledger};
//!
//! let ledger = Ledger::new();
//! catalog::seed(&ledger, catalog::sample_catalog()).await;
//!
//! let menu = ledger.queries().coffees().await;
//! let result = ledger.mutations().purchase_coffee("1", 2).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, LedgerConfig};
pub use error::{LedgerError, LedgerResult};
pub use repository::{CoffeeMutations, CoffeeQueries};
pub use store::Ledger;
