//! # Error Types
//!
//! Domain-specific error types for brewstock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brewstock-core errors (this file)                                     │
//! │  ├── CoreError        - Stock and purchase rule violations             │
//! │  └── ValidationError  - Catalog entry validation failures              │
//! │                                                                         │
//! │  brewstock-ledger errors (separate crate)                              │
//! │  └── LedgerError      - Lookups and catalog loading                    │
//! │                                                                         │
//! │  Purchases never surface CoreError to callers: the ledger folds        │
//! │  every variant into a PurchaseOutcome on a PurchaseResult.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by stock rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No coffee with this id.
    #[error("Coffee not found: {0}")]
    CoffeeNotFound(String),

    /// Not enough units left to satisfy the request.
    ///
    /// ## User Workflow
    /// ```text
    /// purchaseCoffee("1", 20)
    ///      │
    ///      ▼
    /// Check stock: available=8
    ///      │
    ///      ▼
    /// InsufficientStock { id: "1", available: 8, requested: 20 }
    ///      │
    ///      ▼
    /// PurchaseResult { success: false, remaining_quantity: 8 }
    /// ```
    #[error("Insufficient stock for {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: String,
        available: i64,
        requested: i64,
    },

    /// Purchase quantity was zero or negative.
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// `price × quantity` doesn't fit in an `i64` of cents.
    #[error("Total for {requested} × {id} overflows (price {price_cents} cents)")]
    TotalOverflow {
        id: String,
        price_cents: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a catalog entry doesn't meet requirements. The ledger itself
/// never validates on insert; these run where catalogs are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. whitespace inside an id, unknown size).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two catalog rows with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
