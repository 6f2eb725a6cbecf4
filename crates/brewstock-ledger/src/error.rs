//! # Ledger Error Types
//!
//! Error types for ledger lookups and catalog loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Ledger::get("999")          ─► LedgerError::NotFound                  │
//! │  Ledger::purchase("999", 1)  ─► Ok-shaped PurchaseResult (no error)    │
//! │                                                                         │
//! │  Catalog file                                                          │
//! │       │ io::Error        ─► LedgerError::CatalogRead                   │
//! │       │ toml / json      ─► LedgerError::CatalogParse                  │
//! │       │ ValidationError  ─► LedgerError::InvalidCoffee                 │
//! │       ▼                                                                 │
//! │  Protocol layer maps LedgerError to its own error responses            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use brewstock_core::{CoreError, ValidationError};
use thiserror::Error;

/// Ledger operation errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Entity not found in the ledger.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file could not be deserialized.
    #[error("Failed to parse catalog {}: {reason}", .path.display())]
    CatalogParse { path: PathBuf, reason: String },

    /// Catalog file extension is neither `.toml` nor `.json`.
    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedCatalogFormat(PathBuf),

    /// A catalog entry broke a domain rule.
    #[error("Invalid coffee '{id}': {source}")]
    InvalidCoffee {
        id: String,
        #[source]
        source: CoreError,
    },
}

impl LedgerError {
    /// Creates a NotFound error for a coffee id.
    pub fn coffee_not_found(id: impl Into<String>) -> Self {
        LedgerError::NotFound {
            entity: "Coffee".to_string(),
            id: id.into(),
        }
    }

    /// Wraps a validation failure for the catalog entry `id`.
    pub fn invalid_coffee(id: impl Into<String>, err: ValidationError) -> Self {
        LedgerError::InvalidCoffee {
            id: id.into(),
            source: CoreError::Validation(err),
        }
    }

    /// Whether this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound { .. })
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LedgerError::coffee_not_found("999");
        assert_eq!(err.to_string(), "Coffee not found: 999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_coffee_message() {
        let err = LedgerError::invalid_coffee(
            "7",
            ValidationError::Required {
                field: "name".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Invalid coffee '7': Validation error: name is required"
        );
        assert!(!err.is_not_found());
    }
}
