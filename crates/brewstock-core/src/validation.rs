//! # Validation Module
//!
//! Validation of catalog entries before they are seeded into a ledger.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Catalog file / sample data                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: validate_coffee() per entry                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Ledger::add() ── trusts its caller, never re-validates                │
//! │                                                                         │
//! │  Purchases: Ledger::purchase runs validate_quantity, then              │
//! │  Coffee::take_stock, both inside the ledger's write guard.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brewstock_core::validation::{validate_coffee_id, validate_quantity};
//!
//! assert!(validate_coffee_id("1").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Coffee;
use crate::{MAX_DESCRIPTION_LENGTH, MAX_ID_LENGTH, MAX_NAME_LENGTH, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a coffee id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - No whitespace (ids travel through URLs and query variables)
pub fn validate_coffee_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LENGTH,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a coffee display name.
///
/// ## Example
/// ```rust
/// use brewstock_core::validation::validate_coffee_name;
///
/// assert!(validate_coffee_name("Caramel Macchiato").is_ok());
/// assert!(validate_coffee_name("   ").is_err());
/// ```
pub fn validate_coffee_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an optional description. Absent is fine.
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LENGTH => {
            Err(ValidationError::TooLong {
                field: "description".to_string(),
                max: MAX_DESCRIPTION_LENGTH,
            })
        }
        _ => Ok(()),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (promotional items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&price.cents()) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a starting stock level. Zero is allowed (sold out).
pub fn validate_stock(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantityAvailable".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// `Ledger::purchase` runs this first, under its write guard, so a bad
/// quantity is reported before an unknown id.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every field of a coffee.
pub fn validate_coffee(coffee: &Coffee) -> ValidationResult<()> {
    validate_coffee_id(&coffee.id)?;
    validate_coffee_name(&coffee.name)?;
    validate_price(coffee.price)?;
    validate_stock(coffee.quantity_available)?;
    validate_description(coffee.description.as_deref())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::CoffeeSize;

    #[test]
    fn test_validate_coffee_id() {
        assert!(validate_coffee_id("1").is_ok());
        assert!(validate_coffee_id("pike-place_grande").is_ok());

        assert!(validate_coffee_id("").is_err());
        assert!(validate_coffee_id("has space").is_err());
        assert!(validate_coffee_id(&"9".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_coffee_name() {
        assert!(validate_coffee_name("Caffè Americano").is_ok());
        assert!(validate_coffee_name("").is_err());
        assert!(validate_coffee_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("Smooth and balanced")).is_ok());
        assert!(validate_description(Some(&"x".repeat(1001))).is_err());
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(395)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert_eq!(
            validate_price(Money::from_cents(i64::MAX / 2)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());

        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_coffee() {
        let good = Coffee::new("1", "Pike Place Roast", CoffeeSize::Grande, Money::from_cents(395), 20);
        assert!(validate_coffee(&good).is_ok());

        let mut negative_stock = good.clone();
        negative_stock.quantity_available = -4;
        assert_eq!(
            validate_coffee(&negative_stock),
            Err(ValidationError::OutOfRange {
                field: "quantityAvailable".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );

        let mut unnamed = good;
        unnamed.name = " ".to_string();
        assert!(matches!(
            validate_coffee(&unnamed),
            Err(ValidationError::Required { .. })
        ));
    }
}
