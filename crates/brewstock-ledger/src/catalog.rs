//! # Catalog Seeding
//!
//! Getting coffees into a fresh ledger: the built-in sample menu, or a
//! catalog file.
//!
//! ## Catalog File Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  menu.toml                          menu.json                           │
//! │  ─────────                          ─────────                           │
//! │  [[coffee]]                         [                                   │
//! │  id = "1"                             { "id": "1",                      │
//! │  name = "Pike Place Roast"              "name": "Pike Place Roast",     │
//! │  size = "Grande"                        "size": "Grande",               │
//! │  price = 395                            "price": 395,                   │
//! │  quantityAvailable = 20                 "quantityAvailable": 20 }       │
//! │                                     ]                                   │
//! │                                                                         │
//! │  load_catalog(path)                                                     │
//! │       │ read ──► parse ──► validate every entry ──► reject dup ids      │
//! │       ▼                                                                 │
//! │  seed(&ledger, coffees) ──► Ledger::add per entry                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use brewstock_core::validation::validate_coffee;
use brewstock_core::{Coffee, CoffeeSize, Money, ValidationError};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::store::Ledger;

// =============================================================================
// Sample Data
// =============================================================================

/// The five classic coffees used for development and demos.
pub fn sample_catalog() -> Vec<Coffee> {
    vec![
        Coffee::new("1", "Pike Place Roast", CoffeeSize::Grande, Money::from_cents(395), 20)
            .with_description("Smooth and balanced, our signature medium roast coffee"),
        Coffee::new("2", "Caffè Americano", CoffeeSize::Grande, Money::from_cents(365), 25)
            .with_description("Espresso shots topped with hot water for a rich, full-bodied coffee"),
        Coffee::new("3", "Caffè Latte", CoffeeSize::Grande, Money::from_cents(495), 15)
            .with_description("Rich espresso balanced with steamed milk and a light layer of foam"),
        Coffee::new("4", "Cappuccino", CoffeeSize::Grande, Money::from_cents(475), 18)
            .with_description("Dark, rich espresso with steamed milk and a deep layer of foam"),
        Coffee::new("5", "Caramel Macchiato", CoffeeSize::Grande, Money::from_cents(545), 12)
            .with_description("Freshly steamed milk with vanilla syrup, espresso, and caramel drizzle"),
    ]
}

// =============================================================================
// Catalog Files
// =============================================================================

/// On-disk catalog encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(LedgerError::UnsupportedCatalogFormat(path.to_path_buf())),
        }
    }
}

/// TOML root: a `[[coffee]]` array of tables.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    coffee: Vec<Coffee>,
}

/// Reads, parses and validates a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> LedgerResult<Vec<Coffee>> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;

    let text = std::fs::read_to_string(path).map_err(|source| LedgerError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let coffees = parse_catalog(&text, format, path)?;
    info!(path = %path.display(), count = coffees.len(), "Catalog loaded");
    Ok(coffees)
}

/// Parses and validates catalog text. `origin` is only used in errors.
pub fn parse_catalog(text: &str, format: CatalogFormat, origin: &Path) -> LedgerResult<Vec<Coffee>> {
    let parse_error = |reason: String| LedgerError::CatalogParse {
        path: PathBuf::from(origin),
        reason,
    };

    let coffees = match format {
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(text)
            .map(|catalog| catalog.coffee)
            .map_err(|e| parse_error(e.to_string()))?,
        CatalogFormat::Json => {
            serde_json::from_str::<Vec<Coffee>>(text).map_err(|e| parse_error(e.to_string()))?
        }
    };

    validate_catalog(&coffees)?;
    Ok(coffees)
}

/// Validates every entry and rejects duplicate ids.
///
/// The ledger's own `add` is last-write-wins; a catalog with the same id
/// twice is almost always a typo, so it is refused here instead.
pub fn validate_catalog(coffees: &[Coffee]) -> LedgerResult<()> {
    let mut seen = HashSet::with_capacity(coffees.len());

    for coffee in coffees {
        if let Err(err) = validate_coffee(coffee) {
            warn!(id = %coffee.id, error = %err, "Rejected catalog entry");
            return Err(LedgerError::invalid_coffee(&coffee.id, err));
        }

        if !seen.insert(coffee.id.as_str()) {
            warn!(id = %coffee.id, "Duplicate catalog id");
            return Err(LedgerError::invalid_coffee(
                &coffee.id,
                ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: coffee.id.clone(),
                },
            ));
        }
    }

    Ok(())
}

// =============================================================================
// Seeding
// =============================================================================

/// Adds every coffee to the ledger. Returns how many were added.
pub async fn seed(ledger: &Ledger, coffees: impl IntoIterator<Item = Coffee>) -> usize {
    let mut added = 0;
    for coffee in coffees {
        ledger.add(coffee).await;
        added += 1;
    }
    info!(count = added, "Ledger seeded");
    added
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_MENU: &str = r#"
[[coffee]]
id = "10"
name = "Blonde Roast"
size = "Tall"
price = 325
quantityAvailable = 40

[[coffee]]
id = "11"
name = "Flat White"
size = "Venti"
price = 565
quantityAvailable = 9
description = "Ristretto shots with a thin layer of whole milk"
"#;

    const JSON_MENU: &str = r#"[
        {"id": "20", "name": "Cold Brew", "size": "Grande", "price": 445, "quantityAvailable": 30}
    ]"#;

    fn origin() -> PathBuf {
        PathBuf::from("menu")
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let coffees = sample_catalog();
        assert_eq!(coffees.len(), 5);
        assert!(validate_catalog(&coffees).is_ok());
        assert!(coffees.iter().all(|c| c.size == CoffeeSize::Grande));
        assert_eq!(coffees[0].price.to_string(), "$3.95");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(Path::new("a/menu.toml")).unwrap(), CatalogFormat::Toml);
        assert_eq!(CatalogFormat::from_path(Path::new("MENU.JSON")).unwrap(), CatalogFormat::Json);
        assert!(matches!(
            CatalogFormat::from_path(Path::new("menu.yaml")),
            Err(LedgerError::UnsupportedCatalogFormat(_))
        ));
        assert!(CatalogFormat::from_path(Path::new("menu")).is_err());
    }

    #[test]
    fn test_parse_toml_catalog() {
        let coffees = parse_catalog(TOML_MENU, CatalogFormat::Toml, &origin()).unwrap();
        assert_eq!(coffees.len(), 2);
        assert_eq!(coffees[0].size, CoffeeSize::Tall);
        assert_eq!(coffees[0].description, None);
        assert_eq!(coffees[1].quantity_available, 9);
        assert!(coffees[1].description.is_some());
    }

    #[test]
    fn test_parse_json_catalog() {
        let coffees = parse_catalog(JSON_MENU, CatalogFormat::Json, &origin()).unwrap();
        assert_eq!(coffees.len(), 1);
        assert_eq!(coffees[0].name, "Cold Brew");
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let err = parse_catalog("[[coffee]]\nid = ", CatalogFormat::Toml, &origin()).unwrap_err();
        assert!(matches!(err, LedgerError::CatalogParse { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_size() {
        let menu = TOML_MENU.replace("Venti", "Trenta");
        assert!(parse_catalog(&menu, CatalogFormat::Toml, &origin()).is_err());
    }

    #[test]
    fn test_parse_rejects_negative_stock() {
        let menu = JSON_MENU.replace("30", "-30");
        let err = parse_catalog(&menu, CatalogFormat::Json, &origin()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCoffee { ref id, .. } if id == "20"));
    }

    #[test]
    fn test_parse_rejects_price_above_cap() {
        let menu = JSON_MENU.replace("445", &(i64::MAX / 2).to_string());
        let err = parse_catalog(&menu, CatalogFormat::Json, &origin()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid coffee '20': Validation error: price must be between 0 and 1000000"
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut coffees = sample_catalog();
        coffees.push(coffees[2].clone());
        let err = validate_catalog(&coffees).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid coffee '3': Validation error: id '3' already exists"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog("/definitely/not/here/menu.toml").unwrap_err();
        assert!(matches!(err, LedgerError::CatalogRead { .. }));
    }

    #[test]
    fn test_load_catalog_from_disk() {
        let path = std::env::temp_dir().join(format!("brewstock-menu-{}.toml", std::process::id()));
        std::fs::write(&path, TOML_MENU).unwrap();

        let coffees = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(coffees.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_sample_catalog() {
        let ledger = Ledger::new();
        let added = seed(&ledger, sample_catalog()).await;

        assert_eq!(added, 5);
        assert_eq!(ledger.len().await, 5);
        assert_eq!(ledger.get("5").await.unwrap().name, "Caramel Macchiato");
    }
}
