//! # Ledger Configuration
//!
//! Startup configuration for processes that host a ledger.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BREWSTOCK_*`)
//! 2. Defaults (this file)
//!
//! Read once at startup; nothing here changes afterwards.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const ENV_CATALOG: &str = "BREWSTOCK_CATALOG";
const ENV_SEED_SAMPLE: &str = "BREWSTOCK_SEED_SAMPLE";
const ENV_LOG: &str = "BREWSTOCK_LOG";
const ENV_DEMO_BUYERS: &str = "BREWSTOCK_DEMO_BUYERS";

/// Ledger host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Catalog file (`.toml` / `.json`) to seed from.
    pub catalog_path: Option<PathBuf>,

    /// Seed the built-in sample menu when no catalog file is given.
    pub seed_sample: bool,

    /// Default tracing filter; `RUST_LOG` still wins when set.
    pub log_filter: String,

    /// Concurrent single-unit purchases the `seed` binary fires.
    pub demo_buyers: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            catalog_path: None,
            seed_sample: true,
            log_filter: "info".to_string(),
            demo_buyers: 10,
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `BREWSTOCK_CATALOG`: catalog file path
    /// - `BREWSTOCK_SEED_SAMPLE`: `true` / `false` (default `true`)
    /// - `BREWSTOCK_LOG`: tracing filter (default `info`)
    /// - `BREWSTOCK_DEMO_BUYERS`: demo purchase count (default `10`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LedgerConfig::from_env`] with an injectable lookup, so tests
    /// don't have to mutate the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = LedgerConfig::default();

        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_SEED_SAMPLE) {
            config.seed_sample = parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_SEED_SAMPLE.to_string()))?;
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup(ENV_DEMO_BUYERS) {
            config.demo_buyers = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_DEMO_BUYERS.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse fine but can't work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog_path {
            if !path.exists() {
                return Err(ConfigError::MissingCatalog(path.clone()));
            }
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Catalog file does not exist: {}", .0.display())]
    MissingCatalog(PathBuf),
}
