//! # Catalog Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (applied by the application)
//! 2. Environment variables (`CATALOG_*`)
//! 3. Defaults (this file)
//!
//! ## Presets
//! The two ways the catalog is mounted differ only in how much of the
//! dataset they load:
//! - [`CatalogConfig::provider`]: a view subtree, first 20 records
//! - [`CatalogConfig::store`]: the process-wide store, first 100 records

use std::path::PathBuf;

use catalog_core::validation::validate_initial_count;
use serde::{Deserialize, Serialize};

use crate::error::{StateError, StateResult};

/// Records loaded by a scoped provider.
pub const PROVIDER_INITIAL_COUNT: usize = 20;

/// Records loaded by the process-wide store.
pub const STORE_INITIAL_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// How many records to take from the front of the dataset.
    pub initial_count: usize,

    /// Dataset file; `None` uses the dataset built into the crate.
    pub dataset_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            initial_count: PROVIDER_INITIAL_COUNT,
            dataset_path: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl CatalogConfig {
    pub fn provider() -> Self {
        CatalogConfig::default()
    }

    pub fn store() -> Self {
        CatalogConfig {
            initial_count: STORE_INITIAL_COUNT,
            ..CatalogConfig::default()
        }
    }

    /// Applies environment overrides on top of `self`.
    ///
    /// ## Environment Variables
    /// - `CATALOG_INITIAL_COUNT`: records to load (1-1000)
    /// - `CATALOG_DATASET`: path to a product JSON file
    /// - `CATALOG_CURRENCY_SYMBOL`: e.g. "€"
    /// - `CATALOG_CURRENCY_DECIMALS`: 0-4
    pub fn with_env(self) -> StateResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup (the environment in
    /// production, a map in tests).
    pub fn with_overrides<F>(mut self, lookup: F) -> StateResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("CATALOG_INITIAL_COUNT") {
            self.initial_count = parse_initial_count(&raw)?;
        }

        if let Some(path) = lookup("CATALOG_DATASET") {
            if !path.trim().is_empty() {
                self.dataset_path = Some(PathBuf::from(path));
            }
        }

        if let Some(symbol) = lookup("CATALOG_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("CATALOG_CURRENCY_DECIMALS") {
            self.currency_decimals = match raw.trim().parse::<u8>() {
                Ok(decimals) if decimals <= 4 => decimals,
                _ => {
                    return Err(StateError::Config {
                        key: "CATALOG_CURRENCY_DECIMALS".to_string(),
                        reason: format!("expected an integer 0-4, got {:?}", raw),
                    })
                }
            };
        }

        Ok(self)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// Amounts are always stored with two minor digits; `currency_decimals`
    /// only controls how many are shown (rounded half-up).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_state::CatalogConfig;
    ///
    /// let config = CatalogConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();

        match self.currency_decimals {
            0 => format!("{}{}{}", sign, self.currency_symbol, (cents + 50) / 100),
            1 => {
                let tenths = (cents + 5) / 10;
                format!("{}{}{}.{}", sign, self.currency_symbol, tenths / 10, tenths % 10)
            }
            decimals => format!(
                "{}{}{}.{:02}{}",
                sign,
                self.currency_symbol,
                cents / 100,
                cents % 100,
                "0".repeat(decimals as usize - 2)
            ),
        }
    }
}

/// Parses and range-checks an initial count.
pub fn parse_initial_count(raw: &str) -> StateResult<usize> {
    let count = raw.trim().parse::<usize>().map_err(|e| StateError::Config {
        key: "CATALOG_INITIAL_COUNT".to_string(),
        reason: e.to_string(),
    })?;
    Ok(validate_initial_count(count)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_presets() {
        assert_eq!(CatalogConfig::provider().initial_count, 20);
        assert_eq!(CatalogConfig::store().initial_count, 100);
        assert!(CatalogConfig::store().dataset_path.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let config = CatalogConfig::store()
            .with_overrides(lookup(&[
                ("CATALOG_INITIAL_COUNT", "35"),
                ("CATALOG_DATASET", "/data/products.json"),
                ("CATALOG_CURRENCY_SYMBOL", "€"),
                ("CATALOG_CURRENCY_DECIMALS", "0"),
            ]))
            .unwrap();

        assert_eq!(config.initial_count, 35);
        assert_eq!(config.dataset_path, Some(PathBuf::from("/data/products.json")));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_decimals, 0);
    }

    #[test]
    fn test_missing_overrides_keep_defaults() {
        let config = CatalogConfig::provider().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::provider());
    }

    #[test]
    fn test_bad_count_is_config_error() {
        let err = CatalogConfig::default()
            .with_overrides(lookup(&[("CATALOG_INITIAL_COUNT", "lots")]))
            .unwrap_err();
        assert!(matches!(err, StateError::Config { .. }));

        let err = CatalogConfig::default()
            .with_overrides(lookup(&[("CATALOG_INITIAL_COUNT", "0")]))
            .unwrap_err();
        assert!(matches!(err, StateError::Invalid(_)));
    }

    #[test]
    fn test_bad_decimals_is_config_error() {
        let err = CatalogConfig::default()
            .with_overrides(lookup(&[("CATALOG_CURRENCY_DECIMALS", "9")]))
            .unwrap_err();
        assert!(matches!(err, StateError::Config { .. }));
    }

    #[test]
    fn test_format_currency_positive() {
        let config = CatalogConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = CatalogConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_other_precisions() {
        let mut config = CatalogConfig::default();
        config.currency_decimals = 0;
        assert_eq!(config.format_currency(1250), "$13");
        config.currency_decimals = 1;
        assert_eq!(config.format_currency(1234), "$12.3");
        assert_eq!(config.format_currency(1299), "$13.0");
        config.currency_decimals = 3;
        assert_eq!(config.format_currency(1234), "$12.340");
    }
}
