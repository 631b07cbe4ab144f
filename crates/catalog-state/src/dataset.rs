//! # Product Dataset
//!
//! Loads the static source dataset and takes its bounded prefix.
//!
//! ## Record Format
//! ```json
//! [
//!   { "id": 1, "name": "Apple", "price": 1.99, "quantity": 9, "discount": 12.62 }
//! ]
//! ```
//! - `price` is in currency units, `discount` a percentage (0-100)
//! - `title` is accepted in place of `name`, `discountPercentage` in place
//!   of `discount`
//! - `quantity` defaults to 1, `discount` to 0
//!
//! Only the first `count` records are converted and validated; the rest of
//! the file is parsed for shape but otherwise ignored.

use std::fs;
use std::path::Path;

use catalog_core::validation::{validate_initial_count, validate_products, ValidationResult};
use catalog_core::{CoreError, DiscountRate, Money, Product, ProductId, ValidationError};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::{StateError, StateResult};

/// Dataset compiled into the crate.
pub const BUILTIN_DATASET: &str = include_str!("../data/products.json");

/// One product as it appears in a dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    #[serde(alias = "title")]
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default, alias = "discountPercentage")]
    pub discount: f64,
}

fn default_quantity() -> i64 {
    1
}

impl ProductRecord {
    /// Converts decimal fields to their integer representations.
    pub fn into_product(self) -> ValidationResult<Product> {
        if !(0.0..=100.0).contains(&self.discount) {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 100,
            });
        }

        Ok(Product::new(
            ProductId(self.id),
            self.name,
            Money::from_decimal(self.price),
            self.quantity,
            DiscountRate::from_percentage(self.discount).bps(),
        ))
    }
}

/// Parses a dataset and returns its first `count` products.
pub fn parse_dataset(json: &str, count: usize) -> StateResult<Vec<Product>> {
    let count = validate_initial_count(count)?;
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    let available = records.len();

    let products = convert_records(records.into_iter().take(count))?;
    debug!(available, taken = products.len(), "Dataset parsed");
    Ok(products)
}

/// Converts and validates records, reporting failures by position.
pub fn convert_records<I>(records: I) -> StateResult<Vec<Product>>
where
    I: IntoIterator<Item = ProductRecord>,
{
    let products = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_product()
                .map_err(|source| CoreError::InvalidProduct { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_products(&products)?;
    Ok(products)
}

/// Reads a dataset file and returns its first `count` products.
pub fn load_dataset(path: &Path, count: usize) -> StateResult<Vec<Product>> {
    let json = fs::read_to_string(path).map_err(|source| StateError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&json, count)
}

/// First `count` products of the built-in dataset.
pub fn builtin_products(count: usize) -> StateResult<Vec<Product>> {
    parse_dataset(BUILTIN_DATASET, count)
}

/// Initial products for `config`: its dataset file if set, otherwise the
/// built-in dataset.
pub fn load_initial_products(config: &CatalogConfig) -> StateResult<Vec<Product>> {
    let products = match &config.dataset_path {
        Some(path) => load_dataset(path, config.initial_count)?,
        None => builtin_products(config.initial_count)?,
    };
    let source = config
        .dataset_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());
    info!(count = products.len(), %source, "Initial products loaded");
    Ok(products)
}
