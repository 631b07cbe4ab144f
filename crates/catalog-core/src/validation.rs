//! # Validation Module
//!
//! Rules applied to product data entering the system from outside (dataset
//! files, initialize messages from a presentation layer).
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape and types of each record                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name present, bounded length                                      │
//! │  ├── price 0..=MAX_PRICE, quantity 1..=MAX_QUANTITY                    │
//! │  ├── discount within 0-100%                                            │
//! │  └── ids unique across the dataset                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog transitions (never fail; operate on validated data)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_initial_count, validate_product_name};
//!
//! assert!(validate_product_name("Green tea").is_ok());
//! assert!(validate_initial_count(20).is_ok());
//! assert!(validate_initial_count(0).is_err());
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{DiscountRate, Product};
use crate::{MAX_INITIAL_COUNT, MAX_PRICE, MAX_QUANTITY, MIN_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name, in characters.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed in source data; the 1.00
/// floor only applies to adjustments.
pub fn validate_price_cents(price_cents: i64) -> ValidationResult<()> {
    if price_cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    if price_cents > MAX_PRICE.cents() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE.units(),
        });
    }
    Ok(())
}

/// Validates a stock quantity.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a discount in basis points (0 to 10000).
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > DiscountRate::FULL_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

/// Validates the number of dataset records to load.
pub fn validate_initial_count(count: usize) -> ValidationResult<usize> {
    if count == 0 || count > MAX_INITIAL_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "initialCount".to_string(),
            min: 1,
            max: MAX_INITIAL_COUNT as i64,
        });
    }
    Ok(count)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a single product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_quantity(product.quantity)?;
    validate_discount_bps(product.discount_bps)?;
    Ok(())
}

/// Validates a whole product list: each record, then id uniqueness.
///
/// Stops at the first failure and reports the record's position.
pub fn validate_products(products: &[Product]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for (index, product) in products.iter().enumerate() {
        validate_product(product).map_err(|source| CoreError::InvalidProduct { index, source })?;

        if !seen.insert(product.id) {
            return Err(CoreError::DuplicateProduct(product.id.0));
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
