//! # Domain Types
//!
//! Core domain types used throughout the Catalog Viewer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  DiscountRate   │   │  SortCriteria   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  bps (u32)      │   │  Name           │       │
//! │  │  name           │   │  1250 = 12.5%   │   │  Price          │       │
//! │  │  price_cents    │   │                 │   │  Quantity       │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  │  discount_bps   │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product key, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount percentage represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 10000 bps = 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100% expressed in basis points.
    pub const FULL_BPS: u32 = 10_000;

    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (e.g. `12.5`).
    ///
    /// Negative inputs saturate to zero.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round().max(0.0) as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record in the catalog.
///
/// Price is stored in cents, discount in basis points. Both serialize as
/// integers so the browser never re-derives money from floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable key.
    pub id: ProductId,

    /// Display name; also the `name` sort key.
    pub name: String,

    /// Unit price in cents.
    #[ts(type = "number")]
    pub price_cents: i64,

    /// Units in stock (at least 1 once adjusted).
    #[ts(type = "number")]
    pub quantity: i64,

    /// Per-unit discount in basis points (0..=10000).
    pub discount_bps: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        discount_bps: u32,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents: price.cents(),
            quantity,
            discount_bps,
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_bps)
    }

    /// Price × quantity, before any discount.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// Discount on the whole line, rounded to cents.
    pub fn line_discount(&self) -> Money {
        self.line_total().discount_amount(self.discount())
    }
}

// =============================================================================
// Sort Criteria
// =============================================================================

/// Field a catalog can be ordered by. All orders are ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortCriteria {
    /// Locale-style comparison of product names.
    Name,
    /// Unit price.
    Price,
    /// Units in stock.
    Quantity,
}

impl SortCriteria {
    /// Looks up a criteria by its wire name.
    ///
    /// Returns `None` for anything unrecognized; callers treat that as
    /// "leave the order unchanged".
    ///
    /// ```rust
    /// use catalog_core::SortCriteria;
    ///
    /// assert_eq!(SortCriteria::from_name("price"), Some(SortCriteria::Price));
    /// assert_eq!(SortCriteria::from_name("rating"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(SortCriteria::Name),
            "price" => Some(SortCriteria::Price),
            "quantity" => Some(SortCriteria::Quantity),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortCriteria::Name => "name",
            SortCriteria::Price => "price",
            SortCriteria::Quantity => "quantity",
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
