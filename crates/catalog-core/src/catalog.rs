//! # Catalog and Transitions
//!
//! A [`Catalog`] is an ordered product list together with the
//! [`Statistics`] derived from it. Both fields are private: the only way to
//! obtain a catalog is [`Catalog::new`] or [`Catalog::apply`], and both
//! recompute statistics from the products they return.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   (Catalog, Operation) ──apply──► Catalog                               │
//! │                                                                         │
//! │   Initialize(products)     replace list wholesale                       │
//! │   AdjustPrice { id, Δ }    price    = clamp(price + Δ, 1.00, MAX_PRICE) │
//! │   AdjustQuantity { id, Δ } quantity = clamp(quantity + Δ, 1, MAX_QTY)   │
//! │   Sort(Some(criteria))     stable ascending reorder                     │
//! │   Sort(None)               unrecognized criteria: order unchanged       │
//! │                                                                         │
//! │   Unknown ids are ignored. Statistics are recomputed on every path.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::money::Money;
use crate::sort::sort_products;
use crate::stats::Statistics;
use crate::types::{Product, ProductId, SortCriteria};
use crate::{MAX_PRICE, MAX_QUANTITY, MIN_PRICE, MIN_QUANTITY};

// =============================================================================
// Operation
// =============================================================================

/// A catalog transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace the product list.
    Initialize(Vec<Product>),
    /// Add `delta` to one product's price, kept within
    /// [`MIN_PRICE`]..=[`MAX_PRICE`].
    AdjustPrice { id: ProductId, delta: Money },
    /// Add `delta` to one product's quantity, kept within
    /// [`MIN_QUANTITY`]..=[`MAX_QUANTITY`].
    AdjustQuantity { id: ProductId, delta: i64 },
    /// Reorder by criteria. `None` carries an unrecognized criteria name.
    Sort(Option<SortCriteria>),
}

impl Operation {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Initialize(_) => "initialize",
            Operation::AdjustPrice { .. } => "adjust_price",
            Operation::AdjustQuantity { .. } => "adjust_quantity",
            Operation::Sort(_) => "sort",
        }
    }

    /// Id the operation targets, if any.
    pub fn target(&self) -> Option<ProductId> {
        match self {
            Operation::AdjustPrice { id, .. } | Operation::AdjustQuantity { id, .. } => Some(*id),
            _ => None,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered products plus the statistics computed from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
    statistics: Statistics,
}

impl Catalog {
    /// Builds a catalog in the given order. Empty input is valid.
    pub fn new(products: Vec<Product>) -> Self {
        let statistics = Statistics::compute(&products);
        Catalog {
            products,
            statistics,
        }
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Consumes the catalog, returning its products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Applies `op` and returns the resulting catalog.
    ///
    /// Total: every operation yields a consistent catalog, including
    /// adjustments of unknown ids and unrecognized sort criteria.
    pub fn apply(self, op: Operation) -> Catalog {
        let mut products = self.products;

        match op {
            Operation::Initialize(replacement) => products = replacement,
            Operation::AdjustPrice { id, delta } => {
                for product in products.iter_mut().filter(|p| p.id == id) {
                    product.price_cents = adjusted_price(product.price(), delta).cents();
                }
            }
            Operation::AdjustQuantity { id, delta } => {
                for product in products.iter_mut().filter(|p| p.id == id) {
                    product.quantity = adjusted_quantity(product.quantity, delta);
                }
            }
            Operation::Sort(Some(criteria)) => sort_products(&mut products, criteria),
            Operation::Sort(None) => {}
        }

        Catalog::new(products)
    }
}

/// `price + delta` clamped to `MIN_PRICE..=MAX_PRICE`. The sum saturates
/// before clamping, so any `i64` delta is accepted.
pub fn adjusted_price(price: Money, delta: Money) -> Money {
    Money::from_cents(price.cents().saturating_add(delta.cents())).clamp(MIN_PRICE, MAX_PRICE)
}

/// `quantity + delta` clamped to `MIN_QUANTITY..=MAX_QUANTITY`.
pub fn adjusted_quantity(quantity: i64, delta: i64) -> i64 {
    quantity.saturating_add(delta).clamp(MIN_QUANTITY, MAX_QUANTITY)
}

// =============================================================================
// Unit Tests
// =============================================================================
