//! # Catalog Statistics
//!
//! Aggregate values derived from a product list. A `Statistics` value is
//! only ever produced by [`Statistics::compute`]; there is no way to set a
//! field independently of the products it summarizes.
//!
//! ```text
//! totalProducts       = Σ quantity
//! totalBeforeDiscount = Σ price × quantity
//! totalDiscounts      = Σ price × quantity × discount%      (rounded once)
//! finalTotal          = totalBeforeDiscount − totalDiscounts
//! averagePrice        = totalBeforeDiscount / totalProducts (0 when empty)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{round_div, saturate_i64, Money};
use crate::types::{DiscountRate, Product};

/// Aggregate statistics for a catalog. Money fields are in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Statistics {
    #[ts(type = "number")]
    pub total_products: i64,
    #[ts(type = "number")]
    pub total_before_discount_cents: i64,
    #[ts(type = "number")]
    pub total_discounts_cents: i64,
    #[ts(type = "number")]
    pub final_total_cents: i64,
    #[ts(type = "number")]
    pub average_price_cents: i64,
}

impl Statistics {
    /// Computes statistics for `products` in a single pass.
    ///
    /// Sums run in `i128` and discounts are accumulated at cents × bps
    /// precision, rounded to cents once at the end, so per-line rounding
    /// never accumulates. Results outside the `i64` range saturate.
    pub fn compute(products: &[Product]) -> Self {
        let mut total_products: i128 = 0;
        let mut before: i128 = 0;
        let mut discount_scaled: i128 = 0;

        for product in products {
            let line = (product.price_cents as i128).saturating_mul(product.quantity as i128);
            total_products = total_products.saturating_add(product.quantity as i128);
            before = before.saturating_add(line);
            discount_scaled =
                discount_scaled.saturating_add(line.saturating_mul(product.discount_bps as i128));
        }

        let discounts = round_div(discount_scaled, DiscountRate::FULL_BPS as i128);
        let average = if total_products == 0 {
            0
        } else {
            round_div(before, total_products)
        };

        Statistics {
            total_products: saturate_i64(total_products),
            total_before_discount_cents: saturate_i64(before),
            total_discounts_cents: saturate_i64(discounts),
            final_total_cents: saturate_i64(before.saturating_sub(discounts)),
            average_price_cents: saturate_i64(average),
        }
    }

    #[inline]
    pub fn total_before_discount(&self) -> Money {
        Money::from_cents(self.total_before_discount_cents)
    }

    #[inline]
    pub fn total_discounts(&self) -> Money {
        Money::from_cents(self.total_discounts_cents)
    }

    #[inline]
    pub fn final_total(&self) -> Money {
        Money::from_cents(self.final_total_cents)
    }

    #[inline]
    pub fn average_price(&self) -> Money {
        Money::from_cents(self.average_price_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn product(id: u64, price_cents: i64, quantity: i64, discount_bps: u32) -> Product {
        Product::new(
            ProductId(id),
            format!("Product {}", id),
            Money::from_cents(price_cents),
            quantity,
            discount_bps,
        )
    }

    #[test]
    fn test_empty_catalog_is_all_zero() {
        assert_eq!(Statistics::compute(&[]), Statistics::default());
    }

    #[test]
    fn test_two_product_totals() {
        let stats = Statistics::compute(&[product(1, 1000, 2, 0), product(2, 500, 1, 5000)]);

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_before_discount_cents, 2500);
        assert_eq!(stats.total_discounts_cents, 250);
        assert_eq!(stats.final_total_cents, 2250);
        // 25.00 / 3 = 8.333… → 8.33
        assert_eq!(stats.average_price_cents, 833);
    }

    #[test]
    fn test_discounts_rounded_once() {
        // Per line: 0.0025 → 0.00 each. Summed first: 0.005 → 0.01.
        let stats = Statistics::compute(&[product(1, 1, 1, 2500), product(2, 1, 1, 2500)]);
        assert_eq!(stats.total_discounts_cents, 1);
        assert_eq!(stats.final_total_cents, 1);
    }

    #[test]
    fn test_full_discount() {
        let stats = Statistics::compute(&[product(1, 999, 3, DiscountRate::FULL_BPS)]);
        assert_eq!(stats.total_discounts_cents, 2997);
        assert_eq!(stats.final_total_cents, 0);
        assert_eq!(stats.average_price(), Money::from_cents(999));
    }

    #[test]
    fn test_bounded_catalog_is_exact() {
        use crate::{MAX_PRICE, MAX_QUANTITY};

        let products: Vec<Product> = (1..=1000)
            .map(|id| product(id, MAX_PRICE.cents(), MAX_QUANTITY, 5000))
            .collect();
        let stats = Statistics::compute(&products);

        let line = MAX_PRICE.cents() * MAX_QUANTITY;
        assert_eq!(stats.total_products, 1000 * MAX_QUANTITY);
        assert_eq!(stats.total_before_discount_cents, 1000 * line);
        assert_eq!(stats.total_discounts_cents, 500 * line);
        assert_eq!(stats.final_total_cents, 500 * line);
        assert_eq!(stats.average_price_cents, MAX_PRICE.cents());
    }

    #[test]
    fn test_extreme_values_saturate_instead_of_overflowing() {
        let stats = Statistics::compute(&[
            product(1, i64::MAX, i64::MAX, DiscountRate::FULL_BPS),
            product(2, i64::MAX, i64::MAX, 0),
        ]);

        assert_eq!(stats.total_products, i64::MAX);
        assert_eq!(stats.total_before_discount_cents, i64::MAX);
        assert_eq!(stats.total_discounts_cents, i64::MAX);
        assert!(stats.final_total_cents >= 0);
    }
}
