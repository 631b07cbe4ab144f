//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing prices as floats drifts:                                       │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Catalog totals are sums over every product, so the drift compounds.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price and total is an i64 count of minor units.                │
//! │    Rounding happens once, at a known place (discounts, averages).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.cents(), 3297);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed, so a negative price delta is just a negative `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * 100)
    }

    /// Converts a decimal amount in currency units to cents, rounding
    /// half away from zero.
    ///
    /// Only for ingesting external data (dataset files, action messages)
    /// that carry decimal prices. Nothing inside the crate does float math.
    /// Amounts beyond the `i64` cent range saturate; NaN becomes zero.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(9.99).cents(), 999);
    /// assert_eq!(Money::from_decimal(-2.5).cents(), -250);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps the value so it is never below `floor`.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let floor = Money::from_units(1);
    /// assert_eq!(Money::from_units(-90).at_least(floor), floor);
    /// assert_eq!(Money::from_units(5).at_least(floor).cents(), 500);
    /// ```
    #[inline]
    pub fn at_least(self, floor: Money) -> Money {
        self.max(floor)
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Discount owed on this amount at `rate`, rounded half-up to cents.
    ///
    /// ```rust
    /// use catalog_core::money::Money;
    /// use catalog_core::types::DiscountRate;
    ///
    /// let line = Money::from_cents(1000);
    /// let discount = line.discount_amount(DiscountRate::from_bps(1250)); // 12.5%
    /// assert_eq!(discount.cents(), 125);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        // i128: cents × bps can overflow i64 on large catalogs
        let scaled = self.0 as i128 * rate.bps() as i128;
        Money::from_cents(saturate_i64(round_div(scaled, 10_000)))
    }

    /// Divides the amount into `parts` equal shares, rounded half-up.
    /// Returns zero when `parts` is zero.
    pub fn divide_rounded(&self, parts: i64) -> Money {
        if parts == 0 {
            return Money::zero();
        }
        Money::from_cents(saturate_i64(round_div(self.0 as i128, parts as i128)))
    }
}

/// Integer division rounding half away from zero. Total for any non-zero
/// denominator, including `i128::MIN` numerators.
pub(crate) fn round_div(numerator: i128, denominator: i128) -> i128 {
    let divisor = denominator.unsigned_abs();
    let magnitude = numerator.unsigned_abs().saturating_add(divisor / 2) / divisor;
    let magnitude = i128::try_from(magnitude).unwrap_or(i128::MAX);
    if (numerator < 0) == (denominator < 0) {
        magnitude
    } else {
        -magnitude
    }
}

/// Narrows an `i128` amount to `i64`, clamping at the bounds.
pub(crate) fn saturate_i64(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as a plain decimal ("12.34"); currency symbols are a
/// presentation concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
