//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With doubles:                                                          │
//! │    1000.0 * (1 - 0.1) = 900.0000000000001  → "discounted" by accident │
//! │                                                                         │
//! │  The `discounted` flag compares resolved vs base price EXACTLY, so a   │
//! │  stray ulp would flip it. Integer minor units make equality exact.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (cents)                              │
//! │    100000 cents at 10% off = 90000 cents, exactly                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::money::Money;
//! use pricing_core::types::Percentage;
//!
//! let price = Money::from_major_minor(1000, 0); // 1000.00
//!
//! let sale = price.apply_percentage_discount(Percentage::from_bps(2000)); // 20% off
//! assert_eq!(sale, Money::from_major_minor(800, 0));
//!
//! let gone = price.apply_fixed_discount(Money::from_major_minor(1500, 0));
//! assert!(gone.is_zero()); // floored, never negative
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::Percentage;

/// Basis points in 100%.
const FULL_BPS: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Item.base_price_cents ──► apply_discount() ──► PriceResolution.price
///                                 ▲
/// Campaign.discount_value ────────┘  (FIXED_AMOUNT campaigns)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative values to zero.
    #[inline]
    pub const fn floor_at_zero(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }

    /// Applies a percentage discount and returns the remaining price.
    ///
    /// The discount amount is rounded half-up to the cent with integer math,
    /// `(amount * bps + 5000) / 10000`, then subtracted. Percentages above
    /// 100% floor the result at zero.
    ///
    /// ```rust
    /// use pricing_core::money::Money;
    /// use pricing_core::types::Percentage;
    ///
    /// let base = Money::from_cents(10000);
    /// assert_eq!(base.apply_percentage_discount(Percentage::from_bps(1000)).cents(), 9000);
    /// assert_eq!(base.apply_percentage_discount(Percentage::from_bps(15000)).cents(), 0);
    /// ```
    pub fn apply_percentage_discount(&self, discount: Percentage) -> Money {
        // i128 keeps amount * bps from overflowing on large prices
        let discount_amount = (self.0 as i128 * discount.bps() as i128 + FULL_BPS / 2) / FULL_BPS;
        let remaining = self.0 as i128 - discount_amount;
        if remaining <= 0 {
            return Money::zero();
        }
        Money::from_cents(remaining as i64)
    }

    /// Subtracts a fixed amount, flooring the result at zero.
    ///
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// let base = Money::from_cents(1000);
    /// assert_eq!(base.apply_fixed_discount(Money::from_cents(250)).cents(), 750);
    /// assert_eq!(base.apply_fixed_discount(Money::from_cents(1500)).cents(), 0);
    /// ```
    pub fn apply_fixed_discount(&self, amount: Money) -> Money {
        Money(self.0.saturating_sub(amount.0)).floor_at_zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` rendering for logs.
///
/// Currency symbols and grouping belong to the presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_percentage_discount() {
        let base = Money::from_major_minor(1000, 0);
        let result = base.apply_percentage_discount(Percentage::from_bps(2000));
        assert_eq!(result, Money::from_major_minor(800, 0));
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 10% of 0.05 = 0.005 → discount rounds to 0.01
        let base = Money::from_cents(5);
        let result = base.apply_percentage_discount(Percentage::from_bps(1000));
        assert_eq!(result.cents(), 4);
    }

    #[test]
    fn test_percentage_discount_edges() {
        let base = Money::from_cents(1234);
        assert_eq!(base.apply_percentage_discount(Percentage::zero()), base);
        assert!(base
            .apply_percentage_discount(Percentage::from_bps(10_000))
            .is_zero());
        assert!(base
            .apply_percentage_discount(Percentage::from_bps(25_000))
            .is_zero());
    }

    #[test]
    fn test_fixed_discount_floors_at_zero() {
        let base = Money::from_cents(100_000);
        assert_eq!(
            base.apply_fixed_discount(Money::from_cents(150_000)),
            Money::zero()
        );
        assert_eq!(
            base.apply_fixed_discount(Money::from_cents(100_000)),
            Money::zero()
        );
        assert_eq!(
            base.apply_fixed_discount(Money::from_cents(1)).cents(),
            99_999
        );
    }

    #[test]
    fn test_fixed_discount_saturates() {
        let base = Money::from_cents(1);
        assert!(base.apply_fixed_discount(Money::from_cents(i64::MAX)).is_zero());
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(Money::from_cents(-1).floor_at_zero(), Money::zero());
        assert_eq!(Money::from_cents(7).floor_at_zero().cents(), 7);
    }
}
