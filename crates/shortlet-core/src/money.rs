//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a booking flow:                                                     │
//! │    ₦7,000.01/week × 3 nights = ₦3,000.0042857...  → What do we charge? │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kobo                                             │
//! │    All amounts are i64 kobo (1/100 naira). Proration rounds once,      │
//! │    half-up, at the kobo boundary, and the rounding rule is the SAME    │
//! │    everywhere in the crate.                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shortlet_core::money::Money;
//!
//! // Create from kobo (preferred)
//! let price = Money::from_kobo(1_000_000); // ₦10,000.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                  // ₦20,000.00
//! let total = price + Money::from_kobo(500); // ₦10,005.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in kobo (the smallest naira unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Property.price_kobo ──► prorate_per_day(...) ──► base price           │
/// │                                                                         │
/// │  base price ──► Tax Calculation ──► total ──► Payment.amount           │
/// │                                                                         │
/// │  EVERY monetary value in the booking flow goes through this type       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kobo (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::money::Money;
    ///
    /// let price = Money::from_kobo(1099); // Represents ₦10.99
    /// assert_eq!(price.kobo(), 1099);
    /// ```
    ///
    /// ## Why Kobo?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The API payloads, calculations, and bindings all use kobo.
    /// Only the UI converts to naira for display.
    #[inline]
    pub const fn from_kobo(kobo: i64) -> Self {
        Money(kobo)
    }

    /// Creates a Money value from major and minor units (naira and kobo).
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::money::Money;
    ///
    /// let price = Money::from_naira_kobo(10_000, 50); // ₦10,000.50
    /// assert_eq!(price.kobo(), 1_000_050);
    ///
    /// let refund = Money::from_naira_kobo(-5, 50); // -₦5.50
    /// assert_eq!(refund.kobo(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_naira_kobo(-5, 50)` = -₦5.50, not -₦4.50
    #[inline]
    pub const fn from_naira_kobo(naira: i64, kobo: i64) -> Self {
        // Handle sign: if naira is negative, kobo should subtract
        if naira < 0 {
            Money(naira * 100 - kobo)
        } else {
            Money(naira * 100 + kobo)
        }
    }

    /// Returns the value in kobo (smallest currency unit).
    #[inline]
    pub const fn kobo(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (naira) portion.
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::money::Money;
    ///
    /// let price = Money::from_kobo(1_000_050);
    /// assert_eq!(price.naira(), 10_000);
    /// ```
    #[inline]
    pub const fn naira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kobo) portion (always 0-99).
    #[inline]
    pub const fn kobo_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF UP, AT THE KOBO BOUNDARY, EXACTLY ONCE                  │
    /// │                                                                     │
    /// │  Integer formula: (amount_kobo * bps + 5000) / 10000                │
    /// │  The +5000 provides the rounding (5000/10000 = 0.5)                 │
    /// │                                                                     │
    /// │  The same half-up rule is used for duration proration, so base,    │
    /// │  tax, and total are all consistent with each other.                │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::money::Money;
    /// use shortlet_core::types::TaxRate;
    ///
    /// let base = Money::from_kobo(3_000_000); // ₦30,000.00
    /// let rate = TaxRate::from_bps(2000);     // 20%
    ///
    /// let tax = base.calculate_tax(rate);
    /// assert_eq!(tax.kobo(), 600_000); // ₦6,000.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Base Price: ₦30,000
    ///      │
    ///      ▼
    /// calculate_tax(20%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: ₦6,000
    ///      │
    ///      ▼
    /// Grand Total: ₦36,000
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 2000 = 20%
        // Formula: amount_kobo * bps / 10000
        // With rounding: (amount_kobo * bps + 5000) / 10000
        let tax_kobo = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_kobo(tax_kobo as i64)
    }

    /// Prorates a per-unit price over a number of days.
    ///
    /// `self` is the price for one billing unit of `days_per_unit` days
    /// (1 for daily, 7 for weekly, 30 for monthly). The result is the
    /// price for `days` days, with fractional units priced exactly and
    /// rounded half-up at the kobo boundary.
    ///
    /// ## Arguments
    /// * `days` - nights being booked (must be >= 0)
    /// * `days_per_unit` - length of the billing unit in days (must be > 0)
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::money::Money;
    ///
    /// // ₦7,000.00 per week, 14 nights = 2 weeks
    /// let weekly = Money::from_kobo(700_000);
    /// assert_eq!(weekly.prorate(14, 7).kobo(), 1_400_000);
    ///
    /// // 3 nights of a ₦7,000.00 week = ₦3,000.00
    /// assert_eq!(weekly.prorate(3, 7).kobo(), 300_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Property: ₦7,000/week
    /// Nights: 3
    ///      │
    ///      ▼
    /// prorate(3, 7) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Base Price: ₦3,000.00
    /// ```
    pub fn prorate(&self, days: i64, days_per_unit: i64) -> Money {
        debug_assert!(days >= 0);
        debug_assert!(days_per_unit > 0);

        // Exact rational arithmetic in i128, single half-up rounding:
        // round(a / d) = (2a + d) / 2d for non-negative a
        let scaled = self.0 as i128 * days as i128;
        let divisor = days_per_unit as i128;
        let kobo = (2 * scaled + divisor) / (2 * divisor);
        Money::from_kobo(kobo as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::money::Money;
    ///
    /// let nightly = Money::from_kobo(1_000_000); // ₦10,000.00
    /// let base = nightly.multiply_quantity(3);
    /// assert_eq!(base.kobo(), 3_000_000); // ₦30,000.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. The frontend formats prices for actual UI display
/// (en-NG locale, whole naira) and owns localization entirely.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₦{}.{:02}", sign, self.naira().abs(), self.kobo_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kobo() {
        let money = Money::from_kobo(1_000_050);
        assert_eq!(money.kobo(), 1_000_050);
        assert_eq!(money.naira(), 10_000);
        assert_eq!(money.kobo_part(), 50);
    }

    #[test]
    fn test_from_naira_kobo() {
        let money = Money::from_naira_kobo(10_000, 50);
        assert_eq!(money.kobo(), 1_000_050);

        let negative = Money::from_naira_kobo(-5, 50);
        assert_eq!(negative.kobo(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_kobo(1099)), "₦10.99");
        assert_eq!(format!("{}", Money::from_kobo(500)), "₦5.00");
        assert_eq!(format!("{}", Money::from_kobo(-550)), "-₦5.50");
        assert_eq!(format!("{}", Money::from_kobo(0)), "₦0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kobo(1000);
        let b = Money::from_kobo(500);

        assert_eq!((a + b).kobo(), 1500);
        assert_eq!((a - b).kobo(), 500);
        let result: Money = a * 3;
        assert_eq!(result.kobo(), 3000);
    }

    #[test]
    fn test_tax_calculation_flat_rate() {
        // ₦30,000 at 20% = ₦6,000
        let amount = Money::from_kobo(3_000_000);
        let rate = TaxRate::from_bps(2000);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.kobo(), 600_000);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // ₦0.33 at 20% = 6.6 kobo → rounds up to 7 kobo
        let amount = Money::from_kobo(33);
        let rate = TaxRate::from_bps(2000);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.kobo(), 7);

        // ₦0.12 at 20% = 2.4 kobo → rounds down to 2 kobo
        let amount = Money::from_kobo(12);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.kobo(), 2);
    }

    #[test]
    fn test_prorate_whole_units() {
        let weekly = Money::from_kobo(700_000); // ₦7,000/week
        assert_eq!(weekly.prorate(7, 7).kobo(), 700_000);
        assert_eq!(weekly.prorate(14, 7).kobo(), 1_400_000);

        let monthly = Money::from_kobo(5_000_000); // ₦50,000/month
        assert_eq!(monthly.prorate(30, 30).kobo(), 5_000_000);
        assert_eq!(monthly.prorate(60, 30).kobo(), 10_000_000);
    }

    #[test]
    fn test_prorate_fractional_units() {
        // 3/7 of ₦7,000.00 = ₦3,000.00 exactly
        let weekly = Money::from_kobo(700_000);
        assert_eq!(weekly.prorate(3, 7).kobo(), 300_000);

        // 1/7 of ₦100.01 = 1428.714... kobo → 1429 (half-up)
        let odd_weekly = Money::from_kobo(10_001);
        assert_eq!(odd_weekly.prorate(1, 7).kobo(), 1429);

        // 1/30 of ₦0.45 = 1.5 kobo → 2 (exact half rounds up)
        let tiny_monthly = Money::from_kobo(45);
        assert_eq!(tiny_monthly.prorate(1, 30).kobo(), 2);
    }

    #[test]
    fn test_prorate_zero() {
        let weekly = Money::from_kobo(700_000);
        assert_eq!(weekly.prorate(0, 7).kobo(), 0);
        assert_eq!(Money::zero().prorate(5, 7).kobo(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_kobo(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_kobo(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let nightly = Money::from_kobo(1_000_000);
        let base = nightly.multiply_quantity(3);
        assert_eq!(base.kobo(), 3_000_000);
    }
}
