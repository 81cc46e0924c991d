//! # Pricing Module
//!
//! Turns a property's unit price, billing tier, and a stay length into the
//! price breakdown shown on the booking confirmation screen.
//!
//! ## The Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Price Breakdown                              │
//! │                                                                         │
//! │  unit price × (nights / days-per-unit)  ──► base price  (round ½-up)   │
//! │  base price × 20%                       ──► tax         (round ½-up)   │
//! │  base price + tax                       ──► total       (exact)        │
//! │                                                                         │
//! │  per_day:   multiplier = nights                                        │
//! │  per_week:  multiplier = nights / 7   (fractional weeks priced as-is)  │
//! │  per_month: multiplier = nights / 30  (fixed 30-day months)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and deterministic: no I/O, no clock, no shared state. Safe to call
//! from a render path or from a server-side handler re-validating a
//! client-submitted total.

use crate::error::BookingResult;
use crate::money::Money;
use crate::types::{DurationKind, PriceBreakdown, Property};
use crate::validation::{validate_nights, validate_price_kobo};
use crate::BOOKING_TAX_RATE;

/// The exact duration multiplier as a rational number: (nights, days-per-unit).
///
/// The UI renders this as "× 2.00 weeks" next to the base price; keeping it
/// as a numerator/denominator pair lets the frontend format it without the
/// crate ever producing a float.
///
/// ## Example
/// ```rust
/// use shortlet_core::pricing::duration_multiplier;
/// use shortlet_core::types::DurationKind;
///
/// assert_eq!(duration_multiplier(DurationKind::PerWeek, 14), (14, 7));
/// assert_eq!(duration_multiplier(DurationKind::PerDay, 3), (3, 1));
/// ```
#[inline]
pub const fn duration_multiplier(duration: DurationKind, nights: i64) -> (i64, i64) {
    (nights, duration.days_per_unit())
}

/// Computes the full price breakdown for a stay.
///
/// ## Arguments
/// * `price` - the property's price for one billing unit (non-negative)
/// * `duration` - the billing tier the price applies to
/// * `nights` - length of the stay (1 to [`crate::MAX_STAY_NIGHTS`])
///
/// ## Errors
/// Returns `BookingError::Validation` when `nights` is out of range or
/// `price` is negative. Unknown billing tiers cannot reach this function:
/// [`DurationKind`] is a closed enum and unknown API strings are rejected
/// at the parsing boundary.
///
/// ## Example
/// ```rust
/// use shortlet_core::money::Money;
/// use shortlet_core::pricing::compute_price_breakdown;
/// use shortlet_core::types::DurationKind;
///
/// // ₦7,000/week for 14 nights = 2 weeks
/// let weekly = Money::from_kobo(700_000);
/// let breakdown = compute_price_breakdown(weekly, DurationKind::PerWeek, 14).unwrap();
/// assert_eq!(breakdown.base_price().kobo(), 1_400_000); // ₦14,000
/// assert_eq!(breakdown.tax().kobo(), 280_000);          // ₦2,800
/// assert_eq!(breakdown.total().kobo(), 1_680_000);      // ₦16,800
/// ```
///
/// ## User Workflow
/// ```text
/// Guest picks dates ──► nights = 14
///        │
///        ▼
/// compute_price_breakdown(₦7,000/week, PerWeek, 14) ← THIS FUNCTION
///        │
///        ▼
/// Summary card: Base ₦14,000 · Tax ₦2,800 · Total ₦16,800
/// ```
pub fn compute_price_breakdown(
    price: Money,
    duration: DurationKind,
    nights: i64,
) -> BookingResult<PriceBreakdown> {
    validate_nights(nights)?;
    validate_price_kobo(price.kobo())?;

    let base = price.prorate(nights, duration.days_per_unit());
    let tax = base.calculate_tax(BOOKING_TAX_RATE);
    let total = base + tax;

    Ok(PriceBreakdown {
        base_price_kobo: base.kobo(),
        tax_rate_bps: BOOKING_TAX_RATE.bps(),
        tax_kobo: tax.kobo(),
        total_kobo: total.kobo(),
    })
}

/// Convenience wrapper: prices a stay directly from a fetched [`Property`].
pub fn price_property_stay(property: &Property, nights: i64) -> BookingResult<PriceBreakdown> {
    compute_price_breakdown(property.price(), property.duration, nights)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookingError;
    use crate::MAX_STAY_NIGHTS;

    #[test]
    fn test_per_day_three_nights() {
        // ₦10,000/day × 3 nights → base ₦30,000, tax ₦6,000, total ₦36,000
        let nightly = Money::from_kobo(1_000_000);
        let b = compute_price_breakdown(nightly, DurationKind::PerDay, 3).unwrap();
        assert_eq!(b.base_price_kobo, 3_000_000);
        assert_eq!(b.tax_kobo, 600_000);
        assert_eq!(b.total_kobo, 3_600_000);
        assert_eq!(b.tax_rate_bps, 2000);
    }

    #[test]
    fn test_per_week_two_weeks() {
        // ₦7,000/week × 14 nights → multiplier 2 → base ₦14,000, tax ₦2,800
        let weekly = Money::from_kobo(700_000);
        let b = compute_price_breakdown(weekly, DurationKind::PerWeek, 14).unwrap();
        assert_eq!(b.base_price_kobo, 1_400_000);
        assert_eq!(b.tax_kobo, 280_000);
        assert_eq!(b.total_kobo, 1_680_000);
    }

    #[test]
    fn test_per_month_one_month() {
        // ₦50,000/month × 30 nights → multiplier 1 → base ₦50,000, tax ₦10,000
        let monthly = Money::from_kobo(5_000_000);
        let b = compute_price_breakdown(monthly, DurationKind::PerMonth, 30).unwrap();
        assert_eq!(b.base_price_kobo, 5_000_000);
        assert_eq!(b.tax_kobo, 1_000_000);
        assert_eq!(b.total_kobo, 6_000_000);
    }

    #[test]
    fn test_fractional_week_not_floored() {
        // 3 nights of a ₦7,000 week = 3/7 of the price, not 0 weeks or 1 week
        let weekly = Money::from_kobo(700_000);
        let b = compute_price_breakdown(weekly, DurationKind::PerWeek, 3).unwrap();
        assert_eq!(b.base_price_kobo, 300_000);
    }

    #[test]
    fn test_fractional_month_not_floored() {
        // 45 nights of a ₦50,000 month = 1.5 months
        let monthly = Money::from_kobo(5_000_000);
        let b = compute_price_breakdown(monthly, DurationKind::PerMonth, 45).unwrap();
        assert_eq!(b.base_price_kobo, 7_500_000);
    }

    #[test]
    fn test_total_is_exact_sum() {
        // Awkward amounts that force rounding in both base and tax
        let weekly = Money::from_kobo(10_001); // ₦100.01/week
        for nights in 1..=30 {
            let b = compute_price_breakdown(weekly, DurationKind::PerWeek, nights).unwrap();
            assert_eq!(b.total_kobo, b.base_price_kobo + b.tax_kobo);
            assert!(b.base_price_kobo >= 0);
            assert!(b.tax_kobo >= 0);
        }
    }

    #[test]
    fn test_zero_price_is_free() {
        let b = compute_price_breakdown(Money::zero(), DurationKind::PerDay, 5).unwrap();
        assert_eq!(b.base_price_kobo, 0);
        assert_eq!(b.tax_kobo, 0);
        assert_eq!(b.total_kobo, 0);
    }

    #[test]
    fn test_deterministic() {
        let nightly = Money::from_kobo(1_234_567);
        let a = compute_price_breakdown(nightly, DurationKind::PerMonth, 17).unwrap();
        let b = compute_price_breakdown(nightly, DurationKind::PerMonth, 17).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_nights() {
        let nightly = Money::from_kobo(1_000_000);
        assert!(matches!(
            compute_price_breakdown(nightly, DurationKind::PerDay, 0),
            Err(BookingError::Validation(_))
        ));
        assert!(matches!(
            compute_price_breakdown(nightly, DurationKind::PerDay, -3),
            Err(BookingError::Validation(_))
        ));
        assert!(matches!(
            compute_price_breakdown(nightly, DurationKind::PerDay, MAX_STAY_NIGHTS + 1),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let bad = Money::from_kobo(-100);
        assert!(matches!(
            compute_price_breakdown(bad, DurationKind::PerDay, 2),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn test_duration_multiplier() {
        assert_eq!(duration_multiplier(DurationKind::PerDay, 3), (3, 1));
        assert_eq!(duration_multiplier(DurationKind::PerWeek, 14), (14, 7));
        assert_eq!(duration_multiplier(DurationKind::PerMonth, 45), (45, 30));
    }

    #[test]
    fn test_price_property_stay() {
        let property = Property {
            id: "prop-1842".to_string(),
            price_kobo: 700_000,
            duration: DurationKind::PerWeek,
            duration_display: "per week".to_string(),
        };
        let b = price_property_stay(&property, 14).unwrap();
        assert_eq!(b.total_kobo, 1_680_000);
    }
}
