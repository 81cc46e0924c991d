//! # Stay Dates Module
//!
//! Check-in/check-out derivation for the booking form.
//!
//! ## Who Owns What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Date State Ownership                                │
//! │                                                                         │
//! │  Booking UI (external)                 shortlet-core (this module)     │
//! │  ─────────────────────                 ───────────────────────────     │
//! │  • holds selected check-in/out         • min legal check-out           │
//! │  • re-calls on every change            • nights between two dates      │
//! │  • clears check-out on InvalidRange    • default check-in (today)      │
//! │  • renders the date pickers            • pure, no state                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plain calendar arithmetic only: no business days, no holidays, no
//! timezone handling beyond "a date is a date".

use chrono::{Days, NaiveDate, Utc};

use crate::error::{BookingError, BookingResult};
use crate::types::StayDates;

/// The earliest legal check-out for a given check-in: the next calendar day.
///
/// chrono handles month and year boundaries (Jan 31 → Feb 1, Dec 31 → Jan 1,
/// Feb 28 → Feb 29 in leap years).
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use shortlet_core::stay::minimum_check_out;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let min_out = minimum_check_out(check_in);
/// assert_eq!(min_out, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// ```
pub fn minimum_check_out(check_in: NaiveDate) -> NaiveDate {
    // checked_add_days only fails past NaiveDate::MAX, far outside any
    // bookable date; saturate rather than propagate an impossible error
    check_in
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Nights between check-in and check-out.
///
/// ## Errors
/// `BookingError::InvalidRange` when `check_out <= check_in`. The caller
/// resets the check-out field in that case instead of this function
/// guessing a correction.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use shortlet_core::stay::nights_between;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// assert_eq!(nights_between(check_in, check_out).unwrap(), 3);
/// ```
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> BookingResult<i64> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(BookingError::InvalidRange {
            check_in,
            check_out,
        });
    }
    Ok(nights)
}

/// Today's date (UTC), used when the guest has not picked a check-in yet.
pub fn default_check_in() -> NaiveDate {
    Utc::now().date_naive()
}

/// Derives everything the booking form needs from the selected dates.
///
/// With no check-out selected yet, nights defaults to 1 (the form's
/// initial state). With a check-out, nights is the calendar difference or
/// `InvalidRange` when the range is not strictly positive.
///
/// Idempotent: same inputs always produce the same result.
///
/// ## User Workflow
/// ```text
/// Guest picks check-in: 2024-06-10
///      │
///      ▼
/// compute_stay_dates(2024-06-10, Some(2024-06-13)) ← THIS FUNCTION
///      │
///      ├── Ok { min_check_out: 2024-06-11, nights: 3 }
///      │        → summary shows "3 nights", picker min is 06-11
///      │
///      └── Err(InvalidRange) when check-out <= check-in
///               → UI clears the check-out field, keeps prior nights
/// ```
pub fn compute_stay_dates(
    check_in: NaiveDate,
    check_out: Option<NaiveDate>,
) -> BookingResult<StayDates> {
    let nights = match check_out {
        Some(out) => nights_between(check_in, out)?,
        None => 1,
    };
    Ok(StayDates {
        min_check_out: minimum_check_out(check_in),
        nights,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_minimum_check_out_plain_day() {
        assert_eq!(minimum_check_out(date(2024, 6, 10)), date(2024, 6, 11));
    }

    #[test]
    fn test_minimum_check_out_month_boundary() {
        assert_eq!(minimum_check_out(date(2024, 1, 31)), date(2024, 2, 1));
        assert_eq!(minimum_check_out(date(2024, 4, 30)), date(2024, 5, 1));
    }

    #[test]
    fn test_minimum_check_out_year_boundary() {
        assert_eq!(minimum_check_out(date(2024, 12, 31)), date(2025, 1, 1));
    }

    #[test]
    fn test_minimum_check_out_leap_day() {
        assert_eq!(minimum_check_out(date(2024, 2, 28)), date(2024, 2, 29));
        assert_eq!(minimum_check_out(date(2023, 2, 28)), date(2023, 3, 1));
    }

    #[test]
    fn test_nights_between_valid() {
        assert_eq!(nights_between(date(2024, 6, 10), date(2024, 6, 11)).unwrap(), 1);
        assert_eq!(nights_between(date(2024, 6, 10), date(2024, 6, 24)).unwrap(), 14);
        // Across a month boundary
        assert_eq!(nights_between(date(2024, 1, 30), date(2024, 2, 2)).unwrap(), 3);
    }

    #[test]
    fn test_nights_between_same_day_fails() {
        let err = nights_between(date(2024, 6, 10), date(2024, 6, 10)).unwrap_err();
        assert!(matches!(err, BookingError::InvalidRange { .. }));
    }

    #[test]
    fn test_nights_between_reversed_fails() {
        let err = nights_between(date(2024, 6, 10), date(2024, 6, 8)).unwrap_err();
        assert!(matches!(
            err,
            BookingError::InvalidRange { check_in, check_out }
                if check_in == date(2024, 6, 10) && check_out == date(2024, 6, 8)
        ));
    }

    #[test]
    fn test_compute_stay_dates_with_check_out() {
        let stay = compute_stay_dates(date(2024, 6, 10), Some(date(2024, 6, 13))).unwrap();
        assert_eq!(stay.min_check_out, date(2024, 6, 11));
        assert_eq!(stay.nights, 3);
    }

    #[test]
    fn test_compute_stay_dates_without_check_out() {
        // Fresh form: nights starts at 1
        let stay = compute_stay_dates(date(2024, 6, 10), None).unwrap();
        assert_eq!(stay.min_check_out, date(2024, 6, 11));
        assert_eq!(stay.nights, 1);
    }

    #[test]
    fn test_compute_stay_dates_invalid_range() {
        let err = compute_stay_dates(date(2024, 6, 10), Some(date(2024, 6, 10))).unwrap_err();
        assert!(matches!(err, BookingError::InvalidRange { .. }));
    }

    #[test]
    fn test_compute_stay_dates_idempotent() {
        let a = compute_stay_dates(date(2024, 1, 31), Some(date(2024, 2, 14))).unwrap();
        let b = compute_stay_dates(date(2024, 1, 31), Some(date(2024, 2, 14))).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.nights, 14);
        assert_eq!(a.min_check_out, date(2024, 2, 1));
    }

    #[test]
    fn test_default_check_in_is_today() {
        assert_eq!(default_check_in(), Utc::now().date_naive());
    }
}
