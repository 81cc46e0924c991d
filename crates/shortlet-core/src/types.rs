//! # Domain Types
//!
//! Core domain types used throughout the Shortlet booking flow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Property     │   │ PriceBreakdown  │   │   StayDates     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (API)       │   │  base_price     │   │  min_check_out  │       │
//! │  │  price_kobo     │   │  tax_rate_bps   │   │  nights         │       │
//! │  │  duration       │   │  tax            │   └─────────────────┘       │
//! │  │  duration_disp. │   │  total          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DurationKind   │   │    TaxRate      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  PerDay         │   │  bps (u32)      │                             │
//! │  │  PerWeek        │   │  2000 = 20%     │                             │
//! │  │  PerMonth       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Tier Set
//! `DurationKind` is a closed enum: once a value exists, it IS one of the
//! three billing tiers. Unknown tier strings are rejected at the parsing
//! boundary with `BookingError::UnsupportedDurationKind` instead of being
//! silently priced at zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::BookingError;
use crate::money::Money;
use crate::{DAYS_PER_MONTH, DAYS_PER_WEEK};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (the flat booking tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
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

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Duration Kind
// =============================================================================

/// The billing granularity of a property's price.
///
/// Serializes to the rental API's wire values: `per_day`, `per_week`,
/// `per_month`. Anything else fails deserialization / parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DurationKind {
    /// Price is per night.
    PerDay,
    /// Price is per 7-night week; partial weeks are priced fractionally.
    PerWeek,
    /// Price is per 30-night month; partial months are priced fractionally.
    /// Fixed 30-day approximation, never calendar months.
    PerMonth,
}

impl DurationKind {
    /// Number of nights in one billing unit of this tier.
    ///
    /// ## Example
    /// ```rust
    /// use shortlet_core::types::DurationKind;
    ///
    /// assert_eq!(DurationKind::PerDay.days_per_unit(), 1);
    /// assert_eq!(DurationKind::PerWeek.days_per_unit(), 7);
    /// assert_eq!(DurationKind::PerMonth.days_per_unit(), 30);
    /// ```
    #[inline]
    pub const fn days_per_unit(&self) -> i64 {
        match self {
            DurationKind::PerDay => 1,
            DurationKind::PerWeek => DAYS_PER_WEEK,
            DurationKind::PerMonth => DAYS_PER_MONTH,
        }
    }

    /// The API wire value for this tier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DurationKind::PerDay => "per_day",
            DurationKind::PerWeek => "per_week",
            DurationKind::PerMonth => "per_month",
        }
    }
}

impl fmt::Display for DurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an API duration string into a tier.
///
/// This is the only place an unknown tier can appear; past here the enum
/// is closed and every tier prices correctly.
impl TryFrom<&str> for DurationKind {
    type Error = BookingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "per_day" => Ok(DurationKind::PerDay),
            "per_week" => Ok(DurationKind::PerWeek),
            "per_month" => Ok(DurationKind::PerMonth),
            other => Err(BookingError::UnsupportedDurationKind(other.to_string())),
        }
    }
}

impl FromStr for DurationKind {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationKind::try_from(s)
    }
}

// =============================================================================
// Property
// =============================================================================

/// A rental property, as fetched from the external REST API.
///
/// Read-only to this crate: the API owns the record; the core only reads
/// the pricing fields when computing a booking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Property {
    /// API identifier (opaque string, never interpreted here).
    pub id: String,

    /// Price in kobo for one billing unit (one day/week/month).
    pub price_kobo: i64,

    /// Billing tier this price applies to.
    pub duration: DurationKind,

    /// Human label for the tier (e.g. "per week"), passed through unchanged
    /// for display.
    pub duration_display: String,
}

impl Property {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_kobo(self.price_kobo)
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The priced result of a booking: base, tax, and total, all in kobo.
///
/// Invariant: `total_kobo == base_price_kobo + tax_kobo`, exactly.
/// All three are non-negative for non-negative input prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// Unit price scaled by the duration multiplier, rounded to whole kobo.
    pub base_price_kobo: i64,
    /// Tax rate that was applied, in basis points.
    pub tax_rate_bps: u32,
    /// Tax on the base price.
    pub tax_kobo: i64,
    /// Base plus tax.
    pub total_kobo: i64,
}

impl PriceBreakdown {
    /// Returns the base price as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_kobo(self.base_price_kobo)
    }

    /// Returns the tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_kobo(self.tax_kobo)
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_kobo(self.total_kobo)
    }

    /// Returns the applied tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Stay Dates
// =============================================================================

/// Derived stay-date facts for the booking form.
///
/// The UI holds the mutable selected dates; this is the pure snapshot it
/// recomputes on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StayDates {
    /// Earliest legal check-out: check-in + 1 day.
    #[ts(as = "String")]
    pub min_check_out: NaiveDate,
    /// Nights between check-in and check-out (>= 1).
    pub nights: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
