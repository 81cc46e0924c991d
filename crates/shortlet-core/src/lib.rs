//! # shortlet-core: Pure Booking Logic for Shortlet
//!
//! This crate is the **heart** of the Shortlet rental platform. It contains
//! all booking computation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shortlet Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Web Frontend (TypeScript)                      │   │
//! │  │   Property UI ──► Date Pickers ──► Booking Summary ──► Payment  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON + generated TS bindings           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shortlet-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │   stay    │  │   │
//! │  │   │ Duration  │  │   Money   │  │ breakdown │  │  nights   │  │   │
//! │  │   │ Property  │  │  TaxCalc  │  │   rules   │  │ check-out │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Rental REST API (external service)                 │   │
//! │  │       properties, bookings, payments, notifications             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (DurationKind, Property, PriceBreakdown, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Booking price breakdown computation
//! - [`stay`] - Check-in/check-out date derivation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in kobo (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shortlet_core::money::Money;
//! use shortlet_core::pricing::compute_price_breakdown;
//! use shortlet_core::types::DurationKind;
//!
//! // ₦10,000 per day, 3 nights
//! let nightly = Money::from_kobo(1_000_000);
//! let breakdown = compute_price_breakdown(nightly, DurationKind::PerDay, 3).unwrap();
//!
//! // Base ₦30,000 + 20% tax ₦6,000 = total ₦36,000
//! assert_eq!(breakdown.base_price().kobo(), 3_000_000);
//! assert_eq!(breakdown.tax().kobo(), 600_000);
//! assert_eq!(breakdown.total().kobo(), 3_600_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod stay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shortlet_core::Money` instead of
// `use shortlet_core::money::Money`

pub use error::{BookingError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax rate applied to every booking, in basis points (2000 = 20%).
///
/// ## Why a constant?
/// The rental platform charges a single flat rate on all bookings today.
/// The computation is the source of truth for what the guest is charged;
/// any percentage label rendered by the frontend must be derived from this
/// value, never hard-coded there.
pub const BOOKING_TAX_RATE: TaxRate = TaxRate::from_bps(2000);

/// Days in a pricing week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Days in a pricing month.
///
/// ## Business Reason
/// Monthly-priced properties bill on a fixed 30-day approximation, not
/// calendar months. Switching to calendar months would change charged
/// amounts and needs a product decision first.
pub const DAYS_PER_MONTH: i64 = 30;

/// Maximum nights allowed in a single booking.
///
/// ## Business Reason
/// Prevents accidental runaway stays (e.g., a mistyped check-out year
/// producing a 365,000-night booking). Long-term lets go through a
/// different flow entirely.
pub const MAX_STAY_NIGHTS: i64 = 1_000;
