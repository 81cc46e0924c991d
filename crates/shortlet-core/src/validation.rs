//! # Validation Module
//!
//! Input validation utilities for the booking flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Required-field checks, date picker min attributes                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Booking rule validation before any price is computed              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Rental REST API (external)                                   │
//! │  └── Server-side constraints, payment checks                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shortlet_core::validation::{validate_nights, validate_property_id};
//!
//! validate_nights(3).unwrap();
//! validate_property_id("prop-1842").unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_STAY_NIGHTS;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a nights count.
///
/// ## Rules
/// - Must be positive (> 0); a booking is always at least one night
/// - Must not exceed MAX_STAY_NIGHTS (1000)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Booking: Confirm Stay                                                  │
/// │                                                                         │
/// │  Dates produce nights: 3                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_nights(3) ← THIS FUNCTION                                    │
/// │       │                                                                 │
/// │       ├── nights <= 0? → Error: "nights must be positive"              │
/// │       │                                                                 │
/// │       ├── nights > 1000? → Error: "nights must be between 1 and 1000"  │
/// │       │                                                                 │
/// │       └── OK → Proceed with price breakdown                            │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_nights(nights: i64) -> ValidationResult<()> {
    if nights <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "nights".to_string(),
        });
    }

    if nights > MAX_STAY_NIGHTS {
        return Err(ValidationError::OutOfRange {
            field: "nights".to_string(),
            min: 1,
            max: MAX_STAY_NIGHTS,
        });
    }

    Ok(())
}

/// Validates a price in kobo.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional free stays)
///
/// ## Example
/// ```rust
/// use shortlet_core::validation::validate_price_kobo;
///
/// assert!(validate_price_kobo(700_000).is_ok()); // ₦7,000.00
/// assert!(validate_price_kobo(0).is_ok());       // Free stay
/// assert!(validate_price_kobo(-100).is_err());   // Invalid
/// ```
pub fn validate_price_kobo(kobo: i64) -> ValidationResult<()> {
    if kobo < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - The platform rate today is 2000 (20%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a property identifier from the rental API.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 64 characters
/// - Opaque otherwise: the API owns the format, we never interpret it
pub fn validate_property_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "property id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "property id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
