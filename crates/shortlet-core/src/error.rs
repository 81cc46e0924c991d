//! # Error Types
//!
//! Domain-specific error types for shortlet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shortlet-core errors (this file)                                      │
//! │  ├── BookingError     - Booking domain failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Everything upstream (HTTP errors, payment failures, toast messages)   │
//! │  belongs to the web application, not this crate.                       │
//! │                                                                         │
//! │  Flow: ValidationError → BookingError → caller → user-facing message   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the bad tier string, the dates)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//! 5. Every error is recoverable by the caller; nothing here panics

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Booking Error
// =============================================================================

/// Booking domain errors.
///
/// These errors represent violations of booking rules. They should be caught
/// by the caller and translated to user-friendly messages (e.g., resetting
/// the check-out field when the range is invalid).
#[derive(Debug, Error)]
pub enum BookingError {
    /// Duration tier string is not one of the known billing tiers.
    ///
    /// ## When This Occurs
    /// - The property API returns a `duration` value other than
    ///   `per_day`, `per_week`, or `per_month`
    ///
    /// The tier set is closed at the type level ([`crate::DurationKind`]),
    /// so this can only happen at the parsing boundary. Refusing here beats
    /// the alternative of silently pricing an unknown tier at ₦0.
    #[error("Unsupported duration kind: {0:?}")]
    UnsupportedDurationKind(String),

    /// Check-out is not strictly after check-in.
    ///
    /// ## When This Occurs
    /// - Guest picks a check-out on or before the check-in date
    /// - Stale check-out survives a later check-in change
    ///
    /// ## User Workflow
    /// ```text
    /// Guest sets check-in: 2024-06-10
    ///      │
    ///      ▼
    /// Existing check-out: 2024-06-10
    ///      │
    ///      ▼
    /// InvalidRange { check_in: 2024-06-10, check_out: 2024-06-10 }
    ///      │
    ///      ▼
    /// UI clears the check-out field
    /// ```
    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied input doesn't meet requirements.
/// Used for early validation before booking logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with BookingError.
pub type BookingResult<T> = Result<T, BookingError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
