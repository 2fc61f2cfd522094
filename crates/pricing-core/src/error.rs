//! # Error Types
//!
//! Domain-specific error types for pricing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricing-core errors (this file)                                       │
//! │  ├── CoreError        - Resolution failures (unsupported kind/scope)   │
//! │  └── ValidationError  - Input shape and range failures                 │
//! │                                                                         │
//! │  pricing-db errors (separate crate)                                    │
//! │  └── DbError          - Store failures, wraps CoreError                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → caller                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "No eligible campaign" and "inverted date window" are NOT errors: the
//! resolver answers with the base price in both cases.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while resolving a price.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A discount kind string that is neither `PERCENTAGE` nor `FIXED_AMOUNT`.
    ///
    /// ## When This Occurs
    /// - Data entry typo in the campaign form ("PERCENT", "fixed")
    /// - A record written by a newer version with a kind we don't know
    ///
    /// Never defaulted to a fixed-amount calculation.
    #[error("Unsupported discount kind: {0}")]
    UnsupportedDiscountKind(String),

    /// A scope string that is not `GLOBAL`, `PRODUCT` or `CATEGORY`.
    #[error("Unsupported campaign scope: {0}")]
    UnsupportedScope(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant names the offending field so the caller can point at it.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// End of a range precedes its start.
    #[error("{end_field} must not be before {start_field}")]
    InvertedRange {
        start_field: String,
        end_field: String,
    },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
