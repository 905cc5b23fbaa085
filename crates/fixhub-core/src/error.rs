//! # Error Types
//!
//! Domain-specific error types for fixhub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fixhub-core errors (this file)                                        │
//! │  ├── CoreError        - Lookup failures, wraps validation              │
//! │  └── ValidationError  - Form input rule violations                     │
//! │                                                                         │
//! │  fixhub-store                                                          │
//! │  └── (none)           - Unknown ids are silent no-ops                  │
//! │                                                                         │
//! │  apps/dashboard                                                        │
//! │  └── ApiError         - What the view layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never fails. These errors only exist for the command layer,
//! where a view asks for a record by id or submits a form.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors surfaced to the command layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Service ticket id is unknown.
    #[error("Service ticket not found: {0}")]
    TicketNotFound(String),

    /// Equipment id is unknown.
    #[error("Equipment not found: {0}")]
    EquipmentNotFound(String),

    /// Part id is unknown.
    ///
    /// ## When This Occurs
    /// - A purchase form references a part removed in another view
    /// - A ticket lists a consumed item for a part that was never registered
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Purchase id is unknown.
    #[error("Purchase not found: {0}")]
    PurchaseNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Equivalent to what a native form widget reports (`required`, `min`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be at least one.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A date range ends before it starts.
    #[error("{field} cannot be before {other}")]
    DateBefore { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
