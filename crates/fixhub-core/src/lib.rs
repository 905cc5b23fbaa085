//! # fixhub-core: Pure Domain Logic for FixHub
//!
//! This crate describes the maintenance-management domain: service tickets,
//! equipment, maintenance records, parts and purchases. It owns no state and
//! performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FixHub Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (tables, forms, modals)                │   │
//! │  │    Dashboard ──► Equipment ──► Inventory ──► Purchases          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/dashboard (commands, state)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 fixhub-store (AppStore)                         │   │
//! │  │         collections, ids, stock side effects                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fixhub-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   stats   │  │ validation│  │   │
//! │  │   │  Ticket   │  │   Money   │  │ Dashboard │  │ form rules│  │   │
//! │  │   │  Part     │  │           │  │ Statistics│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO OWNED STATE • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, creation payloads and partial-update patches
//! - [`money`] - Money type with integer arithmetic
//! - [`stats`] - Dashboard statistics aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Form input rules (required fields, minimums)
//!
//! ## Example Usage
//!
//! ```rust
//! use fixhub_core::{Money, Part};
//!
//! let filter = Part {
//!     id: "1".to_string(),
//!     name: "Air filter".to_string(),
//!     description: "Compressor air filter".to_string(),
//!     quantity_available: 5,
//!     quantity_minimum: 5,
//!     unit: "unit".to_string(),
//!     unit_price: Some(Money::from_cents(8500)),
//!     supplier: None,
//! };
//!
//! // Available stock at the minimum counts as low stock
//! assert!(filter.is_low_stock());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use stats::DashboardStatistics;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of tickets listed under "recent tickets" on the dashboard.
pub const RECENT_TICKETS_LIMIT: usize = 5;

/// Maximum length of any free-text form field.
pub const MAX_TEXT_LEN: usize = 200;

/// Placeholder shown when a record references a part that no longer exists.
pub const UNKNOWN_PART_LABEL: &str = "Part not found";
