//! # Validation Module
//!
//! Form input rules for FixHub.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (form widgets)                                          │
//! │  ├── required, min="0", min="1"                                        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (apps/dashboard)                                     │
//! │  └── THIS MODULE: same rules, enforced on the Rust side                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (fixhub-store)                                         │
//! │  └── Accepts anything; never fails                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fixhub_core::validation::{validate_required, validate_positive_quantity};
//!
//! assert!(validate_required("supplier", "Atlas Copco").is_ok());
//! assert!(validate_positive_quantity("quantity", 0).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewEquipment, NewMaintenanceRecord, NewPart, NewPurchase, NewServiceTicket};
use crate::MAX_TEXT_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most [`MAX_TEXT_LEN`] characters
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates an optional free-text field (length only).
pub fn validate_optional(field: &str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(v) if v.trim().chars().count() > MAX_TEXT_LEN => Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        }),
        _ => Ok(()),
    }
}

/// Validates a quantity that must be at least one (`min="1"`).
pub fn validate_positive_quantity(field: &str, quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a monetary amount (`min="0"`). Zero is allowed.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates that an end date does not precede its start date.
pub fn validate_date_order(start: NaiveDate, end: Option<NaiveDate>) -> ValidationResult<()> {
    match end {
        Some(end) if end < start => Err(ValidationError::DateBefore {
            field: "end_date".to_string(),
            other: "start_date".to_string(),
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the ticket form.
pub fn validate_new_ticket(ticket: &NewServiceTicket) -> ValidationResult<()> {
    validate_required("client", &ticket.client)?;
    validate_required("equipment", &ticket.equipment)?;
    validate_required("service_type", &ticket.service_type)?;
    validate_required("technician", &ticket.technician)?;
    validate_date_order(ticket.start_date, ticket.end_date)?;

    if let Some(value) = ticket.value {
        validate_amount("value", value)?;
    }

    for item in ticket.consumed_items.iter().flatten() {
        validate_required("part_id", &item.part_id)?;
        validate_positive_quantity("consumed quantity", item.quantity)?;
    }

    Ok(())
}

/// Validates the equipment form.
pub fn validate_new_equipment(equipment: &NewEquipment) -> ValidationResult<()> {
    validate_required("name", &equipment.name)?;
    validate_required("brand", &equipment.brand)?;
    validate_required("model", &equipment.model)?;
    validate_required("serial_number", &equipment.serial_number)?;
    validate_required("location", &equipment.location)?;
    validate_optional("notes", equipment.notes.as_deref())?;
    Ok(())
}

/// Validates the maintenance form.
pub fn validate_new_maintenance(record: &NewMaintenanceRecord) -> ValidationResult<()> {
    validate_required("equipment_id", &record.equipment_id)?;
    validate_required("description", &record.description)?;
    validate_required("technician", &record.technician)?;

    if let Some(cost) = record.cost {
        validate_amount("cost", cost)?;
    }

    Ok(())
}

/// Validates the part form.
///
/// Stock quantities are unsigned, so `min="0"` holds by construction.
pub fn validate_new_part(part: &NewPart) -> ValidationResult<()> {
    validate_required("name", &part.name)?;
    validate_required("description", &part.description)?;
    validate_required("unit", &part.unit)?;
    validate_optional("supplier", part.supplier.as_deref())?;

    if let Some(price) = part.unit_price {
        validate_amount("unit_price", price)?;
    }

    Ok(())
}

/// Validates the purchase form.
pub fn validate_new_purchase(purchase: &NewPurchase) -> ValidationResult<()> {
    validate_required("part_id", &purchase.part_id)?;
    validate_positive_quantity("quantity", purchase.quantity)?;
    validate_required("supplier", &purchase.supplier)?;
    validate_amount("total_price", purchase.total_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
