//! # Queries
//!
//! Read-only lookups over an [`AppStore`]: by-id access, the search boxes on
//! each page, and a few derived lists.
//!
//! ## Search Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types: "atlas"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive substring match over page-specific fields            │
//! │       │                                                                 │
//! │       ├── Inventory:  name, description                                │
//! │       ├── Equipment:  name, brand, model, serial number                │
//! │       └── Purchases:  part name (via part_id), supplier                │
//! │                                                                         │
//! │  Empty term ──► everything, in collection order                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fixhub_core::{
    Equipment, MaintenanceRecord, Money, Part, Purchase, ServiceTicket, TicketStatus,
    UNKNOWN_PART_LABEL,
};

use crate::store::{find_by_id, AppStore};

impl AppStore {
    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn service_ticket(&self, id: &str) -> Option<&ServiceTicket> {
        find_by_id(&self.tickets, id)
    }

    pub fn equipment_by_id(&self, id: &str) -> Option<&Equipment> {
        find_by_id(&self.equipment, id)
    }

    pub fn part(&self, id: &str) -> Option<&Part> {
        find_by_id(&self.parts, id)
    }

    pub fn purchase(&self, id: &str) -> Option<&Purchase> {
        find_by_id(&self.purchases, id)
    }

    /// Name of the part, or a placeholder when it is not registered.
    pub fn part_name_or_placeholder(&self, part_id: &str) -> &str {
        self.part(part_id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PART_LABEL)
    }

    // =========================================================================
    // Derived Lists
    // =========================================================================

    /// Parts at or below their minimum quantity.
    pub fn low_stock_parts(&self) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// Tickets in one status, collection order.
    pub fn tickets_with_status(&self, status: TicketStatus) -> Vec<&ServiceTicket> {
        self.tickets.iter().filter(|t| t.status == status).collect()
    }

    /// Maintenance history of one piece of equipment, most recent first.
    ///
    /// Records sharing a date keep their logging order.
    pub fn maintenance_history(&self, equipment_id: &str) -> Vec<&MaintenanceRecord> {
        let mut history: Vec<&MaintenanceRecord> = self
            .maintenance
            .iter()
            .filter(|m| m.equipment_id == equipment_id)
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Purchases made for one part, collection order.
    pub fn purchases_for_part(&self, part_id: &str) -> Vec<&Purchase> {
        self.purchases
            .iter()
            .filter(|p| p.part_id == part_id)
            .collect()
    }

    /// Total spent on one part across all its purchases.
    pub fn purchase_spend(&self, part_id: &str) -> Money {
        self.purchases_for_part(part_id)
            .into_iter()
            .map(|p| p.total_price)
            .sum()
    }

    // =========================================================================
    // Searches
    // =========================================================================

    /// Inventory search over name and description.
    pub fn search_parts(&self, term: &str) -> Vec<&Part> {
        let needle = normalize(term);
        self.parts
            .iter()
            .filter(|p| contains(&needle, &[p.name.as_str(), p.description.as_str()]))
            .collect()
    }

    /// Equipment search over name, brand, model and serial number.
    pub fn search_equipment(&self, term: &str) -> Vec<&Equipment> {
        let needle = normalize(term);
        self.equipment
            .iter()
            .filter(|e| {
                contains(
                    &needle,
                    &[
                        e.name.as_str(),
                        e.brand.as_str(),
                        e.model.as_str(),
                        e.serial_number.as_str(),
                    ],
                )
            })
            .collect()
    }

    /// Purchase search over the purchased part's name and the supplier.
    ///
    /// A purchase whose part is no longer registered only matches on supplier.
    pub fn search_purchases(&self, term: &str) -> Vec<&Purchase> {
        let needle = normalize(term);
        self.purchases
            .iter()
            .filter(|purchase| {
                let part_name = self.part(&purchase.part_id).map(|p| p.name.as_str());
                match part_name {
                    Some(name) => contains(&needle, &[name, purchase.supplier.as_str()]),
                    None => contains(&needle, &[purchase.supplier.as_str()]),
                }
            })
            .collect()
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// True when any field contains `needle` (already lowercased).
fn contains(needle: &str, fields: &[&str]) -> bool {
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(needle))
}

// =============================================================================
// Unit Tests
// =============================================================================
