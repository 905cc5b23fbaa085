//! # App Store
//!
//! The single owner of FixHub's state.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                  Collection        Side effect               │
//! │  ─────────────────────────  ────────────────  ───────────────────────── │
//! │  add_service_ticket         tickets  (push)   parts: -consumed, floor 0 │
//! │  update_service_ticket      tickets  (merge)  none                      │
//! │  delete_service_ticket      tickets  (remove) none                      │
//! │  add/update/delete_equipment equipment        none                      │
//! │  add_maintenance_record     maintenance       none (parts_used recorded)│
//! │  add_part / update_part     parts             none                      │
//! │  add_purchase               purchases (push)  parts: +quantity          │
//! │  dashboard_statistics       (read only)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//! None of these operations fail. An update or delete naming an unknown id
//! changes nothing. Each operation runs to completion under `&mut self`, so a
//! reader never observes a half-applied change.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use fixhub_core::{
    DashboardStatistics, Equipment, EquipmentPatch, Identified, MaintenanceRecord, NewEquipment,
    NewMaintenanceRecord, NewPart, NewPurchase, NewServiceTicket, Part, PartPatch, Purchase,
    ServiceTicket, ServiceTicketPatch,
};

use crate::id::{IdGenerator, UuidIdGenerator};
use crate::seed;

// =============================================================================
// Store
// =============================================================================

/// In-memory state for the whole application.
///
/// Build one at startup and pass it by reference; there is no global instance.
#[derive(Debug)]
pub struct AppStore {
    pub(crate) tickets: Vec<ServiceTicket>,
    pub(crate) equipment: Vec<Equipment>,
    pub(crate) maintenance: Vec<MaintenanceRecord>,
    pub(crate) parts: Vec<Part>,
    pub(crate) purchases: Vec<Purchase>,
    ids: Box<dyn IdGenerator>,
}

impl AppStore {
    /// Empty store with UUID ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }

    /// Empty store with the given id strategy.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::with_boxed_id_generator(Box::new(ids))
    }

    /// Empty store with an id strategy picked at runtime.
    pub fn with_boxed_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        AppStore {
            tickets: Vec::new(),
            equipment: Vec::new(),
            maintenance: Vec::new(),
            parts: Vec::new(),
            purchases: Vec::new(),
            ids,
        }
    }

    /// Store pre-filled with the demo dataset (see [`seed`]).
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        seed::load_demo_data(&mut store);
        store
    }

    pub(crate) fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    // =========================================================================
    // Service Tickets
    // =========================================================================

    /// Records a new ticket and takes its consumed parts out of stock.
    ///
    /// Each consumed item lowers the matching part's available quantity,
    /// clamped at zero. Items naming an unknown part are kept on the ticket
    /// but move no stock.
    pub fn add_service_ticket(&mut self, data: NewServiceTicket) -> ServiceTicket {
        let ticket = data.with_id(self.next_id());

        for item in ticket.consumed() {
            match self.parts.iter_mut().find(|p| p.id == item.part_id) {
                Some(part) => {
                    let removed = part.consume(item.quantity);
                    debug!(
                        part_id = %part.id,
                        requested = item.quantity,
                        removed,
                        remaining = part.quantity_available,
                        "Stock consumed by service ticket"
                    );
                }
                None => debug!(part_id = %item.part_id, "Consumed part is not registered"),
            }
        }

        info!(ticket_id = %ticket.id, status = ?ticket.status, "Service ticket created");
        self.tickets.push(ticket.clone());
        ticket
    }

    /// Merges `patch` into the ticket with `id`. Stock is never adjusted here.
    pub fn update_service_ticket(&mut self, id: &str, patch: ServiceTicketPatch) {
        if update_by_id(&mut self.tickets, id, |t| t.apply(patch)) {
            debug!(ticket_id = %id, "Service ticket updated");
        } else {
            debug!(ticket_id = %id, "Update ignored: unknown service ticket");
        }
    }

    /// Removes the ticket with `id`. Consumed stock is not given back.
    pub fn delete_service_ticket(&mut self, id: &str) {
        if remove_by_id(&mut self.tickets, id) {
            info!(ticket_id = %id, "Service ticket deleted");
        } else {
            debug!(ticket_id = %id, "Delete ignored: unknown service ticket");
        }
    }

    // =========================================================================
    // Equipment
    // =========================================================================

    pub fn add_equipment(&mut self, data: NewEquipment) -> Equipment {
        let equipment = data.with_id(self.next_id());
        info!(equipment_id = %equipment.id, serial = %equipment.serial_number, "Equipment registered");
        self.equipment.push(equipment.clone());
        equipment
    }

    pub fn update_equipment(&mut self, id: &str, patch: EquipmentPatch) {
        if update_by_id(&mut self.equipment, id, |e| e.apply(patch)) {
            debug!(equipment_id = %id, "Equipment updated");
        } else {
            debug!(equipment_id = %id, "Update ignored: unknown equipment");
        }
    }

    /// Removes the equipment with `id`. Its maintenance records are kept.
    pub fn delete_equipment(&mut self, id: &str) {
        if remove_by_id(&mut self.equipment, id) {
            info!(equipment_id = %id, "Equipment deleted");
        } else {
            debug!(equipment_id = %id, "Delete ignored: unknown equipment");
        }
    }

    // =========================================================================
    // Maintenance Records
    // =========================================================================

    /// Logs a maintenance event.
    ///
    /// `parts_used` is recorded as given; part stock is left alone.
    pub fn add_maintenance_record(&mut self, data: NewMaintenanceRecord) -> MaintenanceRecord {
        let record = data.with_id(self.next_id());
        info!(
            record_id = %record.id,
            equipment_id = %record.equipment_id,
            kind = ?record.kind,
            "Maintenance recorded"
        );
        self.maintenance.push(record.clone());
        record
    }

    // =========================================================================
    // Parts
    // =========================================================================

    pub fn add_part(&mut self, data: NewPart) -> Part {
        let part = data.with_id(self.next_id());
        info!(part_id = %part.id, name = %part.name, stock = part.quantity_available, "Part registered");
        self.parts.push(part.clone());
        part
    }

    pub fn update_part(&mut self, id: &str, patch: PartPatch) {
        if update_by_id(&mut self.parts, id, |p| p.apply(patch)) {
            debug!(part_id = %id, "Part updated");
        } else {
            debug!(part_id = %id, "Update ignored: unknown part");
        }
    }

    // =========================================================================
    // Purchases
    // =========================================================================

    /// Records a purchase and adds the purchased quantity to the part's stock.
    ///
    /// A purchase for an unknown part is still recorded.
    pub fn add_purchase(&mut self, data: NewPurchase) -> Purchase {
        let purchase = data.with_id(self.next_id());

        match self.parts.iter_mut().find(|p| p.id == purchase.part_id) {
            Some(part) => {
                part.restock(purchase.quantity);
                debug!(
                    part_id = %part.id,
                    added = purchase.quantity,
                    stock = part.quantity_available,
                    "Stock replenished by purchase"
                );
            }
            None => debug!(part_id = %purchase.part_id, "Purchased part is not registered"),
        }

        info!(purchase_id = %purchase.id, total = %purchase.total_price, "Purchase recorded");
        self.purchases.push(purchase.clone());
        purchase
    }

    // =========================================================================
    // Read Side
    // =========================================================================

    pub fn service_tickets(&self) -> &[ServiceTicket] {
        &self.tickets
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn maintenance_records(&self) -> &[MaintenanceRecord] {
        &self.maintenance
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// Dashboard figures over the current collections.
    pub fn dashboard_statistics(&self) -> DashboardStatistics {
        DashboardStatistics::compute(&self.tickets, &self.equipment, &self.parts)
    }

    /// Owned copy of every collection.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            service_tickets: self.tickets.clone(),
            equipment: self.equipment.clone(),
            maintenance_records: self.maintenance.clone(),
            parts: self.parts.clone(),
            purchases: self.purchases.clone(),
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Every collection at one point in time, as handed to a view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreSnapshot {
    pub service_tickets: Vec<ServiceTicket>,
    pub equipment: Vec<Equipment>,
    pub maintenance_records: Vec<MaintenanceRecord>,
    pub parts: Vec<Part>,
    pub purchases: Vec<Purchase>,
}

// =============================================================================
// Collection Helpers
// =============================================================================

/// Applies `f` to the first item with `id`. Returns whether one matched.
fn update_by_id<T: Identified>(items: &mut [T], id: &str, f: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

/// Drops every item with `id`. Returns whether anything was removed.
fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

pub(crate) fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

// =============================================================================
// Unit Tests
// =============================================================================
