//! # Domain Types
//!
//! Core domain types used throughout FixHub.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ServiceTicket  │   │   Equipment     │◄──│MaintenanceRecord│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  client         │   │  serial_number  │   │  equipment_id   │       │
//! │  │  status         │   │  status         │   │  kind           │       │
//! │  │  consumed_items ─┼─┐ └─────────────────┘   │  parts_used     │       │
//! │  └─────────────────┘ │                        └─────────────────┘       │
//! │                      │ decrements                                       │
//! │                      ▼                                                  │
//! │               ┌─────────────────┐   increments  ┌─────────────────┐    │
//! │               │      Part       │◄──────────────│    Purchase     │    │
//! │               │  quantity_avail │               │  quantity       │    │
//! │               │  quantity_min   │               │  total_price    │    │
//! │               └─────────────────┘               └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Payload Shapes
//! Every entity comes in three shapes:
//! - the entity itself (with its store-assigned `id`)
//! - a `New*` creation payload (everything except `id`)
//! - a `*Patch` partial update (every field optional, `Some` overwrites)
//!
//! Fields that are optional on the entity itself are `Option<Option<T>>` in
//! the patch: `None` leaves the field alone, `Some(None)` clears it. On the
//! wire an absent key means untouched and `null` means clear.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Identity
// =============================================================================

/// Anything stored in a collection keyed by an opaque string id.
pub trait Identified {
    /// The store-assigned identifier.
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                #[inline]
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

// =============================================================================
// Patch Fields
// =============================================================================

/// Deserializes a clearable patch field. Only called when the key is present,
/// so `null` becomes `Some(None)`; an absent key falls back to `None`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Status Enums
// =============================================================================

/// Lifecycle status of a service ticket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Logged, nobody working on it yet.
    #[default]
    Pending,
    /// A technician is on it.
    InProgress,
    /// Work finished.
    Completed,
    /// Dropped before completion.
    Cancelled,
}

impl TicketStatus {
    /// All statuses in display order.
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Pending,
        TicketStatus::InProgress,
        TicketStatus::Completed,
        TicketStatus::Cancelled,
    ];

    /// Human-readable badge label.
    pub const fn label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Completed => "Completed",
            TicketStatus::Cancelled => "Cancelled",
        }
    }

    /// Pending and in-progress tickets still need attention.
    pub const fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Pending | TicketStatus::InProgress)
    }
}

/// Operational status of a piece of equipment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl EquipmentStatus {
    /// Human-readable badge label.
    pub const fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::Maintenance => "Under maintenance",
            EquipmentStatus::Inactive => "Inactive",
        }
    }
}

/// Kind of maintenance performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    /// Scheduled, before anything breaks.
    #[default]
    Preventive,
    /// Fixing a failure.
    Corrective,
    /// Triggered by condition monitoring.
    Predictive,
}

impl MaintenanceType {
    pub const fn label(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Preventive",
            MaintenanceType::Corrective => "Corrective",
            MaintenanceType::Predictive => "Predictive",
        }
    }
}

// =============================================================================
// Service Ticket
// =============================================================================

/// A part consumed while working a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsumedItem {
    pub part_id: String,
    pub quantity: u32,
}

impl ConsumedItem {
    pub fn new(part_id: impl Into<String>, quantity: u32) -> Self {
        ConsumedItem {
            part_id: part_id.into(),
            quantity,
        }
    }
}

/// A logged service engagement with a client over a piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceTicket {
    pub id: String,
    pub client: String,
    /// Free text; not a reference into the equipment registry.
    pub equipment: String,
    pub service_type: String,
    pub description: String,
    pub status: TicketStatus,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    pub technician: String,
    pub value: Option<Money>,
    pub consumed_items: Option<Vec<ConsumedItem>>,
}

/// Creation payload for [`ServiceTicket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewServiceTicket {
    pub client: String,
    pub equipment: String,
    pub service_type: String,
    pub description: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    pub technician: String,
    #[serde(default)]
    pub value: Option<Money>,
    #[serde(default)]
    pub consumed_items: Option<Vec<ConsumedItem>>,
}

impl NewServiceTicket {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: String) -> ServiceTicket {
        ServiceTicket {
            id,
            client: self.client,
            equipment: self.equipment,
            service_type: self.service_type,
            description: self.description,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            technician: self.technician,
            value: self.value,
            consumed_items: self.consumed_items,
        }
    }
}

/// Partial update for [`ServiceTicket`].
///
/// Changing `consumed_items` here only rewrites the record; stock is only
/// adjusted when a ticket is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ServiceTicketPatch {
    pub client: Option<String>,
    pub equipment: Option<String>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub end_date: Option<Option<NaiveDate>>,
    pub technician: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<Money>")]
    pub value: Option<Option<Money>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<Vec<ConsumedItem>>")]
    pub consumed_items: Option<Option<Vec<ConsumedItem>>>,
}

impl ServiceTicketPatch {
    /// Patch that only moves the ticket to another status.
    pub fn status(status: TicketStatus) -> Self {
        ServiceTicketPatch {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl ServiceTicket {
    /// Merges every `Some` field of the patch into this ticket.
    pub fn apply(&mut self, patch: ServiceTicketPatch) {
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(equipment) = patch.equipment {
            self.equipment = equipment;
        }
        if let Some(service_type) = patch.service_type {
            self.service_type = service_type;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(technician) = patch.technician {
            self.technician = technician;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(consumed_items) = patch.consumed_items {
            self.consumed_items = consumed_items;
        }
    }

    /// Consumed items, empty when none were recorded.
    pub fn consumed(&self) -> &[ConsumedItem] {
        self.consumed_items.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// Equipment
// =============================================================================

/// A physical asset tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: EquipmentStatus,
    #[ts(as = "String")]
    pub acquisition_date: NaiveDate,
    pub location: String,
    pub notes: Option<String>,
}

/// Creation payload for [`Equipment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewEquipment {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[ts(as = "String")]
    pub acquisition_date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewEquipment {
    pub fn with_id(self, id: String) -> Equipment {
        Equipment {
            id,
            name: self.name,
            brand: self.brand,
            model: self.model,
            serial_number: self.serial_number,
            status: self.status,
            acquisition_date: self.acquisition_date,
            location: self.location,
            notes: self.notes,
        }
    }
}

/// Partial update for [`Equipment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct EquipmentPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<EquipmentStatus>,
    #[ts(as = "Option<String>")]
    pub acquisition_date: Option<NaiveDate>,
    pub location: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub notes: Option<Option<String>>,
}

impl Equipment {
    /// Merges every `Some` field of the patch into this record.
    pub fn apply(&mut self, patch: EquipmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(serial_number) = patch.serial_number {
            self.serial_number = serial_number;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(acquisition_date) = patch.acquisition_date {
            self.acquisition_date = acquisition_date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    pub fn is_under_maintenance(&self) -> bool {
        self.status == EquipmentStatus::Maintenance
    }
}

// =============================================================================
// Maintenance Record
// =============================================================================

/// A maintenance event logged against one piece of equipment.
///
/// `parts_used` is informational. Creating a record does not touch part stock,
/// unlike ticket creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaintenanceRecord {
    pub id: String,
    /// Not checked against the registry.
    pub equipment_id: String,
    pub kind: MaintenanceType,
    pub description: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub technician: String,
    pub cost: Option<Money>,
    pub parts_used: Option<Vec<String>>,
}

/// Creation payload for [`MaintenanceRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewMaintenanceRecord {
    pub equipment_id: String,
    #[serde(default)]
    pub kind: MaintenanceType,
    pub description: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub technician: String,
    #[serde(default)]
    pub cost: Option<Money>,
    #[serde(default)]
    pub parts_used: Option<Vec<String>>,
}

impl NewMaintenanceRecord {
    pub fn with_id(self, id: String) -> MaintenanceRecord {
        MaintenanceRecord {
            id,
            equipment_id: self.equipment_id,
            kind: self.kind,
            description: self.description,
            date: self.date,
            technician: self.technician,
            cost: self.cost,
            parts_used: self.parts_used,
        }
    }
}

// =============================================================================
// Part
// =============================================================================

/// An inventory stock-keeping unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity_available: u32,
    pub quantity_minimum: u32,
    /// Unit of measure ("unit", "liter", ...).
    pub unit: String,
    pub unit_price: Option<Money>,
    pub supplier: Option<String>,
}

impl Part {
    /// Available stock is at or below the configured minimum.
    ///
    /// ```rust
    /// # use fixhub_core::Part;
    /// # let mut part = Part {
    /// #     id: "2".into(), name: "Oil".into(), description: String::new(),
    /// #     quantity_available: 3, quantity_minimum: 10, unit: "liter".into(),
    /// #     unit_price: None, supplier: None,
    /// # };
    /// assert!(part.is_low_stock());
    /// part.quantity_available = 11;
    /// assert!(!part.is_low_stock());
    /// ```
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity_available <= self.quantity_minimum
    }

    /// Removes `quantity` units from stock, never going below zero.
    ///
    /// Returns the number of units actually removed.
    pub fn consume(&mut self, quantity: u32) -> u32 {
        let before = self.quantity_available;
        self.quantity_available = before.saturating_sub(quantity);
        before - self.quantity_available
    }

    /// Adds `quantity` units to stock.
    pub fn restock(&mut self, quantity: u32) {
        self.quantity_available = self.quantity_available.saturating_add(quantity);
    }

    /// Value of the stock on hand, when a unit price is known.
    pub fn stock_value(&self) -> Option<Money> {
        self.unit_price.map(|price| price * self.quantity_available)
    }

    /// Merges every `Some` field of the patch into this part.
    ///
    /// Setting `quantity_available` here is a manual stock correction.
    pub fn apply(&mut self, patch: PartPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(quantity_available) = patch.quantity_available {
            self.quantity_available = quantity_available;
        }
        if let Some(quantity_minimum) = patch.quantity_minimum {
            self.quantity_minimum = quantity_minimum;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
    }
}

/// Creation payload for [`Part`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPart {
    pub name: String,
    pub description: String,
    pub quantity_available: u32,
    pub quantity_minimum: u32,
    pub unit: String,
    #[serde(default)]
    pub unit_price: Option<Money>,
    #[serde(default)]
    pub supplier: Option<String>,
}

impl NewPart {
    pub fn with_id(self, id: String) -> Part {
        Part {
            id,
            name: self.name,
            description: self.description,
            quantity_available: self.quantity_available,
            quantity_minimum: self.quantity_minimum,
            unit: self.unit,
            unit_price: self.unit_price,
            supplier: self.supplier,
        }
    }
}

/// Partial update for [`Part`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PartPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity_available: Option<u32>,
    pub quantity_minimum: Option<u32>,
    pub unit: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<Money>")]
    pub unit_price: Option<Option<Money>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub supplier: Option<Option<String>>,
}

// =============================================================================
// Purchase
// =============================================================================

/// A restocking transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Purchase {
    pub id: String,
    #[ts(as = "String")]
    pub purchase_date: NaiveDate,
    pub part_id: String,
    pub quantity: u32,
    pub supplier: String,
    pub total_price: Money,
}

impl Purchase {
    /// Total price divided by quantity, in major currency units.
    #[inline]
    pub fn unit_price(&self) -> f64 {
        self.total_price.per_unit(self.quantity)
    }
}

/// Creation payload for [`Purchase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPurchase {
    #[ts(as = "String")]
    pub purchase_date: NaiveDate,
    pub part_id: String,
    pub quantity: u32,
    pub supplier: String,
    pub total_price: Money,
}

impl NewPurchase {
    pub fn with_id(self, id: String) -> Purchase {
        Purchase {
            id,
            purchase_date: self.purchase_date,
            part_id: self.part_id,
            quantity: self.quantity,
            supplier: self.supplier,
            total_price: self.total_price,
        }
    }
}

impl_identified!(ServiceTicket, Equipment, MaintenanceRecord, Part, Purchase);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn test_part(available: u32, minimum: u32) -> Part {
        Part {
            id: "1".to_string(),
            name: "Air filter".to_string(),
            description: "Compressor air filter".to_string(),
            quantity_available: available,
            quantity_minimum: minimum,
            unit: "unit".to_string(),
            unit_price: Some(Money::from_major(85)),
            supplier: None,
        }
    }

    fn test_ticket() -> ServiceTicket {
        NewServiceTicket {
            client: "Maria".to_string(),
            equipment: "Centrifugal pump".to_string(),
            service_type: "Repair".to_string(),
            description: "Mechanical seal leak".to_string(),
            status: TicketStatus::InProgress,
            start_date: date("2024-12-15"),
            end_date: None,
            technician: "Ana".to_string(),
            value: None,
            consumed_items: None,
        }
        .with_id("2".to_string())
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(test_part(3, 10).is_low_stock());
        assert!(test_part(5, 5).is_low_stock());
        assert!(!test_part(6, 5).is_low_stock());
        assert!(test_part(0, 0).is_low_stock());
    }

    #[test]
    fn test_consume_clamps_at_zero() {
        let mut part = test_part(15, 5);
        assert_eq!(part.consume(20), 15);
        assert_eq!(part.quantity_available, 0);

        let mut part = test_part(15, 5);
        assert_eq!(part.consume(4), 4);
        assert_eq!(part.quantity_available, 11);
    }

    #[test]
    fn test_restock() {
        let mut part = test_part(15, 5);
        part.restock(20);
        assert_eq!(part.quantity_available, 35);

        part.quantity_available = u32::MAX - 1;
        part.restock(10);
        assert_eq!(part.quantity_available, u32::MAX);
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(test_part(10, 5).stock_value(), Some(Money::from_major(850)));

        let mut part = test_part(10, 5);
        part.unit_price = None;
        assert_eq!(part.stock_value(), None);
    }

    #[test]
    fn test_ticket_patch_merges_only_present_fields() {
        let mut ticket = test_ticket();
        ticket.apply(ServiceTicketPatch {
            status: Some(TicketStatus::Completed),
            end_date: Some(Some(date("2024-12-16"))),
            value: Some(Some(Money::from_major(420))),
            ..Default::default()
        });

        assert_eq!(ticket.status, TicketStatus::Completed);
        assert_eq!(ticket.end_date, Some(date("2024-12-16")));
        assert_eq!(ticket.value, Some(Money::from_major(420)));
        assert_eq!(ticket.client, "Maria");
        assert_eq!(ticket.id, "2");
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut ticket = test_ticket();
        let before = ticket.clone();
        ticket.apply(ServiceTicketPatch::default());
        assert_eq!(ticket, before);
    }

    #[test]
    fn test_part_patch() {
        let mut part = test_part(15, 5);
        part.apply(PartPatch {
            quantity_minimum: Some(20),
            supplier: Some(Some("Atlas Copco".to_string())),
            ..Default::default()
        });
        assert_eq!(part.quantity_minimum, 20);
        assert_eq!(part.supplier.as_deref(), Some("Atlas Copco"));
        assert!(part.is_low_stock());
    }

    #[test]
    fn test_patch_null_clears_and_absent_keeps() {
        let mut part = test_part(15, 5);
        part.supplier = Some("Atlas Copco".to_string());

        let patch: PartPatch =
            serde_json::from_str(r#"{"unit_price": null, "quantity_minimum": 3}"#).unwrap();
        assert_eq!(patch.unit_price, Some(None));
        assert_eq!(patch.supplier, None);

        part.apply(patch);
        assert_eq!(part.unit_price, None);
        assert_eq!(part.supplier.as_deref(), Some("Atlas Copco"));
        assert_eq!(part.quantity_minimum, 3);
    }

    #[test]
    fn test_patch_value_sets_nullable_field() {
        let patch: ServiceTicketPatch =
            serde_json::from_str(r#"{"end_date": "2024-12-20", "value": 42000}"#).unwrap();
        assert_eq!(patch.end_date, Some(Some(date("2024-12-20"))));
        assert_eq!(patch.value, Some(Some(Money::from_cents(42000))));
        assert_eq!(patch.consumed_items, None);
    }

    #[test]
    fn test_patch_serializes_clear_as_null() {
        let patch = EquipmentPatch {
            notes: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json["notes"].is_null());
        assert!(json.as_object().unwrap().contains_key("notes"));

        let json = serde_json::to_value(EquipmentPatch::default()).unwrap();
        assert!(!json.as_object().unwrap().contains_key("notes"));
    }

    #[test]
    fn test_purchase_unit_price() {
        let purchase = NewPurchase {
            purchase_date: date("2024-12-10"),
            part_id: "1".to_string(),
            quantity: 20,
            supplier: "Atlas Copco".to_string(),
            total_price: Money::from_major(1700),
        }
        .with_id("1".to_string());

        assert_eq!(purchase.unit_price(), 85.0);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<EquipmentStatus>("\"maintenance\"").unwrap(),
            EquipmentStatus::Maintenance
        );
        assert_eq!(
            serde_json::to_string(&MaintenanceType::Predictive).unwrap(),
            "\"predictive\""
        );
    }

    #[test]
    fn test_new_ticket_defaults_from_json() {
        let json = r#"{
            "client": "Joao",
            "equipment": "Air compressor",
            "service_type": "Preventive maintenance",
            "description": "Filter swap",
            "start_date": "2024-12-01",
            "technician": "Carlos"
        }"#;
        let ticket: NewServiceTicket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.start_date, date("2024-12-01"));
        assert!(ticket.consumed_items.is_none());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TicketStatus::InProgress.label(), "In progress");
        assert_eq!(EquipmentStatus::Maintenance.label(), "Under maintenance");
        assert!(TicketStatus::Pending.is_open());
        assert!(!TicketStatus::Cancelled.is_open());
    }

    #[test]
    fn test_identified() {
        assert_eq!(test_ticket().id(), "2");
        assert_eq!(test_part(1, 1).id(), "1");
    }
}
