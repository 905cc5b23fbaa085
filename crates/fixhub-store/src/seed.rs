//! # Demo Dataset
//!
//! A small, realistic starting state so the dashboard has something to show
//! on first launch.
//!
//! ## Contents
//! - 2 service tickets (one completed, one in progress)
//! - 2 pieces of equipment (one active, one under maintenance)
//! - 1 preventive maintenance record on the compressor
//! - 2 parts (air filters in stock, lubricating oil below minimum)
//! - 1 purchase of air filters
//!
//! Records are inserted as-is: the seeded purchase and maintenance record are
//! history, so no stock moves while loading. Ids come from the store's own
//! generator and cross-references use those ids.

use chrono::NaiveDate;
use tracing::info;

use fixhub_core::{
    EquipmentStatus, MaintenanceType, Money, NewEquipment, NewMaintenanceRecord, NewPart,
    NewPurchase, NewServiceTicket, TicketStatus,
};

use crate::store::AppStore;

/// Appends the demo dataset to `store`.
pub fn load_demo_data(store: &mut AppStore) {
    // Parts
    let filter_id = store.next_id();
    store.parts.push(
        NewPart {
            name: "Air filter".to_string(),
            description: "Air filter for Atlas Copco compressors".to_string(),
            quantity_available: 15,
            quantity_minimum: 5,
            unit: "unit".to_string(),
            unit_price: Some(Money::from_major(85)),
            supplier: None,
        }
        .with_id(filter_id.clone()),
    );

    let oil_id = store.next_id();
    store.parts.push(
        NewPart {
            name: "Lubricating oil".to_string(),
            description: "Synthetic oil for compressors".to_string(),
            quantity_available: 3,
            quantity_minimum: 10,
            unit: "liter".to_string(),
            unit_price: Some(Money::from_major(45)),
            supplier: None,
        }
        .with_id(oil_id.clone()),
    );

    // Equipment
    let compressor_id = store.next_id();
    store.equipment.push(
        NewEquipment {
            name: "Atlas Copco air compressor".to_string(),
            brand: "Atlas Copco".to_string(),
            model: "GA30VSD".to_string(),
            serial_number: "AC001234".to_string(),
            status: EquipmentStatus::Active,
            acquisition_date: day(2023, 1, 15),
            location: "Sector A".to_string(),
            notes: None,
        }
        .with_id(compressor_id.clone()),
    );

    let pump_id = store.next_id();
    store.equipment.push(
        NewEquipment {
            name: "KSB centrifugal pump".to_string(),
            brand: "KSB".to_string(),
            model: "Etanorm 125".to_string(),
            serial_number: "KSB005678".to_string(),
            status: EquipmentStatus::Maintenance,
            acquisition_date: day(2023, 3, 20),
            location: "Sector B".to_string(),
            notes: None,
        }
        .with_id(pump_id),
    );

    // Tickets
    let id = store.next_id();
    store.tickets.push(
        NewServiceTicket {
            client: "Joao Silva".to_string(),
            equipment: "Air compressor".to_string(),
            service_type: "Preventive maintenance".to_string(),
            description: "Filter replacement and general inspection".to_string(),
            status: TicketStatus::Completed,
            start_date: day(2024, 12, 1),
            end_date: Some(day(2024, 12, 1)),
            technician: "Carlos Santos".to_string(),
            value: Some(Money::from_major(350)),
            consumed_items: None,
        }
        .with_id(id),
    );

    let id = store.next_id();
    store.tickets.push(
        NewServiceTicket {
            client: "Maria Oliveira".to_string(),
            equipment: "Centrifugal pump".to_string(),
            service_type: "Repair".to_string(),
            description: "Mechanical seal leak repair".to_string(),
            status: TicketStatus::InProgress,
            start_date: day(2024, 12, 15),
            end_date: None,
            technician: "Ana Costa".to_string(),
            value: None,
            consumed_items: None,
        }
        .with_id(id),
    );

    // Maintenance history
    let id = store.next_id();
    store.maintenance.push(
        NewMaintenanceRecord {
            equipment_id: compressor_id,
            kind: MaintenanceType::Preventive,
            description: "Compressor filter replacement and general inspection".to_string(),
            date: day(2024, 12, 1),
            technician: "Carlos Santos".to_string(),
            cost: Some(Money::from_major(350)),
            parts_used: Some(vec![filter_id.clone(), oil_id]),
        }
        .with_id(id),
    );

    // Purchases
    let id = store.next_id();
    store.purchases.push(
        NewPurchase {
            purchase_date: day(2024, 12, 10),
            part_id: filter_id,
            quantity: 20,
            supplier: "Atlas Copco Brasil".to_string(),
            total_price: Money::from_major(1700),
        }
        .with_id(id),
    );

    info!(
        tickets = store.tickets.len(),
        equipment = store.equipment.len(),
        parts = store.parts.len(),
        "Demo data loaded"
    );
}

/// Calendar date from literal parts. Only called with valid dates.
fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdGenerator;

    #[test]
    fn test_demo_data_shape() {
        let store = AppStore::with_demo_data();
        assert_eq!(store.service_tickets().len(), 2);
        assert_eq!(store.equipment().len(), 2);
        assert_eq!(store.maintenance_records().len(), 1);
        assert_eq!(store.parts().len(), 2);
        assert_eq!(store.purchases().len(), 1);
    }

    #[test]
    fn test_demo_data_moves_no_stock() {
        let store = AppStore::with_demo_data();
        assert_eq!(store.parts()[0].quantity_available, 15);
        assert_eq!(store.parts()[1].quantity_available, 3);
    }

    #[test]
    fn test_demo_references_resolve() {
        let store = AppStore::with_demo_data();
        let purchase = &store.purchases()[0];
        assert_eq!(store.part_name_or_placeholder(&purchase.part_id), "Air filter");

        let record = &store.maintenance_records()[0];
        assert!(store.equipment_by_id(&record.equipment_id).is_some());
        assert_eq!(store.maintenance_history(&record.equipment_id).len(), 1);
    }

    #[test]
    fn test_demo_dashboard() {
        let stats = AppStore::with_demo_data().dashboard_statistics();
        assert_eq!(stats.total_tickets, 2);
        assert_eq!(stats.pending_tickets, 0);
        assert_eq!(stats.equipment_in_maintenance, 1);
        assert_eq!(stats.low_stock_parts, 1);
        assert_eq!(stats.recent_tickets[0].client, "Maria Oliveira");
    }

    #[test]
    fn test_seed_with_sequential_ids_then_add() {
        let mut store = AppStore::with_id_generator(SequentialIdGenerator::new());
        load_demo_data(&mut store);
        let part = store.add_part(NewPart {
            name: "Belt".to_string(),
            description: "V-belt".to_string(),
            quantity_available: 1,
            quantity_minimum: 0,
            unit: "unit".to_string(),
            unit_price: None,
            supplier: None,
        });
        assert_eq!(part.id, "9");
    }
}
