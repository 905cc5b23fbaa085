//! # Dashboard Statistics
//!
//! Read-only aggregation over the ticket, equipment and part collections.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard                                                              │
//! │                                                                         │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────────┐ ┌──────────────┐           │
//! │  │ Tickets  │ │ Pending  │ │ In maint.    │ │ Low stock    │           │
//! │  │   12     │ │    3     │ │     2        │ │     4        │           │
//! │  └──────────┘ └──────────┘ └──────────────┘ └──────────────┘           │
//! │                                                                         │
//! │  By status (bar)          By service type (bar)                        │
//! │  Recent tickets (5, newest start date first)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Equipment, Part, ServiceTicket, TicketStatus};
use crate::RECENT_TICKETS_LIMIT;

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStatistics {
    pub total_tickets: usize,
    pub pending_tickets: usize,
    pub equipment_in_maintenance: usize,
    pub low_stock_parts: usize,
    /// Only statuses that occur at least once are present.
    pub tickets_by_status: BTreeMap<TicketStatus, usize>,
    /// Ticket count per free-text service type.
    pub tickets_by_service_type: BTreeMap<String, usize>,
    /// At most [`RECENT_TICKETS_LIMIT`] tickets, latest start date first.
    pub recent_tickets: Vec<ServiceTicket>,
}

impl DashboardStatistics {
    /// Aggregates the given collections. Inputs are not reordered.
    pub fn compute(tickets: &[ServiceTicket], equipment: &[Equipment], parts: &[Part]) -> Self {
        let mut tickets_by_status = BTreeMap::new();
        let mut tickets_by_service_type = BTreeMap::new();
        for ticket in tickets {
            *tickets_by_status.entry(ticket.status).or_insert(0) += 1;
            *tickets_by_service_type
                .entry(ticket.service_type.clone())
                .or_insert(0) += 1;
        }

        DashboardStatistics {
            total_tickets: tickets.len(),
            pending_tickets: tickets_by_status
                .get(&TicketStatus::Pending)
                .copied()
                .unwrap_or(0),
            equipment_in_maintenance: equipment
                .iter()
                .filter(|e| e.is_under_maintenance())
                .count(),
            low_stock_parts: parts.iter().filter(|p| p.is_low_stock()).count(),
            tickets_by_status,
            tickets_by_service_type,
            recent_tickets: recent_tickets(tickets, RECENT_TICKETS_LIMIT),
        }
    }

    /// Count for one status, zero when absent from the map.
    pub fn count_for(&self, status: TicketStatus) -> usize {
        self.tickets_by_status.get(&status).copied().unwrap_or(0)
    }
}

/// The `limit` most recently started tickets.
///
/// Stable sort: tickets sharing a start date keep their collection order.
pub fn recent_tickets(tickets: &[ServiceTicket], limit: usize) -> Vec<ServiceTicket> {
    let mut ordered: Vec<&ServiceTicket> = tickets.iter().collect();
    ordered.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    ordered.into_iter().take(limit).cloned().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EquipmentStatus, NewEquipment, NewPart, NewServiceTicket};
    use chrono::NaiveDate;

    fn ticket(id: &str, status: TicketStatus, start: &str, service_type: &str) -> ServiceTicket {
        NewServiceTicket {
            client: format!("Client {}", id),
            equipment: "Compressor".to_string(),
            service_type: service_type.to_string(),
            description: String::new(),
            status,
            start_date: start.parse().unwrap(),
            end_date: None,
            technician: "Carlos".to_string(),
            value: None,
            consumed_items: None,
        }
        .with_id(id.to_string())
    }

    fn equipment(id: &str, status: EquipmentStatus) -> Equipment {
        NewEquipment {
            name: format!("Machine {}", id),
            brand: "KSB".to_string(),
            model: "Etanorm".to_string(),
            serial_number: format!("SN-{}", id),
            status,
            acquisition_date: NaiveDate::from_ymd_opt(2023, 3, 20).unwrap(),
            location: "Sector B".to_string(),
            notes: None,
        }
        .with_id(id.to_string())
    }

    fn part(id: &str, available: u32, minimum: u32) -> Part {
        NewPart {
            name: format!("Part {}", id),
            description: String::new(),
            quantity_available: available,
            quantity_minimum: minimum,
            unit: "unit".to_string(),
            unit_price: None,
            supplier: None,
        }
        .with_id(id.to_string())
    }

    #[test]
    fn test_empty_collections() {
        let stats = DashboardStatistics::compute(&[], &[], &[]);
        assert_eq!(stats.total_tickets, 0);
        assert_eq!(stats.pending_tickets, 0);
        assert_eq!(stats.equipment_in_maintenance, 0);
        assert_eq!(stats.low_stock_parts, 0);
        assert!(stats.tickets_by_status.is_empty());
        assert!(stats.recent_tickets.is_empty());
        assert_eq!(stats, DashboardStatistics::default());
    }

    #[test]
    fn test_counts() {
        let tickets = vec![
            ticket("1", TicketStatus::Completed, "2024-12-01", "Repair"),
            ticket("2", TicketStatus::InProgress, "2024-12-15", "Repair"),
            ticket("3", TicketStatus::Pending, "2024-12-16", "Inspection"),
            ticket("4", TicketStatus::Pending, "2024-12-17", "Repair"),
        ];
        let equipment = vec![
            equipment("1", EquipmentStatus::Active),
            equipment("2", EquipmentStatus::Maintenance),
            equipment("3", EquipmentStatus::Inactive),
        ];
        let parts = vec![part("1", 15, 5), part("2", 3, 10), part("3", 5, 5)];

        let stats = DashboardStatistics::compute(&tickets, &equipment, &parts);

        assert_eq!(stats.total_tickets, 4);
        assert_eq!(stats.pending_tickets, 2);
        assert_eq!(stats.equipment_in_maintenance, 1);
        assert_eq!(stats.low_stock_parts, 2);
        assert_eq!(stats.count_for(TicketStatus::Pending), 2);
        assert_eq!(stats.count_for(TicketStatus::Cancelled), 0);
        assert!(!stats.tickets_by_status.contains_key(&TicketStatus::Cancelled));
        assert_eq!(stats.tickets_by_service_type["Repair"], 3);
        assert_eq!(stats.tickets_by_service_type["Inspection"], 1);
    }

    #[test]
    fn test_recent_tickets_limited_and_ordered() {
        let tickets: Vec<_> = (1..=7)
            .map(|day| {
                ticket(
                    &day.to_string(),
                    TicketStatus::Pending,
                    &format!("2024-12-{:02}", day),
                    "Repair",
                )
            })
            .collect();

        let stats = DashboardStatistics::compute(&tickets, &[], &[]);
        let ids: Vec<_> = stats.recent_tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn test_recent_tickets_ties_keep_collection_order() {
        let tickets = vec![
            ticket("a", TicketStatus::Pending, "2024-12-01", "Repair"),
            ticket("b", TicketStatus::Pending, "2024-12-05", "Repair"),
            ticket("c", TicketStatus::Pending, "2024-12-01", "Repair"),
        ];
        let recent = recent_tickets(&tickets, 5);
        let ids: Vec<_> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);

        // Input order untouched
        assert_eq!(tickets[0].id, "a");
    }

    #[test]
    fn test_status_map_serializes_with_wire_names() {
        let tickets = vec![ticket("1", TicketStatus::InProgress, "2024-12-15", "Repair")];
        let stats = DashboardStatistics::compute(&tickets, &[], &[]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["tickets_by_status"]["in_progress"], 1);
    }
}
