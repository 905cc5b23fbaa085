//! # Service Ticket Commands
//!
//! Commands behind the service tickets page.
//!
//! ## Stock Effect
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_ticket(form)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate form ──── invalid ──► ApiError VALIDATION_ERROR              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  every consumed part registered? ── no ──► ApiError NOT_FOUND          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.add_service_ticket ──► stock of each consumed part decremented  │
//! │                               (clamped at zero)                        │
//! │                                                                         │
//! │  update_ticket / set_ticket_status never move stock.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use fixhub_core::validation::validate_new_ticket;
use fixhub_core::{
    CoreError, NewServiceTicket, ServiceTicket, ServiceTicketPatch, TicketStatus,
};

use crate::error::ApiError;
use crate::state::StoreState;

/// Lists tickets, optionally restricted to one status.
pub fn list_tickets(store: &StoreState, status: Option<TicketStatus>) -> Vec<ServiceTicket> {
    debug!(status = ?status, "list_tickets command");

    store.with_store(|s| match status {
        Some(status) => s.tickets_with_status(status).into_iter().cloned().collect(),
        None => s.service_tickets().to_vec(),
    })
}

/// Gets one ticket.
pub fn get_ticket(store: &StoreState, id: &str) -> Result<ServiceTicket, ApiError> {
    debug!(id = %id, "get_ticket command");

    store
        .with_store(|s| s.service_ticket(id).cloned())
        .ok_or_else(|| CoreError::TicketNotFound(id.to_string()).into())
}

/// Opens a ticket from the form, consuming any parts it lists.
pub fn create_ticket(
    store: &StoreState,
    form: NewServiceTicket,
) -> Result<ServiceTicket, ApiError> {
    debug!(client = %form.client, "create_ticket command");

    validate_new_ticket(&form)?;

    store.with_store_mut(|s| {
        if let Some(missing) = form
            .consumed_items
            .iter()
            .flatten()
            .find(|item| s.part(&item.part_id).is_none())
        {
            return Err(CoreError::PartNotFound(missing.part_id.clone()).into());
        }

        Ok(s.add_service_ticket(form))
    })
}

/// Applies a partial edit. Unknown ids are ignored.
pub fn update_ticket(store: &StoreState, id: &str, patch: ServiceTicketPatch) {
    debug!(id = %id, "update_ticket command");
    store.with_store_mut(|s| s.update_service_ticket(id, patch));
}

/// Moves a ticket to another status.
pub fn set_ticket_status(store: &StoreState, id: &str, status: TicketStatus) {
    debug!(id = %id, status = ?status, "set_ticket_status command");
    store.with_store_mut(|s| s.update_service_ticket(id, ServiceTicketPatch::status(status)));
}

/// Deletes a ticket. Unknown ids are ignored.
pub fn delete_ticket(store: &StoreState, id: &str) {
    debug!(id = %id, "delete_ticket command");
    store.with_store_mut(|s| s.delete_service_ticket(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fixhub_core::{ConsumedItem, NewPart};
    use fixhub_store::{AppStore, SequentialIdGenerator};

    fn state_with_part(quantity: u32) -> (StoreState, String) {
        let mut store = AppStore::with_id_generator(SequentialIdGenerator::new());
        let part = store.add_part(NewPart {
            name: "Air filter".to_string(),
            description: "Compressor filter".to_string(),
            quantity_available: quantity,
            quantity_minimum: 1,
            unit: "unit".to_string(),
            unit_price: None,
            supplier: None,
        });
        (StoreState::new(store), part.id)
    }

    fn form(consumed: Option<Vec<ConsumedItem>>) -> NewServiceTicket {
        NewServiceTicket {
            client: "Joao Silva".to_string(),
            equipment: "Air compressor".to_string(),
            service_type: "Repair".to_string(),
            description: "Filter swap".to_string(),
            status: TicketStatus::Pending,
            start_date: "2024-12-01".parse().unwrap(),
            end_date: None,
            technician: "Carlos".to_string(),
            value: None,
            consumed_items: consumed,
        }
    }

    #[test]
    fn test_create_ticket_consumes_stock() {
        let (state, part_id) = state_with_part(5);
        let ticket =
            create_ticket(&state, form(Some(vec![ConsumedItem::new(&part_id, 2)]))).unwrap();

        assert_eq!(get_ticket(&state, &ticket.id).unwrap().client, "Joao Silva");
        let stock = state.with_store(|s| s.part(&part_id).unwrap().quantity_available);
        assert_eq!(stock, 3);
    }

    #[test]
    fn test_create_ticket_rejects_unknown_part() {
        let (state, _) = state_with_part(5);
        let err = create_ticket(&state, form(Some(vec![ConsumedItem::new("nope", 1)])))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(state.with_store(|s| s.service_tickets().is_empty()));
    }

    #[test]
    fn test_create_ticket_rejects_blank_client() {
        let (state, _) = state_with_part(5);
        let mut bad = form(None);
        bad.client = "  ".to_string();

        let err = create_ticket(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_status_change_and_filter() {
        let (state, part_id) = state_with_part(5);
        let ticket =
            create_ticket(&state, form(Some(vec![ConsumedItem::new(&part_id, 1)]))).unwrap();

        set_ticket_status(&state, &ticket.id, TicketStatus::Completed);

        assert_eq!(list_tickets(&state, Some(TicketStatus::Completed)).len(), 1);
        assert!(list_tickets(&state, Some(TicketStatus::Pending)).is_empty());
        // Status changes do not consume again
        let stock = state.with_store(|s| s.part(&part_id).unwrap().quantity_available);
        assert_eq!(stock, 4);
    }

    #[test]
    fn test_delete_and_missing_lookup() {
        let (state, _) = state_with_part(5);
        let ticket = create_ticket(&state, form(None)).unwrap();

        delete_ticket(&state, &ticket.id);
        delete_ticket(&state, "never-existed");

        assert!(list_tickets(&state, None).is_empty());
        let err = get_ticket(&state, &ticket.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
