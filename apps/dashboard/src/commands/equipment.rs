//! # Equipment Commands
//!
//! Commands behind the equipment page: the equipment register plus each
//! machine's maintenance history.

use tracing::debug;

use fixhub_core::validation::{validate_new_equipment, validate_new_maintenance};
use fixhub_core::{
    CoreError, Equipment, EquipmentPatch, MaintenanceRecord, NewEquipment, NewMaintenanceRecord,
};

use crate::error::ApiError;
use crate::state::StoreState;

/// Lists equipment; a non-empty `search` filters on name, brand, model and
/// serial number (case-insensitive).
pub fn list_equipment(store: &StoreState, search: Option<&str>) -> Vec<Equipment> {
    debug!(search = ?search, "list_equipment command");

    store.with_store(|s| match search.map(str::trim).filter(|q| !q.is_empty()) {
        Some(term) => s.search_equipment(term).into_iter().cloned().collect(),
        None => s.equipment().to_vec(),
    })
}

pub fn get_equipment(store: &StoreState, id: &str) -> Result<Equipment, ApiError> {
    debug!(id = %id, "get_equipment command");

    store
        .with_store(|s| s.equipment_by_id(id).cloned())
        .ok_or_else(|| CoreError::EquipmentNotFound(id.to_string()).into())
}

pub fn create_equipment(store: &StoreState, form: NewEquipment) -> Result<Equipment, ApiError> {
    debug!(name = %form.name, "create_equipment command");

    validate_new_equipment(&form)?;
    Ok(store.with_store_mut(|s| s.add_equipment(form)))
}

/// Applies a partial edit. Unknown ids are ignored.
pub fn update_equipment(store: &StoreState, id: &str, patch: EquipmentPatch) {
    debug!(id = %id, "update_equipment command");
    store.with_store_mut(|s| s.update_equipment(id, patch));
}

/// Deletes equipment. Its maintenance history is kept.
pub fn delete_equipment(store: &StoreState, id: &str) {
    debug!(id = %id, "delete_equipment command");
    store.with_store_mut(|s| s.delete_equipment(id));
}

/// Logs a maintenance intervention against registered equipment.
pub fn record_maintenance(
    store: &StoreState,
    form: NewMaintenanceRecord,
) -> Result<MaintenanceRecord, ApiError> {
    debug!(equipment_id = %form.equipment_id, "record_maintenance command");

    validate_new_maintenance(&form)?;

    store.with_store_mut(|s| {
        if s.equipment_by_id(&form.equipment_id).is_none() {
            return Err(CoreError::EquipmentNotFound(form.equipment_id.clone()).into());
        }
        Ok(s.add_maintenance_record(form))
    })
}

/// Maintenance history of one machine, most recent first.
pub fn get_maintenance_history(
    store: &StoreState,
    equipment_id: &str,
) -> Result<Vec<MaintenanceRecord>, ApiError> {
    debug!(equipment_id = %equipment_id, "get_maintenance_history command");

    store.with_store(|s| {
        if s.equipment_by_id(equipment_id).is_none() {
            return Err(CoreError::EquipmentNotFound(equipment_id.to_string()).into());
        }
        Ok(s.maintenance_history(equipment_id)
            .into_iter()
            .cloned()
            .collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fixhub_core::{EquipmentStatus, MaintenanceType};
    use fixhub_store::{AppStore, SequentialIdGenerator};

    fn empty_state() -> StoreState {
        StoreState::new(AppStore::with_id_generator(SequentialIdGenerator::new()))
    }

    fn pump() -> NewEquipment {
        NewEquipment {
            name: "Centrifugal pump".to_string(),
            brand: "KSB".to_string(),
            model: "Etanorm 125".to_string(),
            serial_number: "KSB005678".to_string(),
            status: EquipmentStatus::Active,
            acquisition_date: "2023-03-20".parse().unwrap(),
            location: "Sector B".to_string(),
            notes: None,
        }
    }

    fn record(equipment_id: &str, date: &str) -> NewMaintenanceRecord {
        NewMaintenanceRecord {
            equipment_id: equipment_id.to_string(),
            kind: MaintenanceType::Corrective,
            description: "Seal replacement".to_string(),
            date: date.parse().unwrap(),
            technician: "Ana".to_string(),
            cost: None,
            parts_used: None,
        }
    }

    #[test]
    fn test_create_search_and_update() {
        let state = empty_state();
        let pump = create_equipment(&state, pump()).unwrap();

        assert_eq!(list_equipment(&state, Some("ksb0056")).len(), 1);
        assert_eq!(list_equipment(&state, Some("  ")).len(), 1);
        assert!(list_equipment(&state, Some("atlas")).is_empty());

        update_equipment(
            &state,
            &pump.id,
            EquipmentPatch {
                status: Some(EquipmentStatus::Maintenance),
                ..Default::default()
            },
        );
        assert!(get_equipment(&state, &pump.id).unwrap().is_under_maintenance());
    }

    #[test]
    fn test_maintenance_history_newest_first() {
        let state = empty_state();
        let pump = create_equipment(&state, pump()).unwrap();

        record_maintenance(&state, record(&pump.id, "2024-01-10")).unwrap();
        record_maintenance(&state, record(&pump.id, "2024-06-01")).unwrap();

        let history = get_maintenance_history(&state, &pump.id).unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].date > history[1].date);
    }

    #[test]
    fn test_maintenance_requires_known_equipment() {
        let state = empty_state();

        let err = record_maintenance(&state, record("ghost", "2024-01-10")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = get_maintenance_history(&state, "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_keeps_history_records() {
        let state = empty_state();
        let pump = create_equipment(&state, pump()).unwrap();
        record_maintenance(&state, record(&pump.id, "2024-01-10")).unwrap();

        delete_equipment(&state, &pump.id);

        assert!(get_equipment(&state, &pump.id).is_err());
        assert_eq!(state.with_store(|s| s.maintenance_records().len()), 1);
    }

    #[test]
    fn test_create_rejects_blank_serial() {
        let state = empty_state();
        let mut form = pump();
        form.serial_number = String::new();

        let err = create_equipment(&state, form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
