//! # Inventory Commands
//!
//! Commands behind the inventory (parts) page.

use serde::Serialize;
use tracing::debug;

use fixhub_core::validation::validate_new_part;
use fixhub_core::{CoreError, Money, NewPart, Part, PartPatch};

use crate::error::ApiError;
use crate::state::StoreState;

/// Part row as the inventory table shows it.
///
/// ## Why DTO?
/// The table highlights low stock and shows the stock value; both are
/// derived, so they are computed here rather than stored on the part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity_available: u32,
    pub quantity_minimum: u32,
    pub unit: String,
    pub unit_price: Option<Money>,
    pub supplier: Option<String>,
    /// `quantity_available <= quantity_minimum`
    pub low_stock: bool,
    pub stock_value: Option<Money>,
}

impl From<&Part> for PartRow {
    fn from(p: &Part) -> Self {
        PartRow {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            quantity_available: p.quantity_available,
            quantity_minimum: p.quantity_minimum,
            unit: p.unit.clone(),
            unit_price: p.unit_price,
            supplier: p.supplier.clone(),
            low_stock: p.is_low_stock(),
            stock_value: p.stock_value(),
        }
    }
}

/// Lists parts; a non-empty `search` filters on name and description.
pub fn list_parts(store: &StoreState, search: Option<&str>) -> Vec<PartRow> {
    debug!(search = ?search, "list_parts command");

    store.with_store(|s| match search.map(str::trim).filter(|q| !q.is_empty()) {
        Some(term) => s.search_parts(term).into_iter().map(PartRow::from).collect(),
        None => s.parts().iter().map(PartRow::from).collect(),
    })
}

pub fn get_part(store: &StoreState, id: &str) -> Result<PartRow, ApiError> {
    debug!(id = %id, "get_part command");

    store
        .with_store(|s| s.part(id).map(PartRow::from))
        .ok_or_else(|| CoreError::PartNotFound(id.to_string()).into())
}

pub fn create_part(store: &StoreState, form: NewPart) -> Result<PartRow, ApiError> {
    debug!(name = %form.name, "create_part command");

    validate_new_part(&form)?;
    let part = store.with_store_mut(|s| s.add_part(form));
    Ok(PartRow::from(&part))
}

/// Applies a partial edit. Unknown ids are ignored.
pub fn update_part(store: &StoreState, id: &str, patch: PartPatch) {
    debug!(id = %id, "update_part command");
    store.with_store_mut(|s| s.update_part(id, patch));
}

/// Parts at or below their minimum, for the restock alert.
pub fn low_stock_parts(store: &StoreState) -> Vec<PartRow> {
    debug!("low_stock_parts command");
    store.with_store(|s| s.low_stock_parts().into_iter().map(PartRow::from).collect())
}
