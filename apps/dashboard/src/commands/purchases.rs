//! # Purchase Commands
//!
//! Commands behind the purchases page. Registering a purchase restocks the
//! purchased part.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use fixhub_core::validation::validate_new_purchase;
use fixhub_core::{CoreError, Money, NewPurchase, Purchase};
use fixhub_store::AppStore;

use crate::error::ApiError;
use crate::state::StoreState;

/// Purchase row with the part resolved to its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRow {
    pub id: String,
    pub purchase_date: NaiveDate,
    pub part_id: String,
    /// Part name, or "Part not found" when the part is not registered
    pub part_name: String,
    pub quantity: u32,
    pub supplier: String,
    pub total_price: Money,
    /// `total_price / quantity`, never stored
    pub unit_price: f64,
}

impl PurchaseRow {
    fn new(store: &AppStore, purchase: &Purchase) -> Self {
        PurchaseRow {
            id: purchase.id.clone(),
            purchase_date: purchase.purchase_date,
            part_id: purchase.part_id.clone(),
            part_name: store.part_name_or_placeholder(&purchase.part_id).to_string(),
            quantity: purchase.quantity,
            supplier: purchase.supplier.clone(),
            total_price: purchase.total_price,
            unit_price: purchase.unit_price(),
        }
    }
}

/// Lists purchases; a non-empty `search` filters on part name and supplier.
pub fn list_purchases(store: &StoreState, search: Option<&str>) -> Vec<PurchaseRow> {
    debug!(search = ?search, "list_purchases command");

    store.with_store(|s| {
        let purchases = match search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(term) => s.search_purchases(term),
            None => s.purchases().iter().collect(),
        };
        purchases
            .into_iter()
            .map(|p| PurchaseRow::new(s, p))
            .collect()
    })
}

pub fn get_purchase(store: &StoreState, id: &str) -> Result<PurchaseRow, ApiError> {
    debug!(id = %id, "get_purchase command");

    store
        .with_store(|s| s.purchase(id).map(|p| PurchaseRow::new(s, p)))
        .ok_or_else(|| CoreError::PurchaseNotFound(id.to_string()).into())
}

/// Purchase history of one part with the total spent on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPurchases {
    pub part_id: String,
    pub part_name: String,
    pub purchases: Vec<PurchaseRow>,
    pub total_spent: Money,
}

pub fn get_part_purchases(store: &StoreState, part_id: &str) -> Result<PartPurchases, ApiError> {
    debug!(part_id = %part_id, "get_part_purchases command");

    store.with_store(|s| -> Result<PartPurchases, ApiError> {
        let part = s
            .part(part_id)
            .ok_or_else(|| CoreError::PartNotFound(part_id.to_string()))?;

        Ok(PartPurchases {
            part_id: part.id.clone(),
            part_name: part.name.clone(),
            purchases: s
                .purchases_for_part(part_id)
                .into_iter()
                .map(|p| PurchaseRow::new(s, p))
                .collect(),
            total_spent: s.purchase_spend(part_id),
        })
    })
}

/// Registers a purchase of a known part.
pub fn create_purchase(store: &StoreState, form: NewPurchase) -> Result<PurchaseRow, ApiError> {
    debug!(part_id = %form.part_id, quantity = form.quantity, "create_purchase command");

    validate_new_purchase(&form)?;

    store.with_store_mut(|s| {
        if s.part(&form.part_id).is_none() {
            return Err(CoreError::PartNotFound(form.part_id.clone()).into());
        }
        let purchase = s.add_purchase(form);
        Ok(PurchaseRow::new(s, &purchase))
    })
}
