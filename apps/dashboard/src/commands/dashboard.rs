//! # Dashboard Commands
//!
//! Read-only views over the whole store: the landing page statistics and a
//! full snapshot for export.

use tracing::{debug, info};

use fixhub_core::DashboardStatistics;
use fixhub_store::StoreSnapshot;

use crate::error::ApiError;
use crate::state::StoreState;

/// Statistics for the landing page.
pub fn get_dashboard(store: &StoreState) -> DashboardStatistics {
    debug!("get_dashboard command");
    store.with_store(|s| s.dashboard_statistics())
}

/// Copy of every collection.
pub fn get_snapshot(store: &StoreState) -> StoreSnapshot {
    debug!("get_snapshot command");
    store.with_store(|s| s.snapshot())
}

/// Snapshot as pretty-printed JSON, for the export button.
pub fn export_snapshot_json(store: &StoreState) -> Result<String, ApiError> {
    let snapshot = get_snapshot(store);
    let json = serde_json::to_string_pretty(&snapshot)?;

    info!(bytes = json.len(), "Snapshot exported");
    Ok(json)
}
