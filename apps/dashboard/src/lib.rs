//! # FixHub Dashboard Library
//!
//! Application layer for the FixHub maintenance dashboard: builds the store
//! once at startup and exposes the commands each page calls.
//!
//! ## Module Organization
//! ```text
//! fixhub_dashboard/
//! ├── lib.rs          ◄─── You are here (AppContext, logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared AppStore handle
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── tickets.rs  ◄─── Service ticket commands
//! │   ├── equipment.rs◄─── Equipment + maintenance commands
//! │   ├── inventory.rs◄─── Part commands
//! │   ├── purchases.rs◄─── Purchase commands
//! │   ├── dashboard.rs◄─── Statistics and export
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ConfigState::from_env()                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  AppContext::start(config) ──► StoreState (seeded per config)          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::*(context.store(), ...)   ◄── any number of calls           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  context.shutdown() ──► final counts logged, store dropped             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, StoreState};

/// Everything the views need, built once at startup.
///
/// There is no global instance: whoever hosts the views owns the context and
/// passes its state to commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    store: StoreState,
    config: ConfigState,
}

impl AppContext {
    /// Builds the store described by `config`.
    ///
    /// ## Startup Sequence
    /// 1. Pick the id strategy
    /// 2. Load the demo dataset when `seed_demo_data` is set
    /// 3. Hand out the context
    pub fn start(config: ConfigState) -> Self {
        info!(
            organization = %config.organization_name,
            seed_demo_data = config.seed_demo_data,
            id_strategy = ?config.id_strategy,
            "Starting FixHub dashboard"
        );

        let store = StoreState::from_config(&config);
        store.with_store(|s| {
            info!(
                tickets = s.service_tickets().len(),
                equipment = s.equipment().len(),
                parts = s.parts().len(),
                "Store ready"
            );
        });

        AppContext { store, config }
    }

    pub fn store(&self) -> &StoreState {
        &self.store
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Ends the session. Nothing is persisted, so all data is discarded.
    pub fn shutdown(self) {
        self.store.with_store(|s| {
            info!(
                tickets = s.service_tickets().len(),
                equipment = s.equipment().len(),
                maintenance_records = s.maintenance_records().len(),
                parts = s.parts().len(),
                purchases = s.purchases().len(),
                "Shutting down FixHub dashboard"
            );
        });
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fixhub=trace` - Show trace for fixhub crates only
/// - Default: INFO, DEBUG for fixhub crates
///
/// Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fixhub=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::IdStrategy;
    use fixhub_core::{Money, NewPurchase};

    #[test]
    fn test_start_with_demo_data() {
        let context = AppContext::start(ConfigState::default());
        let stats = commands::dashboard::get_dashboard(context.store());

        assert_eq!(stats.total_tickets, 2);
        assert_eq!(context.config().currency_symbol, "R$");
        context.shutdown();
    }

    #[test]
    fn test_start_empty_then_use() {
        init_tracing();
        init_tracing();

        let context = AppContext::start(ConfigState {
            seed_demo_data: false,
            id_strategy: IdStrategy::Sequential,
            ..ConfigState::default()
        });
        assert!(commands::inventory::list_parts(context.store(), None).is_empty());

        // Purchases need a registered part
        let err = commands::purchases::create_purchase(
            context.store(),
            NewPurchase {
                purchase_date: "2024-12-10".parse().unwrap(),
                part_id: "1".to_string(),
                quantity: 1,
                supplier: "Acme".to_string(),
                total_price: Money::from_major(5),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, error::ErrorCode::NotFound);
        context.shutdown();
    }

    #[test]
    fn test_contexts_are_independent() {
        let config = ConfigState {
            seed_demo_data: false,
            ..ConfigState::default()
        };
        let first = AppContext::start(config.clone());
        let second = AppContext::start(config);

        first.store().with_store_mut(|s| {
            s.add_purchase(NewPurchase {
                purchase_date: "2024-12-10".parse().unwrap(),
                part_id: "x".to_string(),
                quantity: 1,
                supplier: "Acme".to_string(),
                total_price: Money::from_major(5),
            })
        });

        assert_eq!(first.store().with_store(|s| s.purchases().len()), 1);
        assert!(second.store().with_store(|s| s.purchases().is_empty()));
    }
}
