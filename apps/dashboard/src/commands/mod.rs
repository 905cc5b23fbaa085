//! # Commands Module
//!
//! Every operation a view can invoke, one module per page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── tickets.rs    ◄─── Service tickets, status changes
//! ├── equipment.rs  ◄─── Equipment register, maintenance history
//! ├── inventory.rs  ◄─── Parts, low stock alert
//! ├── purchases.rs  ◄─── Purchases (restock)
//! ├── dashboard.rs  ◄─── Statistics, snapshot export
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View                                                                   │
//! │  ────                                                                   │
//! │  create_purchase(context.store(), form)                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn create_purchase(                                                    │
//! │      store: &StoreState,      ◄── Shared store handle                  │
//! │      form: NewPurchase,       ◄── Form payload                         │
//! │  ) -> Result<PurchaseRow, ApiError>                                     │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  View receives: PurchaseRow or { code, message }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! fn list_parts(store: &StoreState, search: Option<&str>)
//!
//! // Only needs configuration
//! fn get_config(config: &ConfigState)
//! ```
//!
//! Lookups fail with `NOT_FOUND`; edits and deletes of unknown ids are
//! silently ignored, matching the store.

pub mod config;
pub mod dashboard;
pub mod equipment;
pub mod inventory;
pub mod purchases;
pub mod tickets;
