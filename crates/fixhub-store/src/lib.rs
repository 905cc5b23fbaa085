//! # fixhub-store: In-Memory State Store for FixHub
//!
//! This crate holds the application state: every ticket, piece of equipment,
//! maintenance record, part and purchase lives in one [`AppStore`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FixHub Data Flow                                 │
//! │                                                                         │
//! │  Command (add_purchase)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   fixhub-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   AppStore    │    │    Queries    │    │  IdGenerator │  │   │
//! │  │   │  (store.rs)   │    │  (query.rs)   │    │   (id.rs)    │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ collections   │◄───│ search_parts  │    │ UUID v4      │  │   │
//! │  │   │ stock effects │    │ history       │    │ counter      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Nothing is written anywhere: state lives as long as the AppStore.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The [`AppStore`] and its create/update/delete operations
//! - [`query`] - Lookups, searches and derived views over the collections
//! - [`id`] - Identifier generators
//! - [`seed`] - Demo dataset
//!
//! ## Usage
//!
//! ```rust
//! use fixhub_core::{ConsumedItem, NewPart, NewServiceTicket, TicketStatus};
//! use fixhub_store::AppStore;
//!
//! let mut store = AppStore::new();
//! let filter = store.add_part(NewPart {
//!     name: "Air filter".to_string(),
//!     description: "Compressor air filter".to_string(),
//!     quantity_available: 15,
//!     quantity_minimum: 5,
//!     unit: "unit".to_string(),
//!     unit_price: None,
//!     supplier: None,
//! });
//!
//! store.add_service_ticket(NewServiceTicket {
//!     client: "Joao".to_string(),
//!     equipment: "Air compressor".to_string(),
//!     service_type: "Repair".to_string(),
//!     description: String::new(),
//!     status: TicketStatus::Completed,
//!     start_date: "2024-12-01".parse().unwrap(),
//!     end_date: None,
//!     technician: "Carlos".to_string(),
//!     value: None,
//!     consumed_items: Some(vec![ConsumedItem::new(&filter.id, 20)]),
//! });
//!
//! // Stock is clamped at zero, never negative
//! assert_eq!(store.part(&filter.id).unwrap().quantity_available, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod id;
pub mod query;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use store::{AppStore, StoreSnapshot};
