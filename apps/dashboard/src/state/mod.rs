//! # State Module
//!
//! Application state handed to every command.
//!
//! ## Why Two State Types?
//! Commands declare exactly what they need: most only touch the store,
//! formatting helpers only read configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext                                 │   │
//! │  │  AppContext::start(config)  ...  context.shutdown()             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                    │                          │                         │
//! │                    ▼                          ▼                         │
//! │  ┌──────────────────────────┐    ┌──────────────────────────┐          │
//! │  │       StoreState         │    │       ConfigState        │          │
//! │  │                          │    │                          │          │
//! │  │  Arc<Mutex<AppStore>>    │    │  organization_name       │          │
//! │  │                          │    │  currency_symbol         │          │
//! │  │                          │    │  seed_demo_data          │          │
//! │  └──────────────────────────┘    └──────────────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: one mutex, every operation runs under it to completion  │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigState, IdStrategy};
pub use store::StoreState;
