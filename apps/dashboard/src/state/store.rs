//! # Store State
//!
//! Shares the single [`AppStore`] between commands.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every page's commands read or modify the same collections
//! 2. Only one command may modify the store at a time
//! 3. A command's change must be fully applied before anyone reads
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View Action              Command                 Store Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  Submit ticket form ─────► create_ticket() ─────► tickets.push + stock │
//! │                                                                         │
//! │  Register purchase ──────► create_purchase() ───► purchases.push + stock│
//! │                                                                         │
//! │  Open dashboard ─────────► get_dashboard() ─────► (read only)          │
//! │                                                                         │
//! │  NOTE: Writes and reads both take the lock; reads release it quickly.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fixhub_store::{AppStore, IdGenerator, SequentialIdGenerator, UuidIdGenerator};

use super::config::{ConfigState, IdStrategy};

/// Shared handle to the application store.
///
/// Cloning is cheap and every clone points at the same store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<AppStore>>,
}

impl StoreState {
    /// Wraps an already built store.
    pub fn new(store: AppStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Builds the store described by `config`: id strategy, then optional
    /// demo data.
    pub fn from_config(config: &ConfigState) -> Self {
        let ids: Box<dyn IdGenerator> = match config.id_strategy {
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
        };

        let mut store = AppStore::with_boxed_id_generator(ids);
        if config.seed_demo_data {
            fixhub_store::seed::load_demo_data(&mut store);
        }

        Self::new(store)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stats = store_state.with_store(|store| store.dashboard_statistics());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppStore) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let part = store_state.with_store_mut(|store| store.add_part(new_part));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AppStore) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }

    /// Store operations cannot panic halfway through a change, so the data
    /// behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, AppStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(AppStore::new())
    }
}
