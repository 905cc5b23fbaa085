//! # Identifier Generation
//!
//! Every entity gets an opaque string id when it is created. Ids are never
//! reused or reassigned, even after the entity is deleted.
//!
//! ```text
//! UuidIdGenerator        "0f8fad5b-d9cb-469f-a165-70867728950e"
//!                        globally unique, no coordination
//!
//! SequentialIdGenerator  "1", "2", "3", ...
//!                        unique within one generator (one store)
//! ```

use std::fmt;

use uuid::Uuid;

/// Source of fresh entity ids.
///
/// `Send` so the store can sit behind a mutex shared across threads.
pub trait IdGenerator: fmt::Debug + Send {
    /// Returns an id this generator has never returned before.
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids: `"1"`, `"2"`, ...
///
/// Uniqueness holds for the lifetime of the generator, which is the lifetime
/// of the store that owns it.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Starts counting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts counting at `first`.
    pub fn starting_at(first: u64) -> Self {
        SequentialIdGenerator { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
