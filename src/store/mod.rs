//! # Document store collaborator
//!
//! The API layer talks to the store through the `DocumentStore` trait:
//! find, insert, update and delete by filter, nothing else. Durability,
//! indexing and replication are the store's own business.

pub mod memory;
pub mod record;

pub use memory::MemoryStore;
pub use record::{NewRecord, Record, RecordId};

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::query::filter::RecordFilter;
use crate::query::update::UpdateDoc;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-side failures.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be opened at startup.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A store-internal lock was poisoned mid-operation.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Outcome of an update-by-filter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents the filter matched (0 or 1 for update-one).
    pub matched: u64,

    /// Documents whose data actually changed. A set that writes the values
    /// already present matches without modifying.
    pub modified: u64,
}

/// Operations the API layer needs from any store backend.
pub trait DocumentStore: Send + Sync {
    /// All records satisfying the filter.
    fn find(&self, filter: &RecordFilter) -> StoreResult<Vec<Record>>;

    /// Insert one record; the store assigns and returns its id.
    fn insert_one(&self, record: NewRecord) -> StoreResult<RecordId>;

    /// Insert a batch; returns the number inserted.
    fn insert_many(&self, records: Vec<NewRecord>) -> StoreResult<usize>;

    /// Apply an update to the first record matching the filter.
    fn update_one(&self, filter: &RecordFilter, update: &UpdateDoc) -> StoreResult<UpdateOutcome>;

    /// Delete the first record matching the filter; returns the count (0 or 1).
    fn delete_one(&self, filter: &RecordFilter) -> StoreResult<u64>;

    /// Delete every record matching the filter; returns the count.
    fn delete_many(&self, filter: &RecordFilter) -> StoreResult<u64>;
}

/// Process-wide readiness flag for the store connection.
///
/// Written exactly once by the startup connect attempt; request handlers
/// only ever read it. A failed connect leaves the flag down for the life of
/// the process and every data operation answers "store down".
#[derive(Debug, Default)]
pub struct StoreStatus(AtomicBool);

impl StoreStatus {
    /// A fresh flag, down until the connect attempt reports in.
    pub fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Record a successful connect. Called once, from bootstrap only.
    pub fn mark_connected(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_connected(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
