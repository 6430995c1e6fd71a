//! In-memory document store.
//!
//! Backs the service and the test suite with a single vector of records
//! behind an RwLock, addressed the way one remote collection would be.
//! Filter semantics are delegated to `RecordFilter::matches`, so the
//! in-memory backend and the translator always agree on what a filter
//! means.

use std::sync::RwLock;

use crate::config::StoreConfig;
use crate::query::filter::RecordFilter;
use crate::query::update::UpdateDoc;

use super::record::{NewRecord, Record, RecordId};
use super::{DocumentStore, StoreError, StoreResult, UpdateOutcome};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store described by `config`.
    ///
    /// The in-memory backend has no wire protocol to speak; connecting
    /// checks that the target database and collection are actually named,
    /// the same startup failure a remote client would surface.
    pub fn connect(config: &StoreConfig) -> StoreResult<Self> {
        if config.database.is_empty() || config.collection.is_empty() {
            return Err(StoreError::Unavailable(format!(
                "no database or collection configured for {}",
                config.endpoint()
            )));
        }
        Ok(Self::new())
    }
}

impl DocumentStore for MemoryStore {
    fn find(&self, filter: &RecordFilter) -> StoreResult<Vec<Record>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    fn insert_one(&self, record: NewRecord) -> StoreResult<RecordId> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = RecordId::generate();
        records.push(Record {
            id: id.clone(),
            object_type: record.object_type,
            data: record.data,
        });
        Ok(id)
    }

    fn insert_many(&self, new_records: Vec<NewRecord>) -> StoreResult<usize> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let count = new_records.len();
        for record in new_records {
            records.push(Record {
                id: RecordId::generate(),
                object_type: record.object_type,
                data: record.data,
            });
        }
        Ok(count)
    }

    fn update_one(&self, filter: &RecordFilter, update: &UpdateDoc) -> StoreResult<UpdateOutcome> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        match records.iter_mut().find(|record| filter.matches(record)) {
            Some(record) => {
                let modified = update.apply(&mut record.data);
                Ok(UpdateOutcome {
                    matched: 1,
                    modified: modified as u64,
                })
            }
            None => Ok(UpdateOutcome {
                matched: 0,
                modified: 0,
            }),
        }
    }

    fn delete_one(&self, filter: &RecordFilter) -> StoreResult<u64> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        match records.iter().position(|record| filter.matches(record)) {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_many(&self, filter: &RecordFilter) -> StoreResult<u64> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = records.len();
        records.retain(|record| !filter.matches(record));
        Ok((before - records.len()) as u64)
    }
}
