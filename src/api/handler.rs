//! Per-verb request orchestration.
//!
//! Every data operation walks the same ladder: validate the objectType,
//! check store readiness, translate the request into a filter or update
//! document, run the store call, fold the result into an envelope. The
//! maintenance operations skip the objectType step and talk to the store
//! directly. Every branch produces exactly one envelope.

use rand::thread_rng;
use serde_json::Value;

use crate::logging::Logger;
use crate::query::filter::RecordFilter;
use crate::query::translate::{self, Lookup};
use crate::store::{DocumentStore, NewRecord, StoreResult, StoreStatus};
use crate::validate::{validate, ParamKind};

use super::fixtures::{SeedCatalog, SEED_COUNT, SEED_OBJECT_TYPE};
use super::response::{
    ApiStatus, CreateEnvelope, DeleteEnvelope, FetchEnvelope, StatusEnvelope, UpdateEnvelope,
};

/// The decision core of the service, generic over the store backend.
pub struct ApiHandler<S> {
    store: S,
    status: StoreStatus,
    seeds: SeedCatalog,
}

impl<S: DocumentStore> ApiHandler<S> {
    pub fn new(store: S, status: StoreStatus, seeds: SeedCatalog) -> Self {
        Self {
            store,
            status,
            seeds,
        }
    }

    /// GET /:objectType - records by id, one field, or the whole namespace.
    pub fn fetch(
        &self,
        object_type: &str,
        params: &[(String, String)],
    ) -> StoreResult<FetchEnvelope> {
        if !validate(object_type, ParamKind::ObjectType) {
            return Ok(FetchEnvelope::failed(ApiStatus::InvalidObjectType));
        }
        if !self.status.is_connected() {
            return Ok(FetchEnvelope::failed(ApiStatus::StoreDown));
        }

        let filter = match translate::lookup(object_type, params) {
            Lookup::Filter(filter) => filter,
            // A malformed id names no record; not-found without a store trip
            Lookup::UnmatchableId => return Ok(FetchEnvelope::failed(ApiStatus::NotFound)),
        };

        let records = self.store.find(&filter)?;
        if records.is_empty() {
            Ok(FetchEnvelope::failed(ApiStatus::NotFound))
        } else {
            Ok(FetchEnvelope::ok(records))
        }
    }

    /// POST /:objectType - store the body verbatim under the namespace.
    pub fn create(&self, object_type: &str, body: Value) -> StoreResult<CreateEnvelope> {
        if !validate(object_type, ParamKind::ObjectType) {
            return Ok(CreateEnvelope::failed(ApiStatus::InvalidObjectType));
        }
        if !self.status.is_connected() {
            return Ok(CreateEnvelope::failed(ApiStatus::StoreDown));
        }

        let id = self.store.insert_one(NewRecord::new(object_type, body))?;
        Ok(CreateEnvelope::ok(id))
    }

    /// PATCH /:objectType?id= - coerced field-by-field update of `data`.
    pub fn update(
        &self,
        object_type: &str,
        params: &[(String, String)],
        body: &Value,
    ) -> StoreResult<UpdateEnvelope> {
        if !validate(object_type, ParamKind::ObjectType) {
            return Ok(UpdateEnvelope::failed(ApiStatus::InvalidObjectType));
        }
        if !self.status.is_connected() {
            return Ok(UpdateEnvelope::failed(ApiStatus::StoreDown));
        }

        let id = match translate::required_id(params) {
            Some(id) => id,
            None => return Ok(UpdateEnvelope::failed(ApiStatus::InvalidId)),
        };

        let filter = RecordFilter::by_type(object_type).with_id(id);
        let update = translate::update_document(body);
        let outcome = self.store.update_one(&filter, &update)?;

        if outcome.matched == 0 {
            Ok(UpdateEnvelope::failed(ApiStatus::NotFound))
        } else {
            Ok(UpdateEnvelope::ok(outcome.modified))
        }
    }

    /// DELETE /:objectType?id= - remove one record by id.
    pub fn remove(
        &self,
        object_type: &str,
        params: &[(String, String)],
    ) -> StoreResult<DeleteEnvelope> {
        if !validate(object_type, ParamKind::ObjectType) {
            return Ok(DeleteEnvelope::failed(ApiStatus::InvalidObjectType));
        }
        if !self.status.is_connected() {
            return Ok(DeleteEnvelope::failed(ApiStatus::StoreDown));
        }

        let id = match translate::required_id(params) {
            Some(id) => id,
            None => return Ok(DeleteEnvelope::failed(ApiStatus::InvalidId)),
        };

        let deleted = self
            .store
            .delete_one(&RecordFilter::by_type(object_type).with_id(id))?;

        if deleted == 0 {
            Ok(DeleteEnvelope::failed(ApiStatus::NotFound))
        } else {
            Ok(DeleteEnvelope::ok(deleted))
        }
    }

    /// GET /maintenance/status - readiness probe.
    pub fn probe(&self) -> StatusEnvelope {
        if self.status.is_connected() {
            StatusEnvelope::of(ApiStatus::Ok)
        } else {
            StatusEnvelope::of(ApiStatus::StoreDown)
        }
    }

    /// GET /maintenance/generatetestdata - idempotent reseed.
    ///
    /// Drops every record in the seed namespace, then inserts a fresh
    /// fixed-size batch of synthetic persons.
    pub fn reseed(&self) -> StoreResult<StatusEnvelope> {
        if !self.status.is_connected() {
            return Ok(StatusEnvelope::of(ApiStatus::StoreDown));
        }

        self.store
            .delete_many(&RecordFilter::by_type(SEED_OBJECT_TYPE))?;

        let mut rng = thread_rng();
        let batch: Vec<NewRecord> = (0..SEED_COUNT)
            .map(|_| NewRecord::new(SEED_OBJECT_TYPE, self.seeds.sample(&mut rng)))
            .collect();
        let inserted = self.store.insert_many(batch)?.to_string();

        Logger::info("TEST_DATA_RESEEDED", &[("count", inserted.as_str())]);
        Ok(StatusEnvelope::of(ApiStatus::Ok))
    }

    /// GET /maintenance/cleardatabase - delete everything, all types.
    ///
    /// Intentionally unscoped and destructive; there is no undo.
    pub fn clear(&self) -> StoreResult<StatusEnvelope> {
        if !self.status.is_connected() {
            return Ok(StatusEnvelope::of(ApiStatus::StoreDown));
        }

        let deleted = self.store.delete_many(&RecordFilter::everything())?.to_string();
        Logger::warn("COLLECTION_CLEARED", &[("deleted", deleted.as_str())]);
        Ok(StatusEnvelope::of(ApiStatus::Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn connected() -> ApiHandler<MemoryStore> {
        let status = StoreStatus::new();
        status.mark_connected();
        ApiHandler::new(MemoryStore::new(), status, SeedCatalog::default())
    }

    #[test]
    fn test_probe_reflects_readiness() {
        assert_eq!(connected().probe().status_code, 0);

        let down = ApiHandler::new(MemoryStore::new(), StoreStatus::new(), SeedCatalog::default());
        assert_eq!(down.probe().status_code, 1);
    }

    #[test]
    fn test_create_assigns_a_well_formed_id() {
        let handler = connected();
        let envelope = handler.create("widget", json!({"color": "red"})).unwrap();
        assert_eq!(envelope.status_code, 0);
        assert_eq!(envelope.id.unwrap().as_str().len(), 24);
    }

    #[test]
    fn test_invalid_object_type_never_reaches_translation() {
        let handler = connected();
        let envelope = handler.fetch("bad!type", &[]).unwrap();
        assert_eq!(envelope.status_code, 3);
        assert!(envelope.records.is_empty());
    }
}
