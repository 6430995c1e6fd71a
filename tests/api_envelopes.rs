//! Envelope behavior tests
//!
//! Drive the handler layer directly against the in-memory store - the same
//! surface the HTTP routes delegate to. Covers:
//! - create/read round trips and id assignment
//! - the status-code taxonomy on every failure branch
//! - coercion of search and update values
//! - maintenance semantics (probe, reseed, clear)
//! - short-circuits that must not touch the store

use docgate::api::{ApiHandler, SeedCatalog};
use docgate::query::{RecordFilter, UpdateDoc};
use docgate::store::{
    DocumentStore, MemoryStore, NewRecord, Record, RecordId, StoreResult, StoreStatus,
    UpdateOutcome,
};
use serde_json::json;

// =============================================================================
// Helpers
// =============================================================================

fn connected() -> ApiHandler<MemoryStore> {
    let status = StoreStatus::new();
    status.mark_connected();
    ApiHandler::new(MemoryStore::new(), status, SeedCatalog::default())
}

fn down() -> ApiHandler<MemoryStore> {
    ApiHandler::new(MemoryStore::new(), StoreStatus::new(), SeedCatalog::default())
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A store that must never be reached. Every method panics, proving that
/// the handler short-circuited before its store call.
struct UnreachableStore;

impl DocumentStore for UnreachableStore {
    fn find(&self, _: &RecordFilter) -> StoreResult<Vec<Record>> {
        panic!("store must not be consulted");
    }
    fn insert_one(&self, _: NewRecord) -> StoreResult<RecordId> {
        panic!("store must not be consulted");
    }
    fn insert_many(&self, _: Vec<NewRecord>) -> StoreResult<usize> {
        panic!("store must not be consulted");
    }
    fn update_one(&self, _: &RecordFilter, _: &UpdateDoc) -> StoreResult<UpdateOutcome> {
        panic!("store must not be consulted");
    }
    fn delete_one(&self, _: &RecordFilter) -> StoreResult<u64> {
        panic!("store must not be consulted");
    }
    fn delete_many(&self, _: &RecordFilter) -> StoreResult<u64> {
        panic!("store must not be consulted");
    }
}

fn guarded() -> ApiHandler<UnreachableStore> {
    let status = StoreStatus::new();
    status.mark_connected();
    ApiHandler::new(UnreachableStore, status, SeedCatalog::default())
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_create_then_fetch_by_id_round_trips() {
    let handler = connected();

    let created = handler.create("widget", json!({"color": "red"})).unwrap();
    assert_eq!(created.status_code, 0);
    assert_eq!(created.status_text, "OK");
    let id = created.id.expect("id assigned");
    assert_eq!(id.as_str().len(), 24);

    let fetched = handler
        .fetch("widget", &params(&[("id", id.as_str())]))
        .unwrap();
    assert_eq!(fetched.status_code, 0);
    assert_eq!(fetched.records.len(), 1);
    assert_eq!(fetched.records[0].data, json!({"color": "red"}));
    assert_eq!(fetched.records[0].object_type, "widget");
}

#[test]
fn test_round_trip_preserves_nested_data() {
    let handler = connected();
    let data = json!({
        "name": "Kim",
        "tags": ["a", "b"],
        "address": {"street": "Main", "number": 7},
        "active": true,
        "score": 4.5
    });

    let id = handler.create("person", data.clone()).unwrap().id.unwrap();
    let fetched = handler
        .fetch("person", &params(&[("id", id.as_str())]))
        .unwrap();
    assert_eq!(fetched.records[0].data, data);
}

#[test]
fn test_fetch_without_params_returns_the_whole_namespace() {
    let handler = connected();
    handler.create("widget", json!({"n": 1})).unwrap();
    handler.create("widget", json!({"n": 2})).unwrap();
    handler.create("gadget", json!({"n": 3})).unwrap();

    let fetched = handler.fetch("widget", &[]).unwrap();
    assert_eq!(fetched.records.len(), 2);
}

#[test]
fn test_fetch_empty_namespace_is_not_found() {
    let handler = connected();
    let fetched = handler.fetch("widget", &[]).unwrap();
    assert_eq!(fetched.status_code, 2);
    assert!(fetched.records.is_empty());
}

// =============================================================================
// Search coercion
// =============================================================================

#[test]
fn test_field_search_is_exact_match() {
    let handler = connected();
    handler.create("widget", json!({"color": "red"})).unwrap();
    handler.create("widget", json!({"color": "dark red"})).unwrap();

    let fetched = handler
        .fetch("widget", &params(&[("color", "red")]))
        .unwrap();
    assert_eq!(fetched.records.len(), 1);
    assert_eq!(fetched.records[0].data["color"], "red");
}

#[test]
fn test_numeric_search_matches_both_representations() {
    let handler = connected();
    handler.create("widget", json!({"n": 42})).unwrap();
    handler.create("widget", json!({"n": "42"})).unwrap();
    handler.create("widget", json!({"n": 43})).unwrap();

    let fetched = handler.fetch("widget", &params(&[("n", "42")])).unwrap();
    assert_eq!(fetched.records.len(), 2);
}

#[test]
fn test_literal_search_matches_both_representations() {
    let handler = connected();
    handler.create("widget", json!({"flag": true})).unwrap();
    handler.create("widget", json!({"flag": "true"})).unwrap();
    handler.create("widget", json!({"flag": false})).unwrap();

    let fetched = handler
        .fetch("widget", &params(&[("flag", "true")]))
        .unwrap();
    assert_eq!(fetched.records.len(), 2);
}

#[test]
fn test_first_search_param_wins() {
    let handler = connected();
    handler
        .create("widget", json!({"color": "red", "size": 1}))
        .unwrap();

    // size=9 matches nothing, but only the first parameter is consulted
    let fetched = handler
        .fetch("widget", &params(&[("color", "red"), ("size", "9")]))
        .unwrap();
    assert_eq!(fetched.status_code, 0);
    assert_eq!(fetched.records.len(), 1);
}

// =============================================================================
// Failure taxonomy
// =============================================================================

#[test]
fn test_invalid_object_type_is_code_3_regardless_of_store() {
    let handler = guarded();
    assert_eq!(handler.fetch("bad!type", &[]).unwrap().status_code, 3);
    assert_eq!(
        handler.create("bad!type", json!({})).unwrap().status_code,
        3
    );
    assert_eq!(handler.update("bad!type", &[], &json!({})).unwrap().status_code, 3);
    assert_eq!(handler.remove("bad!type", &[]).unwrap().status_code, 3);
}

#[test]
fn test_malformed_id_on_fetch_is_not_found_without_a_store_call() {
    let handler = guarded();
    let fetched = handler
        .fetch("widget", &params(&[("id", "not-24-chars")]))
        .unwrap();
    assert_eq!(fetched.status_code, 2);
    assert!(fetched.records.is_empty());
}

#[test]
fn test_missing_or_malformed_id_on_delete_is_code_4_without_a_store_call() {
    let handler = guarded();

    let removed = handler.remove("widget", &[]).unwrap();
    assert_eq!(removed.status_code, 4);
    assert_eq!(removed.items_deleted, 0);

    let removed = handler
        .remove("widget", &params(&[("id", "UPPERCASE-AND-SHORT")]))
        .unwrap();
    assert_eq!(removed.status_code, 4);
}

#[test]
fn test_missing_id_on_update_is_code_4_without_a_store_call() {
    let handler = guarded();
    let updated = handler
        .update("widget", &[], &json!({"age": 5}))
        .unwrap();
    assert_eq!(updated.status_code, 4);
    assert_eq!(updated.items_modified, 0);
}

#[test]
fn test_store_down_answers_code_1_everywhere() {
    let handler = down();
    let no_params: Vec<(String, String)> = Vec::new();

    assert_eq!(handler.fetch("widget", &no_params).unwrap().status_code, 1);
    assert_eq!(handler.create("widget", json!({})).unwrap().status_code, 1);
    assert_eq!(
        handler
            .update("widget", &no_params, &json!({}))
            .unwrap()
            .status_code,
        1
    );
    assert_eq!(handler.remove("widget", &no_params).unwrap().status_code, 1);
    assert_eq!(handler.probe().status_code, 1);
    assert_eq!(handler.reseed().unwrap().status_code, 1);
    assert_eq!(handler.clear().unwrap().status_code, 1);
}

#[test]
fn test_unmatched_valid_id_is_not_found() {
    let handler = connected();
    handler.create("widget", json!({})).unwrap();

    let absent = "65f0a1b2c3d4e5f601234567";
    let fetched = handler.fetch("widget", &params(&[("id", absent)])).unwrap();
    assert_eq!(fetched.status_code, 2);

    let updated = handler
        .update("widget", &params(&[("id", absent)]), &json!({"a": 1}))
        .unwrap();
    assert_eq!(updated.status_code, 2);

    let removed = handler.remove("widget", &params(&[("id", absent)])).unwrap();
    assert_eq!(removed.status_code, 2);
    assert_eq!(removed.items_deleted, 0);
}

#[test]
fn test_id_is_namespaced_by_object_type() {
    let handler = connected();
    let id = handler.create("widget", json!({})).unwrap().id.unwrap();

    // The right id under the wrong type finds nothing
    let fetched = handler
        .fetch("gadget", &params(&[("id", id.as_str())]))
        .unwrap();
    assert_eq!(fetched.status_code, 2);
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn test_update_stores_typed_values() {
    let handler = connected();
    let id = handler
        .create("widget", json!({"age": 1}))
        .unwrap()
        .id
        .unwrap();
    let id_params = params(&[("id", id.as_str())]);

    let updated = handler
        .update("widget", &id_params, &json!({"age": 5}))
        .unwrap();
    assert_eq!(updated.status_code, 0);
    assert_eq!(updated.items_modified, 1);

    let fetched = handler.fetch("widget", &id_params).unwrap();
    assert_eq!(fetched.records[0].data["age"], json!(5));
}

#[test]
fn test_update_coerces_numeric_and_literal_strings() {
    let handler = connected();
    let id = handler.create("widget", json!({})).unwrap().id.unwrap();
    let id_params = params(&[("id", id.as_str())]);

    handler
        .update(
            "widget",
            &id_params,
            &json!({"age": "7", "active": "true", "nickname": "null", "color": "red"}),
        )
        .unwrap();

    let data = &handler.fetch("widget", &id_params).unwrap().records[0].data;
    assert_eq!(data["age"], json!(7));
    assert_eq!(data["active"], json!(true));
    assert_eq!(data["nickname"], json!(null));
    assert_eq!(data["color"], json!("red"));
}

#[test]
fn test_update_never_touches_identity_fields() {
    let handler = connected();
    let id = handler.create("widget", json!({"color": "red"})).unwrap().id.unwrap();
    let id_params = params(&[("id", id.as_str())]);

    handler
        .update(
            "widget",
            &id_params,
            &json!({"objectType": "gadget", "id": "ffffffffffffffffffffffff", "color": "blue"}),
        )
        .unwrap();

    let record = &handler.fetch("widget", &id_params).unwrap().records[0];
    assert_eq!(record.object_type, "widget");
    assert_eq!(record.id, id);
    assert_eq!(record.data["color"], "blue");
    assert!(record.data.get("objectType").is_none());
}

#[test]
fn test_update_with_identical_values_matches_but_modifies_nothing() {
    let handler = connected();
    let id = handler
        .create("widget", json!({"age": 5}))
        .unwrap()
        .id
        .unwrap();

    let updated = handler
        .update("widget", &params(&[("id", id.as_str())]), &json!({"age": 5}))
        .unwrap();
    assert_eq!(updated.status_code, 0);
    assert_eq!(updated.items_modified, 0);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_removes_exactly_one_record() {
    let handler = connected();
    let id = handler.create("widget", json!({})).unwrap().id.unwrap();
    handler.create("widget", json!({})).unwrap();

    let removed = handler
        .remove("widget", &params(&[("id", id.as_str())]))
        .unwrap();
    assert_eq!(removed.status_code, 0);
    assert_eq!(removed.items_deleted, 1);

    assert_eq!(handler.fetch("widget", &[]).unwrap().records.len(), 1);

    // Deleting the same id again finds nothing
    let removed = handler
        .remove("widget", &params(&[("id", id.as_str())]))
        .unwrap();
    assert_eq!(removed.status_code, 2);
    assert_eq!(removed.items_deleted, 0);
}

// =============================================================================
// Maintenance
// =============================================================================

#[test]
fn test_probe_reports_readiness() {
    assert_eq!(connected().probe().status_code, 0);
    assert_eq!(connected().probe().status_text, "OK");
    assert_eq!(down().probe().status_code, 1);
    assert_eq!(down().probe().status_text, "Database connection failed");
}

#[test]
fn test_reseed_always_yields_exactly_the_seed_count() {
    let handler = connected();

    handler.reseed().unwrap();
    assert_eq!(handler.fetch("test", &[]).unwrap().records.len(), 10);

    // Reseeding replaces, never accumulates
    handler.reseed().unwrap();
    assert_eq!(handler.fetch("test", &[]).unwrap().records.len(), 10);
}

#[test]
fn test_reseed_leaves_other_namespaces_alone() {
    let handler = connected();
    handler.create("widget", json!({"keep": true})).unwrap();

    handler.reseed().unwrap();
    handler.reseed().unwrap();

    assert_eq!(handler.fetch("widget", &[]).unwrap().records.len(), 1);
}

#[test]
fn test_reseeded_records_are_synthetic_persons() {
    let handler = connected();
    handler.reseed().unwrap();

    for record in handler.fetch("test", &[]).unwrap().records {
        assert_eq!(record.object_type, "test");
        assert!(record.data["name"].is_string());
        let age = record.data["age"].as_i64().unwrap();
        assert!((15..75).contains(&age));
        assert!(record.data["profession"].is_string());
    }
}

#[test]
fn test_clear_removes_every_namespace_and_is_idempotent() {
    let handler = connected();
    handler.create("widget", json!({})).unwrap();
    handler.create("gadget", json!({})).unwrap();
    handler.reseed().unwrap();

    assert_eq!(handler.clear().unwrap().status_code, 0);
    assert_eq!(handler.fetch("widget", &[]).unwrap().status_code, 2);
    assert_eq!(handler.fetch("test", &[]).unwrap().status_code, 2);

    // Second clear is a no-op that still reports success
    assert_eq!(handler.clear().unwrap().status_code, 0);
}
