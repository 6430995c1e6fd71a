//! Request-to-document translation.
//!
//! Maps a validated path segment plus an ordered query-string into the
//! filter the store should run, and a PATCH body into an update document.

use serde_json::Value;

use crate::validate::{validate, ParamKind};

use super::coerce;
use super::filter::RecordFilter;
use super::update::UpdateDoc;

/// Result of planning a read-side lookup.
#[derive(Debug, Clone)]
pub enum Lookup {
    /// Run this filter against the store.
    Filter(RecordFilter),

    /// An id was supplied but is not a well-formed store identifier; no
    /// record can exist under it, so the store is not consulted.
    UnmatchableId,
}

fn first_named<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Plan the lookup for a GET request.
///
/// An `id` parameter anywhere in the query string takes precedence. With no
/// id, the first remaining parameter becomes a coerced field search; any
/// further parameters are silently ignored (first-param-wins, kept for
/// compatibility with existing clients). An empty query string selects the
/// whole namespace.
pub fn lookup(object_type: &str, params: &[(String, String)]) -> Lookup {
    if let Some(id) = first_named(params, "id") {
        return if validate(id, ParamKind::Id) {
            Lookup::Filter(RecordFilter::by_type(object_type).with_id(id))
        } else {
            Lookup::UnmatchableId
        };
    }

    match params.first() {
        Some((field, value)) => Lookup::Filter(
            RecordFilter::by_type(object_type).with_field(field, coerce::search_match(value)),
        ),
        None => Lookup::Filter(RecordFilter::by_type(object_type)),
    }
}

/// Extract the id that PATCH and DELETE require.
///
/// Returns the first `id` parameter if it is a well-formed store
/// identifier; a missing or malformed id yields None.
pub fn required_id<'a>(params: &'a [(String, String)]) -> Option<&'a str> {
    first_named(params, "id").filter(|id| validate(id, ParamKind::Id))
}

/// Build the update document for a PATCH body.
///
/// One entry per body key, value coerced; the identity keys `objectType`
/// and `id` are dropped so updates only ever target data fields. A body
/// that is not a JSON object carries no field writes.
pub fn update_document(body: &Value) -> UpdateDoc {
    let mut doc = UpdateDoc::new();

    if let Some(object) = body.as_object() {
        for (key, value) in object {
            if key == "objectType" || key == "id" {
                continue;
            }
            doc.set(key.clone(), coerce::coerce_update(value));
        }
    }

    doc
}
