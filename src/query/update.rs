//! Structured update documents.
//!
//! Field names are relative to a record's `data` map; the store never
//! receives instructions to touch `objectType` or the record id.

use serde_json::{Map, Value};

/// Set-style update: each entry overwrites one data field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDoc {
    pub fields: Map<String, Value>,
}

impl UpdateDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a field write.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Apply to a record's data in place; reports whether anything changed.
    ///
    /// Data that is not an object is replaced wholesale by the update's
    /// fields, the closest equivalent of setting paths below a scalar.
    pub fn apply(&self, data: &mut Value) -> bool {
        if self.fields.is_empty() {
            return false;
        }

        if !data.is_object() {
            *data = Value::Object(self.fields.clone());
            return true;
        }

        let mut changed = false;
        if let Some(object) = data.as_object_mut() {
            for (field, value) in &self.fields {
                if object.get(field) != Some(value) {
                    object.insert(field.clone(), value.clone());
                    changed = true;
                }
            }
        }
        changed
    }
}
