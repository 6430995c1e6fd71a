//! Structured filter documents.
//!
//! A filter is the unit the store understands: all present clauses must
//! hold (AND). The disjunction produced by value coercion lives inside a
//! single clause as `ValueMatch::AnyOf`.

use serde_json::Value;

use crate::store::Record;

/// Match condition for a single data field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueMatch {
    /// Field must equal this value exactly.
    Exact(Value),

    /// Field must equal any of these values. Carries the typed and the
    /// string representation of coerced search values.
    AnyOf(Vec<Value>),
}

impl ValueMatch {
    /// Check a candidate field value against this condition.
    pub fn matches(&self, candidate: &Value) -> bool {
        match self {
            ValueMatch::Exact(expected) => candidate == expected,
            ValueMatch::AnyOf(options) => options.iter().any(|option| candidate == option),
        }
    }
}

/// A filter over the record collection. Absent clauses match everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Restrict to one objectType namespace.
    pub object_type: Option<String>,

    /// Restrict to one store-assigned id.
    pub id: Option<String>,

    /// Restrict on a single top-level data field.
    pub data_field: Option<(String, ValueMatch)>,
}

impl RecordFilter {
    /// Match every record of every type.
    pub fn everything() -> Self {
        Self::default()
    }

    /// Match all records of one objectType.
    pub fn by_type(object_type: impl Into<String>) -> Self {
        Self {
            object_type: Some(object_type.into()),
            ..Self::default()
        }
    }

    /// Additionally require a specific record id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Additionally require a data field to satisfy a match condition.
    pub fn with_field(mut self, field: impl Into<String>, condition: ValueMatch) -> Self {
        self.data_field = Some((field.into(), condition));
        self
    }

    /// Check whether a record satisfies every present clause.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(object_type) = &self.object_type {
            if record.object_type != *object_type {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if record.id.as_str() != id {
                return false;
            }
        }

        if let Some((field, condition)) = &self.data_field {
            // A record without the field never matches
            match record.data.get(field) {
                Some(value) => {
                    if !condition.matches(value) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}
