//! Response envelopes and the application status taxonomy.

use serde::Serialize;

use crate::store::{Record, RecordId};

/// Application-level status carried in every envelope.
///
/// The numeric codes are a published contract and never change meaning:
/// 0 OK, 1 store down, 2 not found, 3 invalid objectType, 4 missing or
/// invalid id, 5 malformed JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Ok,
    StoreDown,
    NotFound,
    InvalidObjectType,
    InvalidId,
    MalformedBody,
}

impl ApiStatus {
    pub fn code(self) -> u8 {
        match self {
            ApiStatus::Ok => 0,
            ApiStatus::StoreDown => 1,
            ApiStatus::NotFound => 2,
            ApiStatus::InvalidObjectType => 3,
            ApiStatus::InvalidId => 4,
            ApiStatus::MalformedBody => 5,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::StoreDown => "Database connection failed",
            ApiStatus::NotFound => "No match found in database",
            ApiStatus::InvalidObjectType => {
                "Invalid object type - allowed characters are: A-Z, a-z, 0-9, - and _"
            }
            ApiStatus::InvalidId => {
                "Please provide a valid id in the querystring, consisting of 24 characters"
            }
            ApiStatus::MalformedBody => {
                "The API received invalid JSON in the request body. Please check your JSON syntax"
            }
        }
    }
}

/// Bare status envelope, used by the maintenance endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEnvelope {
    pub status_code: u8,
    pub status_text: &'static str,
}

impl StatusEnvelope {
    pub fn of(status: ApiStatus) -> Self {
        Self {
            status_code: status.code(),
            status_text: status.text(),
        }
    }
}

/// GET envelope: the matching records plus status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchEnvelope {
    pub records: Vec<Record>,
    pub status_code: u8,
    pub status_text: &'static str,
}

impl FetchEnvelope {
    pub fn ok(records: Vec<Record>) -> Self {
        Self {
            records,
            status_code: ApiStatus::Ok.code(),
            status_text: ApiStatus::Ok.text(),
        }
    }

    pub fn failed(status: ApiStatus) -> Self {
        Self {
            records: Vec::new(),
            status_code: status.code(),
            status_text: status.text(),
        }
    }
}

/// POST envelope: the store-assigned id of the new record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvelope {
    #[serde(rename = "_id")]
    pub id: Option<RecordId>,
    pub status_code: u8,
    pub status_text: &'static str,
}

impl CreateEnvelope {
    pub fn ok(id: RecordId) -> Self {
        Self {
            id: Some(id),
            status_code: ApiStatus::Ok.code(),
            status_text: ApiStatus::Ok.text(),
        }
    }

    pub fn failed(status: ApiStatus) -> Self {
        Self {
            id: None,
            status_code: status.code(),
            status_text: status.text(),
        }
    }
}

/// PATCH envelope: how many records actually changed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvelope {
    pub items_modified: u64,
    pub status_code: u8,
    pub status_text: &'static str,
}

impl UpdateEnvelope {
    pub fn ok(items_modified: u64) -> Self {
        Self {
            items_modified,
            status_code: ApiStatus::Ok.code(),
            status_text: ApiStatus::Ok.text(),
        }
    }

    pub fn failed(status: ApiStatus) -> Self {
        Self {
            items_modified: 0,
            status_code: status.code(),
            status_text: status.text(),
        }
    }
}

/// DELETE envelope: how many records were removed (0 or 1).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEnvelope {
    pub items_deleted: u64,
    pub status_code: u8,
    pub status_text: &'static str,
}

impl DeleteEnvelope {
    pub fn ok(items_deleted: u64) -> Self {
        Self {
            items_deleted,
            status_code: ApiStatus::Ok.code(),
            status_text: ApiStatus::Ok.text(),
        }
    }

    pub fn failed(status: ApiStatus) -> Self {
        Self {
            items_deleted: 0,
            status_code: status.code(),
            status_text: status.text(),
        }
    }
}
