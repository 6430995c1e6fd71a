//! Record model and identifier generation.

use std::fmt;

use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The unit of storage: namespace tag, store-assigned id, open data map.
///
/// `objectType` and `id` are fixed at creation; only `data` fields change
/// over a record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(rename = "objectType")]
    pub object_type: String,

    pub data: Value,
}

/// An insert payload, before the store has assigned an id.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub object_type: String,
    pub data: Value,
}

impl NewRecord {
    pub fn new(object_type: impl Into<String>, data: Value) -> Self {
        Self {
            object_type: object_type.into(),
            data,
        }
    }
}

/// Store-assigned record identifier: 24 characters of lowercase hex.
///
/// Four big-endian seconds-since-epoch bytes followed by eight random
/// bytes. Creation order is therefore coarsely reflected in id order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Mint a fresh identifier.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        let seconds = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..]);

        let mut hex = String::with_capacity(24);
        for byte in bytes {
            hex.push_str(&format!("{:02x}", byte));
        }
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
