//! Environment-driven configuration.
//!
//! The service reads everything it needs from the process environment, the
//! way its deployments have always been configured: `PORT` for the
//! listener, `DB_*` variables for the store. Missing or unparseable values
//! fall back to defaults; startup never fails on configuration alone.

use std::env;

use serde::{Deserialize, Serialize};

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port the HTTP listener binds (default: 3000, env: `PORT`).
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub store: StoreConfig,
}

/// Connection settings for the document store collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Env: `DB_USERNAME`.
    #[serde(default)]
    pub username: String,

    /// Env: `DB_PASS`. Never serialized, never logged.
    #[serde(default, skip_serializing)]
    pub password: String,

    /// Env: `DB_HOST`.
    #[serde(default = "default_host")]
    pub host: String,

    /// Env: `DB_NAME`.
    #[serde(default = "default_database")]
    pub database: String,

    /// Env: `DB_COLLECTION`.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_database() -> String {
    "docgate".to_string()
}

fn default_collection() -> String {
    "records".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            host: default_host(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_port);

        Self {
            port,
            store: StoreConfig::from_env(),
        }
    }

    /// The socket address string for the listener.
    pub fn socket_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            username: env::var("DB_USERNAME").unwrap_or_default(),
            password: env::var("DB_PASS").unwrap_or_default(),
            host: env::var("DB_HOST").unwrap_or_else(|_| default_host()),
            database: env::var("DB_NAME").unwrap_or_else(|_| default_database()),
            collection: env::var("DB_COLLECTION").unwrap_or_else(|_| default_collection()),
        }
    }

    /// Credential-free rendering for log lines.
    pub fn endpoint(&self) -> String {
        format!("{}/{}/{}", self.host, self.database, self.collection)
    }
}
