//! # HTTP API layer
//!
//! Per-verb orchestration over the store plus the envelope types the wire
//! carries. Transport status is 200 for every envelope; consumers read the
//! application status from the body.

pub mod errors;
pub mod fixtures;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use fixtures::SeedCatalog;
pub use handler::ApiHandler;
pub use response::ApiStatus;
pub use server::ApiServer;
