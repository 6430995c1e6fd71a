//! # HTTP server
//!
//! Axum router over the envelope handlers, with a permissive CORS front.
//! Route functions stay thin: extract, delegate to the handler, wrap in
//! Json. The query string is extracted as an ordered list of pairs so
//! first-parameter-wins search is deterministic at this boundary.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::logging::Logger;
use crate::store::DocumentStore;

use super::errors::{ApiError, ApiResult};
use super::handler::ApiHandler;
use super::response::{
    CreateEnvelope, DeleteEnvelope, FetchEnvelope, StatusEnvelope, UpdateEnvelope,
};

/// HTTP server wrapping an `ApiHandler`.
pub struct ApiServer<S> {
    handler: Arc<ApiHandler<S>>,
}

/// Shared state type
type ServerState<S> = Arc<ApiHandler<S>>;

impl<S: DocumentStore + 'static> ApiServer<S> {
    pub fn new(handler: ApiHandler<S>) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the Axum router.
    pub fn router(self) -> Router {
        // The consumers are browser frontends on arbitrary origins
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/maintenance/status", get(probe_route))
            .route("/maintenance/generatetestdata", get(reseed_route))
            .route("/maintenance/cleardatabase", get(clear_route))
            .route("/:object_type", get(fetch_route))
            .route("/:object_type", post(create_route))
            .route("/:object_type", patch(update_route))
            .route("/:object_type", delete(delete_route))
            .layer(cors)
            .with_state(self.handler)
    }

    /// Bind and serve forever.
    pub async fn serve(self, addr: &str) -> std::io::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        Logger::info("HTTP_LISTENING", &[("addr", addr)]);
        axum::serve(listener, self.router()).await
    }
}

/// Interpret raw request bytes as JSON, regardless of Content-Type.
///
/// An absent body reads as an empty object; anything else must parse or
/// the request is answered with the code-5 envelope.
fn parse_json_body(bytes: &[u8]) -> ApiResult<Value> {
    if bytes.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|err| ApiError::MalformedBody(err.to_string()))
}

async fn probe_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
) -> Json<StatusEnvelope> {
    Json(handler.probe())
}

async fn reseed_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
) -> ApiResult<Json<StatusEnvelope>> {
    Ok(Json(handler.reseed()?))
}

async fn clear_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
) -> ApiResult<Json<StatusEnvelope>> {
    Ok(Json(handler.clear()?))
}

async fn fetch_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(object_type): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> ApiResult<Json<FetchEnvelope>> {
    // Bodies are parsed on every verb, even where the verb ignores them
    parse_json_body(&body)?;
    Ok(Json(handler.fetch(&object_type, &params)?))
}

async fn create_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(object_type): Path<String>,
    body: Bytes,
) -> ApiResult<Json<CreateEnvelope>> {
    let body = parse_json_body(&body)?;
    Ok(Json(handler.create(&object_type, body)?))
}

async fn update_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(object_type): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> ApiResult<Json<UpdateEnvelope>> {
    // Parse precedes validation: a malformed body is code 5 on every verb
    let body = parse_json_body(&body)?;
    Ok(Json(handler.update(&object_type, &params, &body)?))
}

async fn delete_route<S: DocumentStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(object_type): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> ApiResult<Json<DeleteEnvelope>> {
    parse_json_body(&body)?;
    Ok(Json(handler.remove(&object_type, &params)?))
}
