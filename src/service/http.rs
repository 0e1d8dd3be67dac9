//! HTTP transport — maps HTTP requests to operation dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /:operation` — dispatch an operation. Body = JSON input, request
//!   headers → caller identity.
//! - `GET /health` — health check returning `{ "ok": true, "operations": [...] }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stockcount::service;
//!
//! let svc = Arc::new(service::in_memory());
//!
//! // Get the router to compose with other axum routes
//! let app = service::router(svc.clone());
//!
//! // Or serve directly
//! service::serve(svc, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::store::CounterStore;
use crate::transform::OperationResponse;

use super::dispatch::Service;
use super::identity::Identity;

/// Build an axum `Router` that dispatches operations via the given service.
pub fn router<S>(service: Arc<Service<S>>) -> Router
where
    S: CounterStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/:operation", axum::routing::post(operation_handler))
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S>(service: Arc<Service<S>>, addr: &str) -> Result<(), std::io::Error>
where
    S: CounterStore + Send + Sync + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await
}

/// `GET /health` — returns `{ "ok": true, "operations": [...] }`.
async fn health_handler<S>(State(service): State<Arc<Service<S>>>) -> impl IntoResponse
where
    S: CounterStore + Send + Sync + 'static,
{
    let operations: Vec<&str> = service.operations();
    Json(json!({ "ok": true, "operations": operations }))
}

/// `POST /:operation` — dispatch with JSON body and headers as identity.
async fn operation_handler<S>(
    State(service): State<Arc<Service<S>>>,
    Path(operation): Path<String>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> impl IntoResponse
where
    S: CounterStore + Send + Sync + 'static,
{
    let identity = identity_from_headers(&headers);
    let response = service
        .dispatch(&operation, input, identity)
        .unwrap_or_else(|e| e.to_response());
    into_axum(response)
}

fn into_axum(response: OperationResponse) -> axum::response::Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}

/// Extract caller identity variables from HTTP headers.
///
/// All headers are lowercased and included as identity variables; the
/// gateway in front of this service is expected to have validated them.
fn identity_from_headers(headers: &HeaderMap) -> Identity {
    let mut vars = std::collections::HashMap::new();
    for (name, value) in headers.iter() {
        if let Ok(v) = value.to_str() {
            vars.insert(name.as_str().to_string(), v.to_string());
        }
    }
    Identity::from_map(vars)
}
