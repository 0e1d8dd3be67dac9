//! service — operation registry and dispatch for the inventory counter.
//!
//! A [`Service`] holds the counter store and a set of named operation
//! handlers. Each handler receives a [`Context`] with the request input, the
//! caller identity, and the store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use stockcount::service::{self, Identity};
//!
//! let service = Arc::new(service::in_memory());
//!
//! // Direct dispatch
//! let mut identity = Identity::new();
//! identity.set("x-caller-id", "ops");
//! let resp = service.dispatch("add", json!({ "id": "widget" }), identity);
//!
//! // HTTP transport (requires "http" feature)
//! // service::serve(service, "0.0.0.0:3000").await?;
//! ```

mod context;
mod dispatch;
mod identity;

pub use context::Context;
pub use dispatch::{OperationRequest, Service};
pub use identity::Identity;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

use crate::handlers;
use crate::store::{CounterStore, MemoryStore};

/// Build the inventory service over an in-memory store.
pub fn in_memory() -> Service<MemoryStore> {
    with_store(MemoryStore::new())
}

/// Build the inventory service over any counter store.
///
/// Registers both operations: `add` (unconditional increment) and `remove`
/// (decrement guarded by `Quantity > 0`).
pub fn with_store<S>(store: S) -> Service<S>
where
    S: CounterStore + Send + Sync + 'static,
{
    Service::new(store)
        .operation(handlers::add_stock::OPERATION, handlers::add_stock::handle)
        .operation(
            handlers::remove_stock::OPERATION,
            handlers::remove_stock::handle,
        )
}
