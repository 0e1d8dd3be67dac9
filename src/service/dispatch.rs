//! Operation registry and dispatch.
//!
//! `Service<S>` holds a counter store and a set of named operation handlers.
//! Each handler receives a `Context<S>` and returns a complete
//! `OperationResponse` or a pre-store `ServiceError`.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ServiceError;
use crate::transform::OperationResponse;

use super::context::Context;
use super::identity::Identity;

type Handler<S> =
    Box<dyn Fn(&Context<S>) -> Result<OperationResponse, ServiceError> + Send + Sync>;

/// A service that routes inventory operations to handler functions.
///
/// Generic over `S`, the counter store type. Handlers receive a `Context<S>`
/// and can access the store via `ctx.store()`. Holds no mutable state of its
/// own; all state lives in the store.
pub struct Service<S> {
    store: S,
    operations: HashMap<String, Handler<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given store and no operations.
    pub fn new(store: S) -> Self {
        Self {
            store,
            operations: HashMap::new(),
        }
    }

    /// Register an operation handler.
    ///
    /// Uses builder pattern — returns `self` for chaining.
    pub fn operation<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<OperationResponse, ServiceError> + Send + Sync + 'static,
    {
        self.operations.insert(name.to_string(), Box::new(handler));
        self
    }

    /// Dispatch an operation by name.
    ///
    /// Builds a `Context` from the input and identity, looks up the handler,
    /// and runs it. Errors returned here never involved a store call.
    pub fn dispatch(
        &self,
        operation: &str,
        input: Value,
        identity: Identity,
    ) -> Result<OperationResponse, ServiceError> {
        let handler = self
            .operations
            .get(operation)
            .ok_or_else(|| ServiceError::UnknownOperation(operation.to_string()))?;

        tracing::debug!(operation, "dispatching");
        let ctx = Context::new(operation.to_string(), input, identity, &self.store);
        handler(&ctx)
    }

    /// Handle an `OperationRequest`, always producing a response.
    ///
    /// Pre-store failures are rendered through `ServiceError::to_response`,
    /// so every input yields a well-formed, status-classified payload.
    pub fn handle_request(&self, request: &OperationRequest) -> OperationResponse {
        let identity = Identity::from_map(request.identity_variables.clone());
        self.dispatch(&request.operation, request.input.clone(), identity)
            .unwrap_or_else(|e| e.to_response())
    }

    /// List registered operation names.
    pub fn operations(&self) -> Vec<&str> {
        self.operations.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the counter store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// An inbound operation request, transport-independent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OperationRequest {
    /// Operation name (from the URL path or queue message).
    pub operation: String,
    /// JSON input payload.
    pub input: Value,
    /// Caller identity variables (already validated upstream).
    #[serde(default)]
    pub identity_variables: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn caller() -> Identity {
        let mut identity = Identity::new();
        identity.set("x-caller-id", "ops");
        identity
    }

    fn test_service() -> Service<()> {
        Service::new(())
    }

    #[test]
    fn dispatch_returns_handler_response() {
        let service = test_service().operation("ping", |_ctx| {
            Ok(OperationResponse {
                status: 200,
                body: json!({ "pong": true }),
            })
        });
        let resp = service.dispatch("ping", json!({}), caller()).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, json!({ "pong": true }));
    }

    #[test]
    fn unknown_operation() {
        let service = test_service();
        let result = service.dispatch("restock", json!({}), caller());
        assert!(matches!(
            result,
            Err(ServiceError::UnknownOperation(ref s)) if s == "restock"
        ));
    }

    #[test]
    fn handler_error_propagates() {
        let service = test_service()
            .operation("fail", |_ctx| Err(ServiceError::MalformedRequest("no".into())));
        let result = service.dispatch("fail", json!({}), caller());
        assert!(matches!(result, Err(ServiceError::MalformedRequest(_))));
    }

    #[test]
    fn context_requires_caller() {
        let service = test_service().operation("whoami", |ctx| {
            let caller = ctx.caller()?;
            Ok(OperationResponse {
                status: 200,
                body: json!({ "caller": caller }),
            })
        });

        let result = service.dispatch("whoami", json!({}), Identity::new());
        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));

        let resp = service.dispatch("whoami", json!({}), caller()).unwrap();
        assert_eq!(resp.body, json!({ "caller": "ops" }));
    }

    #[test]
    fn operations_list() {
        let service = test_service()
            .operation("add", |_| {
                Ok(OperationResponse { status: 200, body: json!({}) })
            })
            .operation("remove", |_| {
                Ok(OperationResponse { status: 200, body: json!({}) })
            });
        let mut ops = service.operations();
        ops.sort();
        assert_eq!(ops, vec!["add", "remove"]);
    }

    #[test]
    fn handle_request_maps_errors_to_payloads() {
        let service = test_service();
        let resp = service.handle_request(&OperationRequest {
            operation: "restock".to_string(),
            input: json!({}),
            identity_variables: HashMap::new(),
        });
        assert_eq!(resp.status, 404);
        assert!(resp.body.get("clientError").is_some());
    }
}
