//! Context passed to operation handlers.
//!
//! Carries the raw request input, the caller identity, and a reference to
//! the counter store. Handlers access everything they need through the
//! context.

use serde_json::Value;

use crate::error::ServiceError;

use super::identity::Identity;

/// The context passed to every operation handler.
///
/// Generic over `S`, the counter store type, so handlers work against
/// whatever store implementation the service is configured with.
pub struct Context<'a, S> {
    /// The operation name being handled.
    operation: String,
    /// Raw JSON input from the request.
    input: Value,
    /// Caller identity variables.
    identity: Identity,
    /// Reference to the counter store.
    store: &'a S,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(operation: String, input: Value, identity: Identity, store: &'a S) -> Self {
        Self {
            operation,
            input,
            identity,
            store,
        }
    }

    /// Get the raw JSON input.
    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    /// Get the operation name.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Get the caller identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Get the caller ID, or `Unauthorized` if the request carries none.
    pub fn caller(&self) -> Result<&str, ServiceError> {
        self.identity
            .caller_id()
            .ok_or_else(|| ServiceError::Unauthorized("missing caller identity".into()))
    }

    /// Get a reference to the counter store.
    pub fn store(&self) -> &S {
        self.store
    }
}
