//! Transform layer — maps wire-facing requests and store outcomes.
//!
//! Two directions, both pure:
//!
//! - `build_decrement` / `build_increment`: JSON request body → `Mutation`
//!   descriptor.
//! - `render_response`: `Outcome` → status-coded `OperationResponse`.
//!
//! Nothing here touches the store; the descriptors produced are executed by
//! [`crate::store::adapter::apply`].

use serde_json::{json, Value};

use crate::error::ServiceError;
use crate::mutation::{Mutation, Outcome, Precondition};

/// Which of the two inventory operations a response is being rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Increment — `POST /add`.
    Add,
    /// Conditional decrement — `POST /remove`.
    Remove,
}

/// A response ready for the transport: HTTP-style status plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OperationResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body (operation result or error payload).
    pub body: Value,
}

/// Build the descriptor for a conditional decrement.
///
/// Delta −1, guarded by `Quantity > 0`. The post-mutation value is not
/// requested; a successful remove returns an empty body.
pub fn build_decrement(input: &Value) -> Result<Mutation, ServiceError> {
    let key = extract_id(input)?;
    Ok(Mutation {
        key,
        delta: -1,
        precondition: Some(Precondition::QuantityPositive),
        return_new_value: false,
    })
}

/// Build the descriptor for an unconditional increment.
///
/// Delta +1, upsert semantics (a missing record counts as zero), and the
/// post-mutation value is requested so the response can echo the new stock.
pub fn build_increment(input: &Value) -> Result<Mutation, ServiceError> {
    let key = extract_id(input)?;
    Ok(Mutation {
        key,
        delta: 1,
        precondition: None,
        return_new_value: true,
    })
}

/// Render a store outcome as a client-facing response.
///
/// Pure: the same operation and outcome always produce the same payload.
pub fn render_response(operation: Operation, outcome: &Outcome) -> OperationResponse {
    match outcome {
        Outcome::Applied(new_value) => match operation {
            Operation::Add => OperationResponse {
                status: 200,
                body: match new_value {
                    Some(v) => json!({ "currentStock": v }),
                    None => json!({}),
                },
            },
            Operation::Remove => OperationResponse {
                status: 200,
                body: json!({}),
            },
        },
        Outcome::PreconditionFailed => OperationResponse {
            status: 422,
            body: json!({ "clientError": "insufficient stock" }),
        },
        Outcome::BackendError(details) => OperationResponse {
            status: 500,
            body: json!({ "serverError": details }),
        },
    }
}

/// Extract the item key from a request body.
///
/// The store rejects empty partition keys, so an empty `id` is refused here
/// alongside absent or non-string ones.
fn extract_id(input: &Value) -> Result<String, ServiceError> {
    match input.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::String(_)) => Err(ServiceError::MalformedRequest(
            "'id' must be a non-empty string".into(),
        )),
        Some(_) => Err(ServiceError::MalformedRequest("'id' must be a string".into())),
        None => Err(ServiceError::MalformedRequest(
            "missing required field 'id'".into(),
        )),
    }
}
