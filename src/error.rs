//! Error types for operation dispatch.

use std::error::Error;
use std::fmt;

use serde_json::json;

use crate::transform::OperationResponse;

/// Error type for request handling before a store call is made.
///
/// Outcomes of the store call itself (`PreconditionFailed`, `BackendError`)
/// are not errors at this level — they are rendered into responses by the
/// transform layer. `ServiceError` covers only the failures that keep a
/// request from ever reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No operation registered under this name.
    UnknownOperation(String),
    /// Input missing or invalid a required field; never reaches the store.
    MalformedRequest(String),
    /// No pre-validated caller identity on the request.
    Unauthorized(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::UnknownOperation(name) => write!(f, "unknown operation: {}", name),
            ServiceError::MalformedRequest(msg) => write!(f, "malformed request: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
        }
    }
}

impl Error for ServiceError {}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::UnknownOperation(_) => 404,
            ServiceError::MalformedRequest(_) => 400,
            ServiceError::Unauthorized(_) => 401,
        }
    }

    /// Render this error as a well-formed response payload.
    ///
    /// Client-class statuses produce a `clientError` body, server-class
    /// statuses a `serverError` body, so every failure path yields an
    /// explicit, unambiguous payload.
    pub fn to_response(&self) -> OperationResponse {
        let status = self.status_code();
        let body = if status >= 500 {
            json!({ "serverError": self.to_string() })
        } else {
            json!({ "clientError": self.to_string() })
        };
        OperationResponse { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ServiceError::UnknownOperation("x".into()).status_code(), 404);
        assert_eq!(ServiceError::MalformedRequest("x".into()).status_code(), 400);
        assert_eq!(ServiceError::Unauthorized("x".into()).status_code(), 401);
    }

    #[test]
    fn client_errors_render_client_body() {
        let resp = ServiceError::MalformedRequest("missing 'id'".into()).to_response();
        assert_eq!(resp.status, 400);
        assert_eq!(
            resp.body,
            json!({ "clientError": "malformed request: missing 'id'" })
        );
    }
}
