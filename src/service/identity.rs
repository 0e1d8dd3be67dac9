//! Caller identity from the request context.

use std::collections::HashMap;

/// Pre-validated caller identity variables from the incoming request.
///
/// Authorization is an external collaborator: by the time a request reaches
/// an operation handler, the gateway in front of this service has already
/// verified the caller. What arrives here are the identity variables it
/// forwards, e.g.:
///
/// ```json
/// {
///   "x-caller-id": "ops-team",
///   "x-caller-role": "writer"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Identity {
    variables: HashMap<String, String>,
}

impl Identity {
    /// Create an empty identity (no variables).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an identity from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Get the caller ID (`x-caller-id`).
    pub fn caller_id(&self) -> Option<&str> {
        self.get("x-caller-id")
    }

    /// Get an identity variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set an identity variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Check if an identity variable exists.
    pub fn has(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}
