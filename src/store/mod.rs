//! Counter store — the single boundary to the backing key-value store.
//!
//! The store is an external collaborator: this crate consumes its atomic
//! conditional-update contract and never reimplements persistence. The one
//! requirement is that precondition evaluation and the mutation happen as a
//! single atomic unit — a read-then-check-then-write sequence in application
//! code would reintroduce the race the precondition exists to prevent.

use std::error::Error;
use std::fmt;

use crate::mutation::Precondition;

pub mod adapter;
mod memory;

pub use memory::MemoryStore;

/// A key-value store supporting atomic conditional counter updates.
///
/// One call per mutation: the store evaluates the precondition (if any)
/// against the current value, applies `current + delta`, and optionally
/// returns the post-mutation value — all atomically with respect to
/// concurrent calls on the same key. A missing record counts as zero
/// (upsert semantics).
pub trait CounterStore {
    /// Execute one atomic conditional update.
    ///
    /// Returns `Ok(Some(new_value))` when `return_new_value` was requested,
    /// `Ok(None)` otherwise. A failed precondition is
    /// `Err(StoreError::ConditionFailed)` and leaves the record untouched.
    fn update_counter(
        &self,
        key: &str,
        delta: i64,
        precondition: Option<Precondition>,
        return_new_value: bool,
    ) -> Result<Option<u64>, StoreError>;
}

/// Raw store-level failure, classified by the adapter into an `Outcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The precondition did not hold at the moment of the update.
    ConditionFailed,
    /// The store rejected the caller's credentials.
    Denied(String),
    /// The store was unreachable, timed out, or failed internally.
    /// Cancellation of an in-flight call lands here too.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ConditionFailed => write!(f, "condition failed"),
            StoreError::Denied(msg) => write!(f, "store denied the request: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl Error for StoreError {}
