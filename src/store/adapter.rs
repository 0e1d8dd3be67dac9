//! Adapter — executes a mutation descriptor and normalizes the result.
//!
//! The sole caller of [`CounterStore::update_counter`]. Classifies raw store
//! results into the tagged [`Outcome`] both operations share: success,
//! precondition failed, or backend error. No retries here — retry policy,
//! if any, belongs to the caller.

use crate::mutation::{Mutation, Outcome};

use super::{CounterStore, StoreError};

/// Execute a mutation as one atomic store call and classify the result.
///
/// A cancelled or timed-out store call surfaces as `BackendError`; the
/// adapter never assumes success or failure on its own.
pub fn apply<S: CounterStore>(store: &S, mutation: &Mutation) -> Outcome {
    let result = store.update_counter(
        &mutation.key,
        mutation.delta,
        mutation.precondition,
        mutation.return_new_value,
    );

    match result {
        Ok(new_value) => Outcome::Applied(new_value),
        Err(StoreError::ConditionFailed) => Outcome::PreconditionFailed,
        Err(err) => {
            tracing::warn!(key = %mutation.key, error = %err, "store update failed");
            Outcome::BackendError(err.to_string())
        }
    }
}
