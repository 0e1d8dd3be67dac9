//! Mutation descriptors and their outcomes.
//!
//! A `Mutation` is the normalized internal form of one atomic store operation.
//! It is built per-request by the transform layer, executed once by the store
//! adapter, and discarded after the response is produced.

/// Normalized description of a single atomic store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// Item key the mutation targets.
    pub key: String,
    /// Arithmetic delta applied to the stored quantity.
    pub delta: i64,
    /// Predicate that must hold, atomically with the update, for the
    /// mutation to be applied at all.
    pub precondition: Option<Precondition>,
    /// Whether the post-mutation quantity should be returned as part of
    /// the same atomic call.
    pub return_new_value: bool,
}

/// A predicate evaluated by the store atomically with the mutation.
///
/// If the predicate does not hold against the current stored value at the
/// moment of the update, the mutation is aborted without side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The current stored quantity must be strictly positive.
    QuantityPositive,
}

/// Tagged result of executing a mutation descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation was applied. Carries the post-mutation quantity when
    /// the descriptor asked for it, `None` otherwise.
    Applied(Option<u64>),
    /// The precondition did not hold; nothing was mutated.
    PreconditionFailed,
    /// The backing store was unavailable, denied the call, or timed out.
    BackendError(String),
}
