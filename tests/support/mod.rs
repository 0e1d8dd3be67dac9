//! Shared test doubles and helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use stockcount::service::Identity;
use stockcount::store::{CounterStore, MemoryStore, StoreError};
use stockcount::Precondition;

/// An identity with a caller ID, as the upstream authorizer would forward.
pub fn caller() -> Identity {
    let mut identity = Identity::new();
    identity.set("x-caller-id", "ops-team");
    identity
}

/// Wraps a `MemoryStore` and counts every store call.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CounterStore for CountingStore {
    fn update_counter(
        &self,
        key: &str,
        delta: i64,
        precondition: Option<Precondition>,
        return_new_value: bool,
    ) -> Result<Option<u64>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .update_counter(key, delta, precondition, return_new_value)
    }
}

/// A store whose backend is always down.
pub struct UnavailableStore;

impl CounterStore for UnavailableStore {
    fn update_counter(
        &self,
        _key: &str,
        _delta: i64,
        _precondition: Option<Precondition>,
        _return_new_value: bool,
    ) -> Result<Option<u64>, StoreError> {
        Err(StoreError::Unavailable("connection timed out".into()))
    }
}
