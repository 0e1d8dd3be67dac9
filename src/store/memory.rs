//! In-memory counter store.
//!
//! Backs the service in tests and single-process deployments. Atomicity of
//! the conditional update comes from holding the map lock across both the
//! predicate check and the mutation — the same guarantee a managed store
//! provides natively for its conditional-update primitive.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::mutation::Precondition;

use super::{CounterStore, StoreError};

/// Mutexed map of item key → quantity.
///
/// Clone is cheap (shared `Arc`); clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, u64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current quantity for a key, `None` if the record does not exist.
    pub fn quantity(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let items = self
            .items
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        Ok(items.get(key).copied())
    }
}

impl CounterStore for MemoryStore {
    fn update_counter(
        &self,
        key: &str,
        delta: i64,
        precondition: Option<Precondition>,
        return_new_value: bool,
    ) -> Result<Option<u64>, StoreError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        let current = items.get(key).copied().unwrap_or(0);

        match precondition {
            Some(Precondition::QuantityPositive) if current == 0 => {
                return Err(StoreError::ConditionFailed);
            }
            _ => {}
        }

        // Quantity is unsigned; a delta the current value cannot absorb can
        // never be applied.
        let next = current
            .checked_add_signed(delta)
            .ok_or(StoreError::ConditionFailed)?;

        items.insert(key.to_string(), next);
        Ok(return_new_value.then_some(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_from_absent() {
        let store = MemoryStore::new();
        let value = store.update_counter("widget", 1, None, true).unwrap();
        assert_eq!(value, Some(1));
        assert_eq!(store.quantity("widget").unwrap(), Some(1));
    }

    #[test]
    fn return_value_only_when_requested() {
        let store = MemoryStore::new();
        let value = store.update_counter("widget", 1, None, false).unwrap();
        assert_eq!(value, None);
        assert_eq!(store.quantity("widget").unwrap(), Some(1));
    }

    #[test]
    fn precondition_blocks_decrement_at_zero() {
        let store = MemoryStore::new();
        let result =
            store.update_counter("widget", -1, Some(Precondition::QuantityPositive), false);
        assert_eq!(result, Err(StoreError::ConditionFailed));
        // Nothing was mutated, not even an upsert to zero.
        assert_eq!(store.quantity("widget").unwrap(), None);
    }

    #[test]
    fn precondition_passes_when_positive() {
        let store = MemoryStore::new();
        store.update_counter("widget", 3, None, false).unwrap();
        let result =
            store.update_counter("widget", -1, Some(Precondition::QuantityPositive), false);
        assert_eq!(result, Ok(None));
        assert_eq!(store.quantity("widget").unwrap(), Some(2));
    }

    #[test]
    fn unconditional_underflow_is_refused() {
        let store = MemoryStore::new();
        let result = store.update_counter("widget", -1, None, false);
        assert_eq!(result, Err(StoreError::ConditionFailed));
        assert_eq!(store.quantity("widget").unwrap(), None);
    }
}
