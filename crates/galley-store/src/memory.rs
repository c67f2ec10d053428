use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use galley_types::{Dish, Order};

use crate::collection::Collection;
use crate::error::{StoreError, StoreResult};
use crate::seed::Seed;

/// Process-wide owner of the dish and order collections.
///
/// Each collection sits behind its own `RwLock`. A mutating request takes
/// the write guard before running its validation pipeline and holds it until
/// the mutation is applied, so no other request can observe or interleave
/// with a half-validated change.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    dishes: RwLock<Collection<Dish>>,
    orders: RwLock<Collection<Order>>,
}

impl InMemoryStore {
    /// Create a store with both collections empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from seed fixtures.
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        let store = Self {
            dishes: RwLock::new(Collection::with_items(seed.dishes)?),
            orders: RwLock::new(Collection::with_items(seed.orders)?),
        };
        tracing::debug!(
            dishes = store.dishes()?.len(),
            orders = store.orders()?.len(),
            "store seeded"
        );
        Ok(store)
    }

    pub fn dishes(&self) -> StoreResult<RwLockReadGuard<'_, Collection<Dish>>> {
        self.dishes
            .read()
            .map_err(|_| StoreError::LockPoisoned("dish"))
    }

    pub fn dishes_mut(&self) -> StoreResult<RwLockWriteGuard<'_, Collection<Dish>>> {
        self.dishes
            .write()
            .map_err(|_| StoreError::LockPoisoned("dish"))
    }

    pub fn orders(&self) -> StoreResult<RwLockReadGuard<'_, Collection<Order>>> {
        self.orders
            .read()
            .map_err(|_| StoreError::LockPoisoned("order"))
    }

    pub fn orders_mut(&self) -> StoreResult<RwLockWriteGuard<'_, Collection<Order>>> {
        self.orders
            .write()
            .map_err(|_| StoreError::LockPoisoned("order"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_types::OrderLine;
    use std::sync::Arc;
    use std::thread;

    fn order(id: &str) -> Order {
        Order {
            id: id.into(),
            deliver_to: "x".into(),
            mobile_number: "y".into(),
            status: Some("pending".into()),
            dishes: vec![OrderLine { dish_id: None, quantity: 1 }],
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.dishes().unwrap().is_empty());
        assert!(store.orders().unwrap().is_empty());
    }

    #[test]
    fn seeded_store_holds_fixtures() {
        let seed = Seed {
            dishes: Vec::new(),
            orders: vec![order("1"), order("2")],
        };
        let store = InMemoryStore::from_seed(seed).unwrap();
        assert_eq!(store.orders().unwrap().len(), 2);
        assert_eq!(store.orders_mut().unwrap().allocate_id().unwrap(), "3");
    }

    #[test]
    fn concurrent_creates_allocate_distinct_ids() {
        let store = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let mut orders = store.orders_mut().unwrap();
                    let id = orders.allocate_id().unwrap();
                    orders.insert(order(&id)).unwrap();
                    id
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic").parse().unwrap())
            .collect();
        ids.sort();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
