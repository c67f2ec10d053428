use galley_types::Resource;

use crate::error::{StoreError, StoreResult};
use crate::ids::{next_id, numeric_id};

/// An insertion-ordered collection of one resource kind.
///
/// The collection is a plain value with no interior locking; callers that
/// share it across requests wrap it (see [`crate::InMemoryStore`]).
#[derive(Clone, Debug)]
pub struct Collection<R> {
    items: Vec<R>,
    /// Highest numeric id ever held or allocated.
    high_water: u64,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<R: Resource> Collection<R> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding `items` in order.
    pub fn with_items(items: impl IntoIterator<Item = R>) -> StoreResult<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.insert(item)?;
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every resource, in insertion order.
    pub fn list(&self) -> &[R] {
        &self.items
    }

    /// Position of the resource with `id`, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.items.get_mut(index)
    }

    /// Allocate a fresh id.
    ///
    /// Call exactly once per successful create, after validation and before
    /// [`Self::insert`]; each call consumes an id.
    pub fn allocate_id(&mut self) -> StoreResult<String> {
        let id = next_id(self.items.iter().map(|item| item.id()), self.high_water)
            .ok_or(StoreError::IdSpaceExhausted(R::KIND))?;
        if let Some(n) = numeric_id(&id) {
            self.high_water = n;
        }
        Ok(id)
    }

    /// Append a resource. Fails if its id is already present.
    pub fn insert(&mut self, item: R) -> StoreResult<&R> {
        if self.position(item.id()).is_some() {
            return Err(StoreError::DuplicateId {
                kind: R::KIND,
                id: item.id().to_string(),
            });
        }
        if let Some(n) = numeric_id(item.id()) {
            self.high_water = self.high_water.max(n);
        }
        self.items.push(item);
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Remove the resource at `index`, preserving the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<R> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_types::Dish;

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.into(),
            name: name.into(),
            description: "d".into(),
            price: 5,
            image_url: "u".into(),
        }
    }

    // -----------------------------------------------------------------------
    // Allocation
    // -----------------------------------------------------------------------

    #[test]
    fn first_allocation_is_seed() {
        let mut dishes: Collection<Dish> = Collection::new();
        assert_eq!(dishes.allocate_id().unwrap(), "1");
    }

    #[test]
    fn allocation_follows_seeded_maximum() {
        let mut dishes = Collection::with_items([dish("4", "a"), dish("2", "b")]).unwrap();
        assert_eq!(dishes.allocate_id().unwrap(), "5");
    }

    #[test]
    fn allocation_never_reuses_removed_ids() {
        let mut dishes: Collection<Dish> = Collection::new();
        let id = dishes.allocate_id().unwrap();
        dishes.insert(dish(&id, "a")).unwrap();
        let id = dishes.allocate_id().unwrap();
        dishes.insert(dish(&id, "b")).unwrap();
        assert!(dishes.remove_at(1).is_some());
        assert_eq!(dishes.allocate_id().unwrap(), "3");
    }

    // -----------------------------------------------------------------------
    // Ordering and lookup
    // -----------------------------------------------------------------------

    #[test]
    fn list_preserves_insertion_order() {
        let dishes =
            Collection::with_items([dish("9", "a"), dish("1", "b"), dish("5", "c")]).unwrap();
        let ids: Vec<&str> = dishes.list().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["9", "1", "5"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Collection::with_items([dish("1", "a"), dish("1", "b")]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { kind: "Dish", .. }));
    }

    #[test]
    fn position_and_get() {
        let dishes = Collection::with_items([dish("1", "a"), dish("2", "b")]).unwrap();
        assert_eq!(dishes.position("2"), Some(1));
        assert_eq!(dishes.get(0).map(|d| d.name.as_str()), Some("a"));
        assert!(dishes.position("3").is_none());
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut dishes =
            Collection::with_items([dish("1", "a"), dish("2", "b"), dish("3", "c")]).unwrap();
        let removed = dishes.remove_at(1).unwrap();
        assert_eq!(removed.id, "2");
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes.list()[1].id, "3");
        assert!(dishes.remove_at(5).is_none());
    }
}
