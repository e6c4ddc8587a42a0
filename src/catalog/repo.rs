use std::sync::Mutex;

/// An item with an id the repository may assign on insert.
pub trait Entity {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

/// Insertion-ordered in-memory repository guarded by a single mutex.
///
/// Ids are assigned as `max(existing) + 1`, or 1 for an empty collection, so
/// ids of deleted items can be reused — matching the original site's
/// behavior, which list pages depend on for stable ordering.
pub struct MemRepo<T> {
    items: Mutex<Vec<T>>,
}

impl<T> Default for MemRepo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemRepo<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity + Clone> MemRepo<T> {
    pub fn list(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    pub fn get(&self, id: u32) -> Option<T> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Insert `item`, assigning it the next id. Returns the assigned id.
    pub fn add(&self, mut item: T) -> u32 {
        let mut items = self.items.lock().unwrap();
        let id = items.iter().map(Entity::id).max().map_or(1, |max| max + 1);
        item.set_id(id);
        items.push(item);
        id
    }

    /// Apply `f` to the item with the given id. Returns false when absent.
    pub fn update(&self, id: u32, f: impl FnOnce(&mut T)) -> bool {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Remove by id; silently a no-op when the id is absent.
    pub fn delete(&self, id: u32) {
        self.items.lock().unwrap().retain(|item| item.id() != id);
    }
}
