use std::collections::HashMap;
use std::hash::Hash;

/// Bounded cache that drops the least recently used entry when full.
pub struct ImageCache<K, V> {
    entries: HashMap<K, V>,
    max_cache_size: usize,
    access_order: Vec<K>,
}

impl<K: Hash + Eq + Clone, V> ImageCache<K, V> {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.touch(key);
        }
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        if self.entries.contains_key(&key) {
            self.touch(&key);
            self.entries.insert(key, value);
            return;
        }

        while self.entries.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.entries.remove(&oldest);
        }

        self.entries.insert(key.clone(), value);
        self.access_order.push(key);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.access_order.iter().position(|k| k == key) {
            let key = self.access_order.remove(pos);
            self.access_order.push(key);
        }
    }
}
