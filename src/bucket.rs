use std::fmt;

use crate::linked_list::{LinkedList, NodeHandle};

/// How an insert treats a key that's already in the bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertMode {
    /// Overwrite the value of an existing entry in place, or prepend a new
    /// one if the key isn't there yet. Keys stay unique.
    Update,

    /// Always prepend a new entry without looking for the key first. Several
    /// entries may share a key, newest first.
    PrependAlways,
}

/// A key and the value stored against it.
#[derive(Debug, PartialEq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// The chain of entries that hashed to one slot of a table. Entries are kept
/// newest first; every lookup is a linear walk from the head.
pub struct Bucket<V> {
    entries: LinkedList<Entry<V>>,
}

impl<V> Bucket<V> {
    pub fn new() -> Self {
        Self {
            entries: LinkedList::new(),
        }
    }

    /// Number of entries in the chain, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a value under `key` following `mode`. Returns the value that
    /// was overwritten, which can only happen under [`InsertMode::Update`].
    pub fn insert(&mut self, key: String, value: V, mode: InsertMode) -> Option<V> {
        if mode == InsertMode::Update {
            if let Some(handle) = self.find(&key) {
                if let Some(entry) = self.entries.get_mut(handle) {
                    return Some(std::mem::replace(&mut entry.value, value));
                }
            }
        }

        self.entries.push_front(Entry { key, value });
        None
    }

    /// The value of the head-most entry with this key.
    pub fn search(&self, key: &str) -> Option<&V> {
        self.find(key)
            .and_then(|handle| self.entries.get(handle))
            .map(|entry| &entry.value)
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        let handle = self.find(key)?;
        self.entries.get_mut(handle).map(|entry| &mut entry.value)
    }

    /// Every value stored under this key, newest first. Empty if there are
    /// none.
    pub fn search_all(&self, key: &str) -> Vec<&V> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.key == key)
            .map(|(_, entry)| &entry.value)
            .collect()
    }

    /// Removes the head-most entry with this key, returning whether one was
    /// there. Older duplicates stay put.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.find(key) {
            Some(handle) => self.entries.remove_node(handle).is_some(),
            None => false,
        }
    }

    /// Walks the entries head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<V>> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn find(&self, key: &str) -> Option<NodeHandle> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.key == key)
            .map(|(handle, _)| handle)
    }
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Display for Bucket<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bucket{{size={}, elems=", self.len())?;
        for entry in self.iter() {
            write!(f, "{{key={},value={:?}}},", entry.key, entry.value)?;
        }
        write!(f, "}}")
    }
}
