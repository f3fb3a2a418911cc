use std::{fmt, hash::BuildHasher};

use crate::bucket::{Bucket, InsertMode};
use crate::checksum::{slot_for, BuildByteSumHasher};
use crate::error::{Error, Result};

/// A separate-chaining hash table with a fixed number of buckets, keyed by
/// strings. The bucket count is picked at construction and never changes;
/// there is no rehashing, so chains simply grow as entries pile in.
///
/// Keys are spread with an additive byte checksum by default. Any other
/// `BuildHasher` can be swapped in, and is fed the raw bytes of each key.
pub struct ChainedTable<V, S = BuildByteSumHasher>
where
    S: BuildHasher,
{
    buckets: Vec<Bucket<V>>,
    hash_builder: S,
}

impl<V> ChainedTable<V, BuildByteSumHasher> {
    /// Makes a new table with `capacity` buckets. A capacity of zero leaves
    /// nowhere to hash to and is refused.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ChainedTable::with_capacity_and_hash_builder(capacity, BuildByteSumHasher)
    }
}

impl<V, S> ChainedTable<V, S>
where
    S: BuildHasher,
{
    /// Makes a new table with `capacity` buckets and a specific hasher.
    pub fn with_capacity_and_hash_builder(capacity: usize, hash_builder: S) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);

        Ok(Self {
            buckets,
            hash_builder,
        })
    }

    /// Inserts `value` under `key`, overwriting the value of an existing
    /// entry. Returns the overwritten value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.insert_with(InsertMode::Update, key, value)
    }

    /// Inserts `value` under `key` as a brand new entry, even if the key is
    /// already present. Pair with [`ChainedTable::search_all`].
    pub fn insert_all(&mut self, key: impl Into<String>, value: V) {
        self.insert_with(InsertMode::PrependAlways, key, value);
    }

    pub fn insert_with(&mut self, mode: InsertMode, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let idx = self.slot(&key);
        self.buckets[idx].insert(key, value, mode)
    }

    /// The most recently inserted value under `key`.
    pub fn search(&self, key: &str) -> Option<&V> {
        self.buckets[self.slot(key)].search(key)
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.slot(key);
        self.buckets[idx].search_mut(key)
    }

    /// Every value under `key`, most recently inserted first.
    pub fn search_all(&self, key: &str) -> Vec<&V> {
        self.buckets[self.slot(key)].search_all(key)
    }

    /// Removes the most recently inserted entry under `key`. Returns whether
    /// anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let idx = self.slot(key);
        self.buckets[idx].delete(key)
    }

    /// The number of entries across all buckets. Walks every bucket.
    pub fn size(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// The number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Mean chain length; a diagnostic only, nothing is rebalanced on it.
    pub fn average_bucket_length(&self) -> f64 {
        self.size() as f64 / self.capacity() as f64
    }

    /// Length of the longest chain.
    pub fn longest_bucket(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or(0)
    }

    /// The buckets in index order.
    pub fn iter_buckets(&self) -> impl Iterator<Item = &Bucket<V>> {
        self.buckets.iter()
    }

    /// Empties every bucket. The bucket count stays the same.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
    }

    fn slot(&self, key: &str) -> usize {
        slot_for(&self.hash_builder, key, self.buckets.len())
    }
}

impl<V, S> fmt::Display for ChainedTable<V, S>
where
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainedTable[")?;
        for bucket in &self.buckets {
            write!(f, "{},", bucket)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::RandomState;

    use proptest::prelude::*;

    use super::ChainedTable;
    use crate::checksum::bucket_index;
    use crate::error::Error;
    use crate::signature::signature;

    #[test]
    fn test_zero_capacity_refused() {
        assert!(matches!(
            ChainedTable::<u32>::with_capacity(0),
            Err(Error::ZeroCapacity)
        ));
    }

    #[test]
    fn test_table() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(10)?;
        table.insert("one", 1);
        table.insert("two", 2);
        table.insert("three", 3);
        // same bytes as "one", so same bucket
        table.insert("neo", 69);

        assert_eq!(Some(&1), table.search("one"));
        assert_eq!(Some(&69), table.search("neo"));
        assert_eq!(4, table.size());

        assert!(table.delete("neo"));
        assert_eq!(None, table.search("neo"));
        assert_eq!(Some(&1), table.search("one"));
        assert_eq!(3, table.size());
        Ok(())
    }

    #[test]
    fn test_entries_land_in_their_hash_slot() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(10)?;
        for key in &["test", "raNd!", "TesTinG", "12rand2"] {
            table.insert(*key, ());
        }

        for (idx, bucket) in table.iter_buckets().enumerate() {
            for entry in bucket.iter() {
                assert_eq!(idx, bucket_index(&entry.key, 10));
            }
        }
        assert_eq!(1, table.iter_buckets().nth(8).map_or(0, |b| b.len()));
        assert_eq!(1, table.iter_buckets().nth(2).map_or(0, |b| b.len()));
        assert_eq!(2, table.iter_buckets().nth(0).map_or(0, |b| b.len()));
        Ok(())
    }

    #[test]
    fn test_update_does_not_grow() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(4)?;
        assert_eq!(None, table.insert("k", 1));
        assert_eq!(Some(1), table.insert("k", 2));
        assert_eq!(1, table.size());
        assert_eq!(Some(&2), table.search("k"));
        Ok(())
    }

    #[test]
    fn test_insert_all_keeps_every_value() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(100)?;
        for word in &["one", "two", "three", "neo"] {
            table.insert_all(signature(word), *word);
        }

        assert_eq!(4, table.size());
        assert_eq!(vec![&"neo", &"one"], table.search_all(&signature("one")));
        assert_eq!(Some(&"neo"), table.search(&signature("one")));
        assert_eq!(vec![&"three"], table.search_all(&signature("three")));
        assert!(table.search_all("zzz").is_empty());
        Ok(())
    }

    #[test]
    fn test_delete_absent_keeps_size() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(3)?;
        table.insert("here", 1);
        assert!(!table.delete("gone"));
        assert_eq!(1, table.size());
        Ok(())
    }

    #[test]
    fn test_empty_key() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(7)?;
        table.insert("", "blank");
        assert_eq!(Some(&"blank"), table.search(""));
        assert_eq!(1, table.iter_buckets().next().map_or(0, |b| b.len()));
        Ok(())
    }

    #[test]
    fn test_search_mut_appends() -> Result<(), Error> {
        let mut table: ChainedTable<Vec<&str>> = ChainedTable::with_capacity(5)?;
        table.insert("aekl", vec!["lake"]);
        if let Some(words) = table.search_mut("aekl") {
            words.push("kale");
        }
        assert_eq!(Some(&vec!["lake", "kale"]), table.search("aekl"));
        Ok(())
    }

    #[test]
    fn test_diagnostics() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(4)?;
        assert!(table.is_empty());
        assert_eq!(0.0, table.average_bucket_length());

        for key in &["a", "b", "c", "d", "e", "f"] {
            table.insert(*key, 0);
        }
        assert_eq!(4, table.capacity());
        assert_eq!(1.5, table.average_bucket_length());
        assert_eq!(2, table.longest_bucket());

        table.clear();
        assert!(table.is_empty());
        assert_eq!(4, table.capacity());
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity(2)?;
        // 'a' is 97, 'b' is 98
        table.insert("a", 1);
        table.insert("b", 2);
        assert_eq!(
            "ChainedTable[Bucket{size=1, elems={key=b,value=2},},\
             Bucket{size=1, elems={key=a,value=1},},]",
            table.to_string()
        );
        Ok(())
    }

    #[test]
    fn test_other_hasher() -> Result<(), Error> {
        let mut table = ChainedTable::with_capacity_and_hash_builder(16, RandomState::new())?;
        table.insert("lake", 1);
        table.insert_all("lake", 2);
        assert_eq!(vec![&2, &1], table.search_all("lake"));
        Ok(())
    }

    proptest! {
        #[test]
        fn size_counts_distinct_updates(keys in prop::collection::vec("[a-c]{0,3}", 0..64)) {
            let mut table = ChainedTable::with_capacity(7).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let mut distinct = std::collections::HashSet::new();
            for (i, key) in keys.iter().enumerate() {
                table.insert(key.as_str(), i);
                distinct.insert(key.clone());
                prop_assert_eq!(Some(&i), table.search(key));
            }
            prop_assert_eq!(distinct.len(), table.size());
        }

        #[test]
        fn delete_removes_exactly_one(keys in prop::collection::vec("[a-c]{1,2}", 1..32)) {
            let mut table = ChainedTable::with_capacity(3).map_err(|e| TestCaseError::fail(e.to_string()))?;
            for key in &keys {
                table.insert_all(key.as_str(), ());
            }
            let before = table.size();
            prop_assert!(table.delete(&keys[0]));
            prop_assert_eq!(before - 1, table.size());
        }
    }
}
