//! HashMap: separate chaining over an `Array` of `DoublyLinkedList` buckets.
//!
//! An entry with hash `h` lives in bucket `h % capacity`. Collisions
//! resolve entirely within the bucket's chain; there is no probing across
//! buckets. Before an insert would bring the load factor to
//! `MAX_LOAD_FACTOR`, the bucket table doubles and every entry is
//! re-threaded into a fresh table.
//!
//! Each entry caches its `u64` hash, so rehashing never calls `K: Hash`
//! and chain scans compare hashes before running `K: Eq`.

use crate::array::{self, Array};
use crate::doubly_linked_list::{self, DoublyLinkedList, Position};
use crate::error::{Error, Result};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use log::{debug, trace};
use std::collections::hash_map::RandomState;

/// Bucket count of a map built with `new`/`with_hasher`.
pub const DEFAULT_CAPACITY: usize = 256;

/// Load factor an insert may never reach; crossing it doubles the table.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

type Bucket<K, V> = DoublyLinkedList<Entry<K, V>>;

pub struct HashMap<K, V, S = RandomState> {
    hasher: S,
    buckets: Array<Bucket<K, V>>, // len() is the capacity
    count: usize,
}

impl<K, V> HashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// A zero capacity is bumped to a single bucket.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            hasher,
            buckets: bucket_table(capacity.max(1)),
            count: 0,
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    #[inline]
    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Scan the chain of bucket `hash % capacity` for `q`.
    fn locate_hashed<Q>(&self, hash: u64, q: &Q) -> Option<(usize, Position)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let idx = self.bucket_index(hash);
        self.buckets[idx]
            .position_of(|e| e.hash == hash && e.key.borrow() == q)
            .map(|pos| (idx, pos))
    }

    fn locate<Q>(&self, q: &Q) -> Option<(usize, Position)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.locate_hashed(self.make_hash(q), q)
    }

    /// Strict lookup; fails with `KeyNotFound` when `q` is absent.
    pub fn at<Q>(&self, q: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (idx, pos) = self.locate(q).ok_or(Error::KeyNotFound)?;
        Ok(&self.buckets[idx][pos].value)
    }

    pub fn at_mut<Q>(&mut self, q: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (idx, pos) = self.locate(q).ok_or(Error::KeyNotFound)?;
        Ok(&mut self.buckets[idx][pos].value)
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.at(q).ok()
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.at_mut(q).ok()
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.locate(q).is_some()
    }

    /// Insert a new pair and return references to the stored key and value.
    ///
    /// Fails with `DuplicateKey` (leaving the map untouched) if `key` is
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<(&K, &mut V)> {
        self.insert_with(key, move || value)
    }

    /// Like `insert`, but only builds the value once the key is known to be new.
    pub fn insert_with<F>(&mut self, key: K, make: F) -> Result<(&K, &mut V)>
    where
        F: FnOnce() -> V,
    {
        let hash = self.make_hash(&key);
        if self.locate_hashed(hash, &key).is_some() {
            return Err(Error::DuplicateKey);
        }
        let (idx, pos) = self.place(Entry {
            key,
            value: make(),
            hash,
        });
        let e = &mut self.buckets[idx][pos];
        Ok((&e.key, &mut e.value))
    }

    /// Value for `key`, inserting `V::default()` first if it is absent.
    ///
    /// Unlike `at`, a missing key is never an error here.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let hash = self.make_hash(&key);
        let (idx, pos) = match self.locate_hashed(hash, &key) {
            Some(found) => found,
            None => self.place(Entry {
                key,
                value: V::default(),
                hash,
            }),
        };
        &mut self.buckets[idx][pos].value
    }

    /// Append an entry known to be absent, growing the table first if needed.
    fn place(&mut self, entry: Entry<K, V>) -> (usize, Position) {
        let capacity = self.capacity();
        if (self.count + 1) as f64 / capacity as f64 >= MAX_LOAD_FACTOR {
            self.resize(capacity * 2);
        }
        let idx = self.bucket_index(entry.hash);
        let pos = self.buckets[idx].push_back(entry);
        self.count += 1;
        (idx, pos)
    }

    /// Remove `q` and return its value. An absent key is a no-op.
    pub fn erase<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(q).map(|(_, v)| v)
    }

    /// Like `erase`, but hands back the owned key as well.
    pub fn remove_entry<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (idx, pos) = self.locate(q)?;
        let entry = self.buckets[idx].erase(pos)?;
        self.count -= 1;
        Some((entry.key, entry.value))
    }

    #[cfg(test)]
    pub(crate) fn bucket_contains<Q>(&self, idx: usize, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.buckets[idx].iter().any(|e| e.key.borrow() == q)
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Grow the table to `new_capacity` buckets and redistribute every entry.
    ///
    /// Requests at or below the current capacity do nothing; the table never
    /// shrinks. Entries move in bucket-then-chain order using their cached
    /// hashes.
    pub fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.buckets.len();
        if new_capacity <= old_capacity {
            trace!(
                "resize to {} ignored: capacity is already {}",
                new_capacity,
                old_capacity
            );
            return;
        }

        let mut old = bucket_table(new_capacity);
        old.swap_with(&mut self.buckets);

        let mut moved = 0usize;
        for bucket in old {
            for entry in bucket {
                let idx = (entry.hash % new_capacity as u64) as usize;
                self.buckets[idx].push_back(entry);
                moved += 1;
            }
        }
        debug_assert_eq!(moved, self.count, "rehash lost or duplicated entries");
        self.count = moved;

        debug!(
            "rehashed {} entries: {} -> {} buckets",
            moved, old_capacity, new_capacity
        );
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.count = 0;
    }

    /// Iterate in bucket order, then chain order within each bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.count,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            remaining: self.count,
            buckets: self.buckets.iter_mut(),
            chain: None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.iter_mut().map(|(_, v)| v)
    }

    #[cfg(test)]
    pub(crate) fn bucket_len(&self, idx: usize) -> usize {
        self.buckets[idx].len()
    }
}

fn bucket_table<K, V>(capacity: usize) -> Array<Bucket<K, V>> {
    let mut table = Array::with_capacity(capacity);
    table.resize(capacity);
    table
}

impl<K: Clone, V: Clone, S: Clone> Clone for HashMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            hasher: self.hasher.clone(),
            buckets: self.buckets.clone(),
            count: self.count,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Eq + Hash, V: Eq, S: BuildHasher> Eq for HashMap<K, V, S> {}

/// Iterator over `(&K, &V)` pairs.
pub struct Iter<'a, K, V> {
    buckets: array::Iter<'a, Bucket<K, V>>,
    chain: Option<doubly_linked_list::Iter<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.as_mut().and_then(|c| c.next()) {
                self.remaining -= 1;
                return Some((&e.key, &e.value));
            }
            if self.remaining == 0 {
                return None;
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Iterator over `(&K, &mut V)` pairs.
pub struct IterMut<'a, K, V> {
    buckets: array::IterMut<'a, Bucket<K, V>>,
    chain: Option<doubly_linked_list::IterMut<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.as_mut().and_then(|c| c.next()) {
                self.remaining -= 1;
                return Some((&e.key, &mut e.value));
            }
            if self.remaining == 0 {
                return None;
            }
            self.chain = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
