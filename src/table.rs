//! ChainTable: separate-chaining hash table over an entry arena.
//!
//! Buckets hold the handle of their chain head; every entry holds the
//! handle of its successor. Entries live in a `SlotMap`, so relinking
//! during a resize only rewrites handles and never moves or recreates an
//! entry.

use crate::config::{Config, GROWTH_FACTOR};
use crate::error::{Error, Result};
use crate::hash::{FnvRotate, HashOracle};
use core::any::Any;
use core::fmt;
use core::mem;
use slotmap::{DefaultKey, SlotMap};

/// Value type for tables that store a different concrete type per key.
pub type AnyValue = Box<dyn Any>;

/// Stable identity of a stored entry; unchanged by resizes.
#[cfg(test)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct EntryId(DefaultKey);

#[derive(Debug)]
struct Entry<V> {
    key: Box<str>,
    value: V,
    next: Option<DefaultKey>,
}

/// Separate-chaining hash table keyed by strings.
///
/// Single-owner and unsynchronized: wrap it in a lock if it must be shared.
/// Inserting past the configured load factor grows the bucket array
/// in place (see [`ChainTable::insert`]); deleting never shrinks it.
pub struct ChainTable<V, H = FnvRotate> {
    oracle: H,
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry<V>>, // every entry is linked from exactly one bucket
    load_factor: f64,
}

impl<V> ChainTable<V> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a table with `capacity` buckets (zero means the default).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::new().with_initial_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_config_and_oracle(config, FnvRotate)
    }
}

impl<V> Default for ChainTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: HashOracle> ChainTable<V, H> {
    pub fn with_oracle(oracle: H) -> Self {
        Self::with_config_and_oracle(Config::default(), oracle)
    }

    pub fn with_config_and_oracle(config: Config, oracle: H) -> Self {
        let capacity = config.initial_capacity.max(1);
        Self {
            oracle,
            buckets: vec![None; capacity],
            entries: SlotMap::with_key(),
            load_factor: config.load_factor,
        }
    }

    /// Number of distinct keys stored. O(1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Configured growth threshold.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    #[inline]
    fn bucket_index(&self, key: &str) -> usize {
        (self.oracle.hash(key) % self.buckets.len() as u64) as usize
    }

    #[inline]
    fn exceeds_load(&self, entries: usize, buckets: usize) -> bool {
        entries as f64 / buckets as f64 > self.load_factor
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        let mut cursor = self.buckets[self.bucket_index(key)];
        while let Some(id) = cursor {
            let e = &self.entries[id];
            if &*e.key == key {
                return Some(id);
            }
            cursor = e.next;
        }
        None
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// An existing key is updated in place and the size is untouched. A new
    /// key is appended to its chain; if the size then exceeds
    /// `load_factor * capacity`, the bucket array is at least doubled and
    /// every entry is rehomed before this call returns.
    ///
    /// # Panics
    ///
    /// Panics if growing would overflow the bucket count.
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str> + Into<String>,
    {
        let idx = self.bucket_index(key.as_ref());
        let mut tail = None;
        let mut cursor = self.buckets[idx];
        while let Some(id) = cursor {
            let e = &mut self.entries[id];
            if &*e.key == key.as_ref() {
                return Some(mem::replace(&mut e.value, value));
            }
            tail = Some(id);
            cursor = e.next;
        }

        let owned: String = key.into();
        let id = self.entries.insert(Entry {
            key: owned.into_boxed_str(),
            value,
            next: None,
        });
        match tail {
            Some(t) => self.entries[t].next = Some(id),
            None => self.buckets[idx] = Some(id),
        }

        let len = self.len();
        if self.exceeds_load(len, self.buckets.len()) {
            self.resize(len);
        }
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|id| &self.entries[id].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.entries[id].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` and returns its value; absent keys are a no-op.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket_index(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[idx];
        while let Some(id) = cursor {
            let e = &self.entries[id];
            let next = e.next;
            if &*e.key == key {
                match prev {
                    Some(p) => self.entries[p].next = next,
                    None => self.buckets[idx] = next,
                }
                return self.entries.remove(id).map(|e| e.value);
            }
            prev = Some(id);
            cursor = next;
        }
        None
    }

    /// Visits every entry once, in bucket order then chain order.
    ///
    /// The order is an artifact of hashing and resize history.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.iter() {
            visit(k, v);
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            entries: &self.entries,
            cursor: None,
            remaining: self.entries.len(),
        }
    }

    /// Inserts every pair, growing the table up front for the pairs the
    /// iterator guarantees.
    ///
    /// Pre-sizing uses the lower `size_hint` bound, so exact-size inputs
    /// grow at most once and lazy adapters never over-allocate. The final
    /// contents equal inserting the pairs one by one in iteration order;
    /// for repeated keys the last pair wins.
    pub fn insert_many<I, K>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str> + Into<String>,
    {
        let pairs = pairs.into_iter();
        let (incoming, _) = pairs.size_hint();
        if incoming > 0 {
            log::debug!(
                "Pre-sizing chain table for batch of {incoming} entries (len={})",
                self.len()
            );
            self.reserve(incoming);
        }
        for (k, v) in pairs {
            self.insert(k, v);
        }
    }

    /// Deletes every key; absent keys are skipped.
    pub fn delete_many<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for k in keys {
            self.delete(k.as_ref());
        }
    }

    /// Grows the table so that `additional` more entries fit without
    /// crossing the load factor.
    ///
    /// # Panics
    ///
    /// Panics if the required bucket count overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(e) = self.try_reserve(additional) {
            panic!("{e}");
        }
    }

    /// Fallible form of [`ChainTable::reserve`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if the required bucket count
    /// cannot be represented.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let target = self
            .len()
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        if !self.exceeds_load(target, self.buckets.len()) {
            return Ok(());
        }
        let needed = (target as f64 / self.load_factor).ceil();
        if needed >= usize::MAX as f64 {
            return Err(Error::CapacityOverflow);
        }
        self.try_resize(needed as usize)
    }

    fn resize(&mut self, target: usize) {
        if let Err(e) = self.try_resize(target) {
            panic!("{e}");
        }
    }

    /// Doubles the bucket count at least once and until it reaches
    /// `target`, then relinks every entry into the new array.
    pub(crate) fn try_resize(&mut self, target: usize) -> Result<()> {
        let old = self.buckets.len();
        let mut capacity = old.checked_mul(GROWTH_FACTOR).ok_or(Error::CapacityOverflow)?;
        while capacity < target {
            capacity = capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(Error::CapacityOverflow)?;
        }

        let mut rehomed: Vec<Option<DefaultKey>> = vec![None; capacity];
        for head in mem::take(&mut self.buckets) {
            let mut cursor = head;
            while let Some(id) = cursor {
                let idx = (self.oracle.hash(&self.entries[id].key) % capacity as u64) as usize;
                let e = &mut self.entries[id];
                cursor = e.next;
                e.next = rehomed[idx];
                rehomed[idx] = Some(id);
            }
        }
        self.buckets = rehomed;

        log::trace!(
            "Resized chain table from {old} to {capacity} buckets (len={})",
            self.len()
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn entry_id(&self, key: &str) -> Option<EntryId> {
        self.find(key).map(EntryId)
    }

    /// Bucket currently holding `key`, found by scanning every chain.
    #[cfg(test)]
    pub(crate) fn bucket_of(&self, key: &str) -> Option<usize> {
        self.buckets.iter().position(|&head| {
            let mut cursor = head;
            while let Some(id) = cursor {
                if &*self.entries[id].key == key {
                    return true;
                }
                cursor = self.entries[id].next;
            }
            false
        })
    }

    /// Entries reachable by walking every chain.
    #[cfg(test)]
    pub(crate) fn reachable(&self) -> usize {
        self.buckets
            .iter()
            .map(|&head| {
                let mut n = 0;
                let mut cursor = head;
                while let Some(id) = cursor {
                    n += 1;
                    cursor = self.entries[id].next;
                }
                n
            })
            .sum()
    }
}

/// Borrowing iterator over `(key, value)` pairs in bucket order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Option<DefaultKey>>,
    entries: &'a SlotMap<DefaultKey, Entry<V>>,
    cursor: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.cursor {
                let entries = self.entries;
                let e = &entries[id];
                self.cursor = e.next;
                self.remaining -= 1;
                return Some((&*e.key, &e.value));
            }
            self.cursor = *self.buckets.next()?;
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V, H: HashOracle> IntoIterator for &'a ChainTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, H> Extend<(K, V)> for ChainTable<V, H>
where
    K: AsRef<str> + Into<String>,
    H: HashOracle,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<K, V, H> FromIterator<(K, V)> for ChainTable<V, H>
where
    K: AsRef<str> + Into<String>,
    H: HashOracle + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut t = Self::with_oracle(H::default());
        t.insert_many(iter);
        t
    }
}

impl<V: fmt::Debug, H: HashOracle> fmt::Debug for ChainTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
