//! ChainSet: string set backed by `ChainTable<()>`.

use crate::config::Config;
use crate::hash::{FnvRotate, HashOracle};
use crate::table::ChainTable;
use core::fmt;

pub struct ChainSet<H = FnvRotate> {
    data: ChainTable<(), H>,
}

impl ChainSet {
    pub fn new() -> Self {
        Self {
            data: ChainTable::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: ChainTable::with_capacity(capacity),
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            data: ChainTable::with_config(config),
        }
    }
}

impl Default for ChainSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HashOracle> ChainSet<H> {
    pub fn with_oracle(oracle: H) -> Self {
        Self {
            data: ChainTable::with_oracle(oracle),
        }
    }

    /// Adds `element`; returns false if it was already present.
    pub fn add<K>(&mut self, element: K) -> bool
    where
        K: AsRef<str> + Into<String>,
    {
        self.data.insert(element, ()).is_none()
    }

    pub fn contains(&self, element: &str) -> bool {
        self.data.contains_key(element)
    }

    /// Removes `element`; returns false if it was absent.
    pub fn remove(&mut self, element: &str) -> bool {
        self.data.delete(element).is_some()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn elements(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        self.data.for_each(|k, _| out.push(k.to_string()));
        out
    }

    pub fn add_many<I, K>(&mut self, elements: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str> + Into<String>,
    {
        self.data.insert_many(elements.into_iter().map(|k| (k, ())))
    }

    pub fn remove_many<I, K>(&mut self, elements: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.data.delete_many(elements)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|(k, _)| k)
    }
}

impl<K, H> FromIterator<K> for ChainSet<H>
where
    K: AsRef<str> + Into<String>,
    H: HashOracle + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut s = Self::with_oracle(H::default());
        s.add_many(iter);
        s
    }
}

impl<H: HashOracle> fmt::Debug for ChainSet<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
