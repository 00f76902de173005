//! ChainDict: dictionary façade over `ChainTable`.

use crate::config::Config;
use crate::hash::{FnvRotate, HashOracle};
use crate::table::{AnyValue, ChainTable};
use core::any::Any;
use core::fmt;

/// String-keyed dictionary. Every call forwards to the underlying table.
///
/// The default value type is [`AnyValue`], so one dictionary can hold
/// values of different types; see [`ChainDict::set_any`] and
/// [`ChainDict::get_as`].
pub struct ChainDict<V = AnyValue, H = FnvRotate> {
    data: ChainTable<V, H>,
}

impl<V> ChainDict<V> {
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

impl<V> Default for ChainDict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: HashOracle> ChainDict<V, H> {
    pub fn with_oracle(oracle: H) -> Self {
        Self {
            data: ChainTable::with_oracle(oracle),
        }
    }

    /// Inserts or replaces the value for `key`.
    pub fn set<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str> + Into<String>,
    {
        self.data.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.data.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.data.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn delete(&mut self, key: &str) -> Option<V> {
        self.data.delete(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        self.data.for_each(|k, _| keys.push(k.to_string()));
        keys
    }

    pub fn values(&self) -> Vec<&V> {
        self.data.iter().map(|(_, v)| v).collect()
    }

    pub fn set_many<I, K>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str> + Into<String>,
    {
        self.data.insert_many(pairs)
    }

    pub fn delete_many<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.data.delete_many(keys)
    }

    pub fn as_table(&self) -> &ChainTable<V, H> {
        &self.data
    }
}

impl<H: HashOracle> ChainDict<AnyValue, H> {
    /// Boxes `value` and stores it under `key`.
    pub fn set_any<K, T>(&mut self, key: K, value: T) -> Option<AnyValue>
    where
        K: AsRef<str> + Into<String>,
        T: Any,
    {
        self.data.insert(key, Box::new(value))
    }

    /// Value under `key` if present and of type `T`.
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.data.get(key)?.downcast_ref::<T>()
    }
}

impl<V: fmt::Debug, H: HashOracle> fmt::Debug for ChainDict<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}
