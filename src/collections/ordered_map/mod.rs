//! [`OrderedMap`], the map contract shared by [`TreeMap`] and [`std::collections::BTreeMap`].
//!
//! Keys are passed as options so that an absent key can be expressed. Absent keys are always
//! rejected: lookups fail with `InvalidArgument` and insertion fails with `NullKey`.
//! Code written against the trait can switch between implementations; operations an
//! implementation does not provide fail with `Unsupported`.
//!
//! # Example
//!
//! ```
//!     use bstmap::collections::{MapError, OrderedMap, TreeMap};
//!     fn capital<M: OrderedMap<&'static str, &'static str>>(map: &mut M) -> Result<(), MapError> {
//!         map.put(Some("France"), "Paris")?;
//!         assert_eq!(map.get(Some(&"France"))?, Some(&"Paris"));
//!         assert!(map.get(None).is_err());
//!         Ok(())
//!     }
//!     capital(&mut TreeMap::new()).unwrap();
//!     capital(&mut std::collections::BTreeMap::new()).unwrap();
//! ```

use std::{collections::BTreeMap, collections::HashSet, hash::Hash};

use super::{tree_map::Comparator, MapError, TreeMap};

/// Map operations with nullable keys and fallible results.
pub trait OrderedMap<K, V> {
    /// Remove every entry.
    fn clear(&mut self);

    /// Does the map have an entry for `key`.
    fn contains_key(&self, key: Option<&K>) -> Result<bool, MapError>;

    /// Does any key map to `value`.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq;

    /// The value stored for `key`, if any.
    fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError>;

    /// Is the map empty?
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Keys in ascending order.
    fn key_set(&self) -> Vec<&K>;

    /// Insert `value` for `key`, returning the value it replaced.
    fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError>;

    /// [`put`](Self::put) every pair from `entries` in iteration order, stopping at the first failure.
    fn put_all<I>(&mut self, entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.put(Some(key), value)?;
        }
        Ok(())
    }

    /// Remove the entry for `key`, returning its value.
    fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError>;

    /// Number of entries.
    fn size(&self) -> usize;

    /// The distinct values, in no particular order.
    fn values(&self) -> HashSet<&V>
    where
        V: Eq + Hash;

    /// All entries in ascending key order.
    fn entry_set(&self) -> Result<Vec<(&K, &V)>, MapError>;
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V> for TreeMap<K, V, C> {
    fn clear(&mut self) {
        TreeMap::clear(self);
    }

    fn contains_key(&self, key: Option<&K>) -> Result<bool, MapError> {
        TreeMap::contains_key(self, key.ok_or_else(MapError::invalid_argument)?)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        TreeMap::contains_value(self, value)
    }

    fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError> {
        TreeMap::get(self, key.ok_or_else(MapError::invalid_argument)?)
    }

    fn is_empty(&self) -> bool {
        TreeMap::is_empty(self)
    }

    fn key_set(&self) -> Vec<&K> {
        TreeMap::key_set(self)
    }

    fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError> {
        self.insert(key.ok_or_else(MapError::null_key)?, value)
    }

    fn remove(&mut self, _key: Option<&K>) -> Result<Option<V>, MapError> {
        Err(MapError::unsupported("remove"))
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn values(&self) -> HashSet<&V>
    where
        V: Eq + Hash,
    {
        TreeMap::values(self)
    }

    fn entry_set(&self) -> Result<Vec<(&K, &V)>, MapError> {
        Err(MapError::unsupported("entry_set"))
    }
}

impl<K: Ord, V> OrderedMap<K, V> for BTreeMap<K, V> {
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn contains_key(&self, key: Option<&K>) -> Result<bool, MapError> {
        Ok(BTreeMap::contains_key(self, key.ok_or_else(MapError::invalid_argument)?))
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        BTreeMap::values(self).any(|v| v == value)
    }

    fn get(&self, key: Option<&K>) -> Result<Option<&V>, MapError> {
        Ok(BTreeMap::get(self, key.ok_or_else(MapError::invalid_argument)?))
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }

    fn key_set(&self) -> Vec<&K> {
        self.keys().collect()
    }

    fn put(&mut self, key: Option<K>, value: V) -> Result<Option<V>, MapError> {
        Ok(self.insert(key.ok_or_else(MapError::null_key)?, value))
    }

    fn remove(&mut self, key: Option<&K>) -> Result<Option<V>, MapError> {
        Ok(BTreeMap::remove(self, key.ok_or_else(MapError::invalid_argument)?))
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn values(&self) -> HashSet<&V>
    where
        V: Eq + Hash,
    {
        BTreeMap::values(self).collect()
    }

    fn entry_set(&self) -> Result<Vec<(&K, &V)>, MapError> {
        Ok(self.iter().collect())
    }
}
