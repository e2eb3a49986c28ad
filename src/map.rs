//! Ordered map type for INI documents and sections.
//!
//! This module provides [`IniMap`], a wrapper around [`IndexMap`] that keeps
//! keys in the order they were first assigned. The encoder walks keys in that
//! order, so a decoded document re-encodes with its lines in source order.
//!
//! Equality is order-insensitive: two maps with the same entries compare equal
//! regardless of insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{IniMap, Value};
//!
//! let mut map = IniMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("admin".to_string(), Value::from(true));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to INI values.
///
/// Used both for a whole document and for a single section within it.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{IniMap, Value};
///
/// let mut map = IniMap::new();
/// map.insert("first".to_string(), Value::from("1"));
/// map.insert("second".to_string(), Value::from("2"));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IniMap(IndexMap<String, crate::Value>);

impl IniMap {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(IndexMap::new())
    }

    /// Creates an empty `IniMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Replacing an existing key keeps its original position and returns the old value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{IniMap, Value};
    ///
    /// let mut map = IniMap::new();
    /// assert!(map.insert("key".to_string(), Value::from("a")).is_none());
    /// assert!(map.insert("key".to_string(), Value::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini::{IniMap, Value};
    ///
    /// let mut map: IniMap = vec![
    ///     ("a".to_string(), Value::from("1")),
    ///     ("b".to_string(), Value::from("2")),
    ///     ("c".to_string(), Value::from("3")),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(map.remove("a"), Some(Value::from("1")));
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["b", "c"]);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Gets the entry for `key` for in-place manipulation.
    pub fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, crate::Value> {
        self.0.entry(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, crate::Value> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, crate::Value>> for IniMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        IniMap(map.into_iter().collect())
    }
}

impl From<IniMap> for HashMap<String, crate::Value> {
    fn from(map: IniMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for IniMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for IniMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        IniMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_equality_ignores_order() {
        let mut a = IniMap::new();
        a.insert("x".to_string(), Value::from("1"));
        a.insert("y".to_string(), Value::from("2"));

        let mut b = IniMap::new();
        b.insert("y".to_string(), Value::from("2"));
        b.insert("x".to_string(), Value::from("1"));

        assert_eq!(a, b);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = IniMap::new();
        map.insert("a".to_string(), Value::from("1"));
        map.insert("b".to_string(), Value::from("2"));
        map.insert("a".to_string(), Value::from("3"));

        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(pairs, vec![("a", Value::from("3")), ("b", Value::from("2"))]);
    }

    #[test]
    fn test_hashmap_conversions() {
        let mut source = HashMap::new();
        source.insert("k".to_string(), Value::Bool(true));

        let map = IniMap::from(source);
        assert_eq!(map.get("k"), Some(&Value::Bool(true)));

        let back: HashMap<String, Value> = map.into();
        assert_eq!(back.len(), 1);
    }
}
