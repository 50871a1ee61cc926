//! Ordered record type for parsed table rows.
//!
//! This module provides [`Record`], a wrapper around [`IndexMap`] that maintains
//! insertion order for the fields of one data row. Field order is the header
//! order, and JSON output must reproduce it exactly.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: Keys serialize in header order, not hash order
//! - **Duplicate headers**: Re-inserting a key keeps its first position and
//!   replaces the value, so the last column with a given name wins
//!
//! ## Examples
//!
//! ```rust
//! use tabjson::Record;
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), Some("Alice".to_string()));
//! record.insert("city".to_string(), None);
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get_str("name"), Some("Alice"));
//! assert_eq!(record.get("city"), Some(&None));
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One data row: header name to trimmed field value, or `None` when the row
/// ran out of fields before the header did.
///
/// # Examples
///
/// ```rust
/// use tabjson::Record;
///
/// let mut record = Record::new();
/// record.insert("first".to_string(), Some("1".to_string()));
/// record.insert("second".to_string(), Some("2".to_string()));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = record.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(IndexMap<String, Option<String>>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field.
    ///
    /// If the record already contained this key, the key keeps its position,
    /// the value is replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabjson::Record;
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("A".to_string(), Some("1".to_string())).is_none());
    /// assert_eq!(
    ///     record.insert("A".to_string(), Some("2".to_string())),
    ///     Some(Some("1".to_string()))
    /// );
    /// ```
    pub fn insert(&mut self, key: String, value: Option<String>) -> Option<Option<String>> {
        self.0.insert(key, value)
    }

    /// Returns the field stored under `key`.
    ///
    /// The outer `Option` tells whether the key exists at all; the inner one is
    /// the null marker.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.0.get(key)
    }

    /// Returns the field value as a string slice, or `None` if the key is
    /// missing or null.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the record, in header order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Option<String>> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the record, in header order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Option<String>> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the record, in header order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Option<String>> {
        self.0.iter()
    }
}

impl IntoIterator for Record {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Option<String>)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of string or null fields")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
                    record.insert(key, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
