//! The parsed table: header row plus ordered records.
//!
//! A [`Table`] serializes as a plain sequence of records, which is what ends up
//! in the JSON output. The header row is kept alongside so callers can see the
//! column names as they were read, including duplicates and names that only
//! ever mapped to null.

use crate::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered records produced from table text.
///
/// # Examples
///
/// ```rust
/// use tabjson::parse_table;
///
/// let table = parse_table("A\tB\n1\t2\n3", "\t").unwrap();
/// assert_eq!(table.headers(), ["A", "B"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[1].get("B"), Some(&None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Record>) -> Self {
        Table { headers, rows }
    }

    /// Column names in the order they appeared on the header line.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of records (the header line is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.rows)
    }
}

impl<'de> Deserialize<'de> for Table {
    /// Reads a sequence of records. JSON carries no separate header row, so
    /// the first record's keys stand in for it.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Record>::deserialize(deserializer)?;
        let headers = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Ok(Table { headers, rows })
    }
}
