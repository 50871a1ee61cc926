//! Table text parsing.
//!
//! This module provides the [`Parser`] that turns delimiter-separated text
//! into a [`Table`].
//!
//! ## Overview
//!
//! - **Header line**: the first line of the trimmed input names the columns
//! - **Blank lines**: whitespace-only lines after the header are skipped
//! - **Short rows**: missing trailing fields become `null`
//! - **Long rows**: fields beyond the header width are dropped
//!
//! None of these cases is an error. Rows are never rejected for having the
//! wrong width.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use tabjson::parse_table;
//!
//! let table = parse_table("A\tB\n1\t2\n3", "\t").unwrap();
//! assert_eq!(table.rows()[0].get_str("A"), Some("1"));
//! assert_eq!(table.rows()[1].get("B"), Some(&None));
//! ```

use crate::{Record, Result, Table, TableOptions};
use tracing::{debug, trace};

/// Parser for delimiter-separated table text.
///
/// Created via [`Parser::new`]; the delimiter is validated up front so
/// [`Parser::parse`] itself cannot fail.
pub struct Parser<'a> {
    input: &'a str,
    delimiter: &'a str,
}

impl<'a> Parser<'a> {
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyDelimiter`] if the configured delimiter is empty.
    pub fn new(input: &'a str, options: &'a TableOptions) -> Result<Self> {
        options.delimiter.validate()?;
        Ok(Parser {
            input,
            delimiter: options.delimiter.as_str(),
        })
    }

    fn split_fields(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        line.split(self.delimiter).map(str::trim)
    }

    pub fn parse(&self) -> Table {
        let text = self.input.trim();
        if text.is_empty() {
            return Table::default();
        }

        let mut lines = text.split('\n');
        let headers: Vec<String> = match lines.next() {
            Some(line) => self.split_fields(line).map(str::to_string).collect(),
            None => return Table::default(),
        };

        let mut rows = Vec::new();
        // Header is line 1.
        for (line_no, line) in (2..).zip(lines) {
            if line.trim().is_empty() {
                trace!(line = line_no, "skipping blank line");
                continue;
            }
            rows.push(self.parse_row(&headers, line, line_no));
        }

        Table::new(headers, rows)
    }

    fn parse_row(&self, headers: &[String], line: &'a str, line_no: usize) -> Record {
        let values: Vec<&str> = self.split_fields(line).collect();

        if values.len() < headers.len() {
            debug!(
                line = line_no,
                fields = values.len(),
                headers = headers.len(),
                "padding short row with nulls"
            );
        } else if values.len() > headers.len() {
            debug!(
                line = line_no,
                fields = values.len(),
                headers = headers.len(),
                "dropping fields beyond header width"
            );
        }

        let mut record = Record::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let value = values.get(i).map(|v| (*v).to_string());
            record.insert(header.clone(), value);
        }
        record
    }
}
