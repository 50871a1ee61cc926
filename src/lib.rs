//! # tabjson
//!
//! Turns delimiter-separated table text (a header line followed by data lines)
//! into an ordered list of records and renders it as indented JSON.
//!
//! ## Key Features
//!
//! - **Lenient**: Short rows are padded with `null`, long rows are truncated,
//!   blank lines are skipped. Table text never fails to parse.
//! - **Order Preserving**: Keys follow the header line, records follow the input
//! - **Unicode Friendly**: Non-ASCII text is written to JSON literally
//! - **Any Delimiter**: Tab by default; comma, pipe, semicolon or any non-empty substring
//!
//! ## Quick Start
//!
//! ```rust
//! use tabjson::{parse_table, to_string_pretty};
//!
//! let table = parse_table("A\tB\n1\t2\n3", "\t").unwrap();
//! assert_eq!(table.len(), 2);
//!
//! let json = to_string_pretty(&table).unwrap();
//! // [
//! //   { "A": "1", "B": "2" },
//! //   { "A": "3", "B": null }
//! // ]
//! assert!(json.contains("\"B\": null"));
//! ```
//!
//! ### Custom Delimiters
//!
//! ```rust
//! use tabjson::{parse_table_with_options, Delimiter, TableOptions};
//!
//! let options = TableOptions::new().with_delimiter(Delimiter::Pipe);
//! let table = parse_table_with_options("id | name\n1 | Alice", &options).unwrap();
//! assert_eq!(table.rows()[0].get_str("name"), Some("Alice"));
//! ```
//!
//! ### Writing the Output File
//!
//! ```rust,no_run
//! use tabjson::{parse_table, write_to_path, TableOptions};
//!
//! let table = parse_table("Имя\tГород\nИван\tМосква", "\t").unwrap();
//! write_to_path("table.json", &table, &TableOptions::default()).unwrap();
//! ```
//!
//! ## Edge Cases
//!
//! - Empty or whitespace-only input yields an empty table (`[]`), with no headers
//! - An empty delimiter is rejected with [`Error::EmptyDelimiter`]
//! - Duplicate header names collapse to one key holding the last column's value
//! - Only `\n` separates lines; a trailing `\r` is removed by field trimming

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod table;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::Record;
pub use options::{Delimiter, TableOptions};
pub use table::Table;

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse table text split by `delimiter`.
///
/// # Examples
///
/// ```rust
/// use tabjson::parse_table;
///
/// let table = parse_table("A,B\n1,2", ",").unwrap();
/// assert_eq!(table.rows()[0].get_str("B"), Some("2"));
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyDelimiter`] if `delimiter` is empty. Nothing about the
/// text itself is an error.
pub fn parse_table(text: &str, delimiter: &str) -> Result<Table> {
    parse_table_with_options(text, &TableOptions::new().with_delimiter(delimiter))
}

/// Parse table text using the delimiter from `options`.
///
/// # Errors
///
/// Returns [`Error::EmptyDelimiter`] if the configured delimiter is empty.
pub fn parse_table_with_options(text: &str, options: &TableOptions) -> Result<Table> {
    let table = Parser::new(text, options)?.parse();
    debug!(
        rows = table.len(),
        columns = table.headers().len(),
        delimiter = %options.delimiter,
        "parsed table"
    );
    Ok(table)
}

/// Read all of `reader` and parse it as table text.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the delimiter
/// is empty.
pub fn from_reader<R>(mut reader: R, options: &TableOptions) -> Result<Table>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string).map_err(Error::io)?;
    parse_table_with_options(&string, options)
}

/// Parse table text from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the delimiter is empty.
pub fn from_slice(v: &[u8], options: &TableOptions) -> Result<Table> {
    let s = std::str::from_utf8(v).map_err(|e| {
        Error::custom(format!("invalid UTF-8 at byte {}", e.valid_up_to()))
    })?;
    parse_table_with_options(s, options)
}

/// Render a table as JSON with 2-space indentation.
///
/// # Errors
///
/// Returns an error if the table cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(table: &Table) -> Result<String> {
    ser::render(table, &TableOptions::default())
}

/// Render a table as JSON using the indentation width from `options`.
///
/// # Errors
///
/// Returns an error if the table cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(table: &Table, options: &TableOptions) -> Result<String> {
    ser::render(table, options)
}

/// Render a table as JSON into `writer`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn to_writer<W>(writer: W, table: &Table, options: &TableOptions) -> Result<()>
where
    W: io::Write,
{
    ser::write_json(writer, table, options.indent)
}

/// Render a table and write it to `path`, replacing any existing content.
///
/// The whole document is rendered first and written in one call, as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_to_path<P>(path: P, table: &Table, options: &TableOptions) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = ser::render(table, options)?;
    fs::write(path, json.as_bytes())
        .map_err(|e| Error::io(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = json.len(), "wrote table json");
    Ok(())
}

/// Read a table back from its JSON rendering.
///
/// Key order, value order and row order are preserved. The header row is
/// taken from the first record's keys.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not an array of objects whose
/// values are strings or null.
pub fn from_json_str(s: &str) -> Result<Table> {
    Ok(serde_json::from_str(s)?)
}
