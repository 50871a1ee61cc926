//! JSON rendering.
//!
//! Tables render as an indented JSON array of objects. Keys keep header order,
//! rows keep input order, and non-ASCII text is written as-is rather than as
//! `\u` escapes.
//!
//! ```rust
//! use tabjson::{parse_table, to_string_pretty};
//!
//! let table = parse_table("Город\nКазань", "\t").unwrap();
//! let json = to_string_pretty(&table).unwrap();
//! assert_eq!(json, "[\n  {\n    \"Город\": \"Казань\"\n  }\n]");
//! ```

use crate::{Result, Table, TableOptions};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;

/// Writes JSON for any `T: Serialize` with the given indentation width.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer fails.
pub fn write_json<W, T>(writer: W, value: &T, indent: usize) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Renders a table to a JSON string using the indentation from `options`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(table: &Table, options: &TableOptions) -> Result<String> {
    let mut buf = Vec::with_capacity(256);
    write_json(&mut buf, table, options.indent)?;
    String::from_utf8(buf).map_err(crate::Error::custom)
}
