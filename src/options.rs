//! Configuration options for table parsing and JSON output.
//!
//! This module provides types to customize how table text is read and how
//! the resulting records are rendered:
//!
//! - [`TableOptions`]: Main configuration struct
//! - [`Delimiter`]: The field separator (tab, comma, pipe, semicolon, or any non-empty string)
//!
//! ## Examples
//!
//! ```rust
//! use tabjson::{parse_table_with_options, to_string_with_options, Delimiter, TableOptions};
//!
//! let options = TableOptions::new()
//!     .with_delimiter(Delimiter::Comma)
//!     .with_indent(4);
//!
//! let table = parse_table_with_options("id,name\n1,Alice", &options).unwrap();
//! let json = to_string_with_options(&table, &options).unwrap();
//! assert!(json.contains("    {"));
//! ```

use crate::{Error, Result};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Field separator used to split each line of table text.
///
/// - **Tab**: Default, matches text copied out of spreadsheets
/// - **Comma**: CSV-like input (no quoting rules are applied)
/// - **Pipe**: Markdown-ish tables
/// - **Semicolon**: Locales that use comma as the decimal separator
/// - **Custom**: Any other substring, possibly several characters long
///
/// # Examples
///
/// ```rust
/// use tabjson::Delimiter;
///
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Custom("::".into()).as_str(), "::");
/// assert_eq!("|".parse::<Delimiter>().unwrap(), Delimiter::Pipe);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
    Pipe,
    Semicolon,
    Custom(String),
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Tab => "\t",
            Delimiter::Comma => ",",
            Delimiter::Pipe => "|",
            Delimiter::Semicolon => ";",
            Delimiter::Custom(s) => s.as_str(),
        }
    }

    /// Checks that the delimiter can split a line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDelimiter`] for `Delimiter::Custom("")`.
    pub fn validate(&self) -> Result<()> {
        if self.as_str().is_empty() {
            return Err(Error::EmptyDelimiter);
        }
        Ok(())
    }
}

impl From<&str> for Delimiter {
    fn from(s: &str) -> Self {
        match s {
            "\t" => Delimiter::Tab,
            "," => Delimiter::Comma,
            "|" => Delimiter::Pipe,
            ";" => Delimiter::Semicolon,
            other => Delimiter::Custom(other.to_string()),
        }
    }
}

impl FromStr for Delimiter {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Delimiter::from(s))
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().escape_default().to_string())
    }
}

/// Configuration for parsing table text and rendering it as JSON.
///
/// # Examples
///
/// ```rust
/// use tabjson::{TableOptions, Delimiter};
///
/// // Tab-separated input, 2-space JSON indentation
/// let options = TableOptions::new();
/// assert_eq!(options.delimiter, Delimiter::Tab);
/// assert_eq!(options.indent, 2);
///
/// // Custom configuration
/// let options = TableOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_indent(4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub delimiter: Delimiter,
    pub indent: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            delimiter: Delimiter::default(),
            indent: 2,
        }
    }
}

impl TableOptions {
    /// Creates default options (tab delimiter, 2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    ///
    /// Anything convertible into a [`Delimiter`] is accepted, so plain string
    /// slices work too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabjson::{TableOptions, Delimiter};
    ///
    /// let options = TableOptions::new().with_delimiter(";");
    /// assert_eq!(options.delimiter, Delimiter::Semicolon);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the JSON indentation width (number of spaces per level).
    ///
    /// Default is 2.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
