//! Error types for table parsing and JSON rendering.
//!
//! Parsing itself is lenient: short rows are padded with nulls and long rows
//! are truncated, so malformed table text never produces an error. What can
//! fail is configuration (an empty delimiter), reading input, and writing or
//! reading JSON.
//!
//! ## Examples
//!
//! ```rust
//! use tabjson::{parse_table, Error};
//!
//! let result = parse_table("A\tB\n1\t2", "");
//! assert!(matches!(result, Err(Error::EmptyDelimiter)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The delimiter was the empty string
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    /// JSON rendering or JSON input failed
    #[error("JSON error: {0}")]
    Json(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabjson::Error;
    ///
    /// let err = Error::io("permission denied");
    /// assert_eq!(err.to_string(), "IO error: permission denied");
    /// ```
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a JSON error from a `serde_json` failure or a message.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabjson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::io(err)
        } else {
            Error::json(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
