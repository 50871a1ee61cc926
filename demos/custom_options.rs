//! Customizing the delimiter and JSON indentation with TableOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use tabjson::{parse_table_with_options, to_string_with_options, Delimiter, TableOptions};

fn main() -> Result<(), Box<dyn Error>> {
    // Comma delimiter (no CSV quoting rules, fields are split verbatim)
    println!("Comma delimiter:");
    let options = TableOptions::new().with_delimiter(Delimiter::Comma);
    let table = parse_table_with_options("name, version\nMyApp, 1.0.0", &options)?;
    println!("{}\n", to_string_with_options(&table, &options)?);

    // Pipe delimiter with 4-space indentation
    println!("Pipe delimiter, indent 4:");
    let options = TableOptions::new()
        .with_delimiter(Delimiter::Pipe)
        .with_indent(4);
    let table = parse_table_with_options("id | value\n1 | test\n2 | prod", &options)?;
    println!("{}\n", to_string_with_options(&table, &options)?);

    // Multi-character delimiter
    println!("Custom delimiter (::):");
    let options = TableOptions::new().with_delimiter("::");
    let table = parse_table_with_options("key::value\nhost::localhost", &options)?;
    println!("{}", to_string_with_options(&table, &options)?);

    Ok(())
}
