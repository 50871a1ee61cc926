//! Parse a tab-separated table and print it as JSON.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use tabjson::{from_json_str, parse_table, to_string_pretty};

fn main() -> Result<(), Box<dyn Error>> {
    let text = "Имя\tВозраст\tГород
Иван\t25\tМосква
Анна\t30\tСанкт-Петербург
Петр\t35\tКазань";

    let table = parse_table(text, "\t")?;
    println!("Columns: {:?}", table.headers());

    let json = to_string_pretty(&table)?;
    println!("JSON output:\n{}\n", json);

    // Read the JSON back
    let back = from_json_str(&json)?;
    assert_eq!(back.rows(), table.rows());
    println!("✓ Round-trip successful");

    Ok(())
}
