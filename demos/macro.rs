//! Building expected records with the record! macro.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use tabjson::{parse_table, record};

fn main() -> Result<(), Box<dyn Error>> {
    let table = parse_table("A\tB\n1\t2\n3", "\t")?;

    let expected = [
        record!({ "A": 1, "B": 2 }),
        record!({ "A": 3, "B": null }),
    ];
    assert_eq!(table.rows(), expected);

    for row in &expected {
        println!("{}", serde_json::to_string(row)?);
    }
    println!("✓ Parsed rows match");

    Ok(())
}
