//! How short rows, long rows and blank lines are handled.
//!
//! Run with: cargo run --example ragged_rows

use std::error::Error;
use tabjson::{parse_table, to_string_pretty};

fn main() -> Result<(), Box<dyn Error>> {
    let text = "A\tB\tC
1\t2\t3
4

5\t6\t7\t8\t9";

    let table = parse_table(text, "\t")?;

    // Short row: B and C become null. Long row: 8 and 9 are dropped.
    // The blank line contributes nothing.
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[1].get("C"), Some(&None));
    assert_eq!(table.rows()[2].len(), 3);

    println!("{}", to_string_pretty(&table)?);
    Ok(())
}
