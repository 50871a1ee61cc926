//! Property-based tests for the parsing guarantees that must hold for any
//! table text, not just the handwritten fixtures.

use proptest::prelude::*;
use tabjson::{from_json_str, parse_table, to_string_pretty};

// Header names and values: no tabs or newlines, no surrounding whitespace,
// unique names so every header yields its own key.
fn cell() -> impl Strategy<Value = String> {
    "[a-zA-Zа-яА-Я0-9_.-]{1,8}"
}

fn headers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(cell(), 1..6).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_row_width_always_matches_header(
        headers in headers(),
        rows in prop::collection::vec(prop::collection::vec(cell(), 1..10), 1..8),
    ) {
        let mut text = headers.join("\t");
        for row in &rows {
            text.push('\n');
            text.push_str(&row.join("\t"));
        }

        let table = parse_table(&text, "\t").unwrap();
        prop_assert_eq!(table.len(), rows.len());

        for (record, row) in table.iter().zip(&rows) {
            let keys: Vec<_> = record.keys().cloned().collect();
            prop_assert_eq!(&keys, &headers);
            for (i, header) in headers.iter().enumerate() {
                prop_assert_eq!(record.get_str(header), row.get(i).map(String::as_str));
            }
        }
    }

    #[test]
    fn prop_blank_lines_add_no_records(
        headers in headers(),
        rows in prop::collection::vec(prop::collection::vec(cell(), 1..5), 0..6),
        blanks in prop::collection::vec("[ \t]{0,3}", 0..4),
    ) {
        let mut plain = headers.join("\t");
        let mut padded = plain.clone();
        for row in &rows {
            let line = row.join("\t");
            plain.push('\n');
            plain.push_str(&line);
            for blank in &blanks {
                padded.push('\n');
                padded.push_str(blank);
            }
            padded.push('\n');
            padded.push_str(&line);
        }

        let a = parse_table(&plain, "\t").unwrap();
        let b = parse_table(&padded, "\t").unwrap();
        prop_assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn prop_json_round_trip(
        headers in headers(),
        rows in prop::collection::vec(prop::collection::vec(cell(), 1..6), 0..6),
    ) {
        let mut text = headers.join("\t");
        for row in &rows {
            text.push('\n');
            text.push_str(&row.join("\t"));
        }

        let table = parse_table(&text, "\t").unwrap();
        let json = to_string_pretty(&table).unwrap();
        let back = from_json_str(&json).unwrap();
        prop_assert_eq!(back.rows(), table.rows());
    }
}
