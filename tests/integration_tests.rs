use tabjson::{
    from_json_str, parse_table, parse_table_with_options, record, to_string_pretty,
    to_string_with_options, write_to_path, Delimiter, Error, TableOptions,
};

const SAMPLE: &str = "Имя\tВозраст\tГород
Иван\t25\tМосква
Анна\t30\tСанкт-Петербург
Петр\t35\tКазань";

#[test]
fn test_exact_width_row() {
    let table = parse_table("id\tname\tactive\n 7 \t Alice \ttrue", "\t").unwrap();
    assert_eq!(table.len(), 1);

    let row = &table.rows()[0];
    let keys: Vec<_> = row.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "name", "active"]);
    assert_eq!(row, &record!({ "id": "7", "name": "Alice", "active": "true" }));
}

#[test]
fn test_short_and_long_rows() {
    let table = parse_table("A\tB\tC\n1\n1\t2\t3\t4\t5", "\t").unwrap();
    assert_eq!(table.rows()[0], record!({ "A": "1", "B": null, "C": null }));
    assert_eq!(table.rows()[1], record!({ "A": "1", "B": "2", "C": "3" }));
}

#[test]
fn test_blank_line_between_rows() {
    let table = parse_table("A\tB\n1\t2\n \t \n\n3\t4", "\t").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1].get_str("A"), Some("3"));
}

#[test]
fn test_two_record_scenario() {
    let table = parse_table("A\tB\n1\t2\n3", "\t").unwrap();
    assert_eq!(
        table.rows(),
        [record!({ "A": "1", "B": "2" }), record!({ "A": "3", "B": null })]
    );

    let compact = serde_json::to_string(&table).unwrap();
    assert_eq!(compact, r#"[{"A":"1","B":"2"},{"A":"3","B":null}]"#);
}

#[test]
fn test_sample_table() {
    let table = parse_table(SAMPLE, "\t").unwrap();
    assert_eq!(table.headers(), ["Имя", "Возраст", "Город"]);
    assert_eq!(table.len(), 3);
    for row in &table {
        let keys: Vec<_> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Имя", "Возраст", "Город"]);
    }
    assert_eq!(table.rows()[1].get_str("Город"), Some("Санкт-Петербург"));

    let json = to_string_pretty(&table).unwrap();
    assert!(json.contains("\"Имя\": \"Иван\""));
    assert!(json.contains("\"Город\": \"Казань\""));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_empty_input() {
    let table = parse_table("", "\t").unwrap();
    assert!(table.is_empty());
    assert_eq!(to_string_pretty(&table).unwrap(), "[]");

    let table = parse_table("  \n \n", "\t").unwrap();
    assert_eq!(to_string_pretty(&table).unwrap(), "[]");
}

#[test]
fn test_empty_delimiter() {
    assert!(matches!(parse_table("A\n1", ""), Err(Error::EmptyDelimiter)));
}

#[test]
fn test_json_round_trip_preserves_order() {
    let table = parse_table("zeta\talpha\tmid\n1\t2\t3\n4\n\n5\t6\t7\t8", "\t").unwrap();
    let json = to_string_pretty(&table).unwrap();
    let back = from_json_str(&json).unwrap();

    assert_eq!(back.rows(), table.rows());
    for (a, b) in back.iter().zip(table.iter()) {
        assert!(a.iter().eq(b.iter()));
    }
}

#[test]
fn test_options() {
    let options = TableOptions::new()
        .with_delimiter(Delimiter::Comma)
        .with_indent(4);
    let table = parse_table_with_options("a, b\n1, 2", &options).unwrap();
    let json = to_string_with_options(&table, &options).unwrap();
    assert_eq!(json, "[\n    {\n        \"a\": \"1\",\n        \"b\": \"2\"\n    }\n]");
}

#[test]
fn test_write_to_path_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.json");
    std::fs::write(&path, "previous content that is longer than the new document").unwrap();

    let table = parse_table(SAMPLE, "\t").unwrap();
    write_to_path(&path, &table, &TableOptions::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_string_pretty(&table).unwrap());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("table.json");
    let table = parse_table("A\n1", "\t").unwrap();

    let err = write_to_path(&path, &table, &TableOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
