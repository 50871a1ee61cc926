/// Builds a [`Record`](crate::Record) from `"key": value` pairs.
///
/// `null` produces a missing-field marker; any other value is converted with
/// `to_string()`, so numbers and string literals both work. Keys keep the
/// order they are written in.
///
/// # Examples
///
/// ```rust
/// use tabjson::record;
///
/// let row = record!({ "A": "3", "B": null, "C": 7 });
/// assert_eq!(row.get_str("A"), Some("3"));
/// assert_eq!(row.get("B"), Some(&None));
/// assert_eq!(row.get_str("C"), Some("7"));
/// ```
#[macro_export]
macro_rules! record {
    // Handle null
    (@value null) => {
        ::core::option::Option::None
    };

    (@value $value:expr) => {
        ::core::option::Option::Some(::std::string::ToString::to_string(&$value))
    };

    // Handle empty record
    ({}) => {
        $crate::Record::new()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(
                ::std::string::ToString::to_string(&$key),
                $crate::record!(@value $value),
            );
        )*
        record
    }};
}
