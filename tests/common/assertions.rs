//! Domain-specific assertion macros for eximtw harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! field of which record was wrong.

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a TSV record has exactly the expected fields.
///
/// ```rust
/// assert_record!(out, ["arrival", "alice@example.com", "30600"]);
/// ```
#[macro_export]
macro_rules! assert_record {
    ($record:expr, [$($field:expr),* $(,)?]) => {{
        let record: &str = &$record;
        let actual: Vec<&str> = record.split('\t').collect();
        let expected: Vec<&str> = vec![$($field),*];
        pretty_assertions::assert_eq!(actual, expected, "record: {:?}", record);
    }};
}

/// Assert the value of one TSV field, by index.
///
/// ```rust
/// assert_record_field!(out, 4, "mail.example.com");
/// ```
#[macro_export]
macro_rules! assert_record_field {
    ($record:expr, $index:expr, $value:expr) => {{
        let record: &str = &$record;
        let index: usize = $index;
        let expected: &str = $value;
        match record.split('\t').nth(index) {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_record_field! failed:\n  field[{}]\n  expected: {:?}\n  actual:   {:?}\n  record: {:?}",
                index, expected, actual, record
            ),
            None => panic!(
                "assert_record_field! failed: record has no field {}.\n  record: {:?}",
                index, record
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Offset helpers
// ---------------------------------------------------------------------------

/// Parse the trailing offset of a TSV record; `None` for `unknown`.
pub fn record_offset(record: &str) -> Option<i64> {
    let last = record.rsplit('\t').next().unwrap_or_default();
    if last == "unknown" {
        None
    } else {
        Some(last.parse().unwrap_or_else(|_| panic!("offset {last:?} is not an integer")))
    }
}
