//! Record normalization
//!
//! Shapes an incoming submission payload into one row matching a sheet's
//! header row, column by column. The output always has exactly as many
//! cells as there are headers: unknown headers normalize to the empty
//! string, so schema drift in either direction never causes a failure.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Column filled with the server-side submission time
pub const TIMESTAMP_HEADER: &str = "Timestamp";

/// Canonical header row for a fresh responses sheet: timestamp, the 16
/// survey fields, and the badge
pub const RESPONSE_HEADERS: &[&str] = &[
    TIMESTAMP_HEADER,
    "age",
    "gender",
    "federation",
    "hobbies",
    "interests",
    "sportingActivity",
    "spiritual",
    "mission",
    "skills",
    "fun",
    "speakers",
    "programItems",
    "lifeSkills",
    "hope",
    "otherIssues",
    "prizeDrawEntry",
    "badge",
];

/// Default headers as owned strings, for sheet creation
pub fn default_headers() -> Vec<String> {
    RESPONSE_HEADERS.iter().map(|h| h.to_string()).collect()
}

/// Normalize `payload` into a row conforming to `headers`
///
/// Per-column rules: the timestamp column gets `now`; arrays join their
/// members with ", "; booleans map to Yes/No; strings and numbers pass
/// through; anything absent, null, or unrecognized becomes "".
pub fn normalize(headers: &[String], payload: &Value, now: DateTime<Utc>) -> Vec<String> {
    headers
        .iter()
        .map(|header| {
            if header == TIMESTAMP_HEADER {
                return now.to_rfc3339_opts(SecondsFormat::Secs, true);
            }
            match payload.get(header) {
                Some(Value::Array(items)) => items
                    .iter()
                    .map(cell_text)
                    .collect::<Vec<_>>()
                    .join(", "),
                Some(Value::Bool(flag)) => if *flag { "Yes" } else { "No" }.to_string(),
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            }
        })
        .collect()
}

/// Text form of one array member
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let row = normalize(
            &headers(&["Timestamp", "age", "prizeDrawEntry", "badge"]),
            &json!({"age": "18", "prizeDrawEntry": true, "badge": "Trailblazer"}),
            now(),
        );
        assert_eq!(row, vec!["2026-03-01T12:00:00Z", "18", "Yes", "Trailblazer"]);
    }

    #[test]
    fn test_arrays_join_with_comma_space() {
        let row = normalize(
            &headers(&["mission"]),
            &json!({"mission": ["cleanup", "feed"]}),
            now(),
        );
        assert_eq!(row, vec!["cleanup, feed"]);
    }

    #[test]
    fn test_empty_array_and_false_and_missing() {
        let row = normalize(
            &headers(&["spiritual", "prizeDrawEntry", "hope", "notAColumn"]),
            &json!({"spiritual": [], "prizeDrawEntry": false}),
            now(),
        );
        assert_eq!(row, vec!["", "No", "", ""]);
    }

    #[test]
    fn test_null_normalizes_to_empty() {
        let row = normalize(&headers(&["hope"]), &json!({"hope": null}), now());
        assert_eq!(row, vec![""]);
    }

    #[test]
    fn test_older_shorter_header_still_fits() {
        // A sheet created before badge existed keeps its 3 columns
        let row = normalize(
            &headers(&["Timestamp", "age", "gender"]),
            &json!({"age": "20", "gender": "Female", "badge": "Builder"}),
            now(),
        );
        assert_eq!(row.len(), 3);
        assert_eq!(row[2], "Female");
    }

    proptest! {
        /// Output length equals header length for any payload shape
        #[test]
        fn prop_row_length_matches_headers(
            header_names in proptest::collection::vec("[A-Za-z]{1,12}", 0..24),
            age in proptest::option::of(0u8..120),
            entered in any::<bool>(),
        ) {
            let hdrs: Vec<String> = header_names;
            let payload = json!({
                "age": age.map(|a| a.to_string()),
                "prizeDrawEntry": entered,
            });
            let row = normalize(&hdrs, &payload, Utc::now());
            prop_assert_eq!(row.len(), hdrs.len());
        }
    }
}
