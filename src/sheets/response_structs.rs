//! Payloads of the Google Sheets `values` API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `values.get` responses and of `values.append`/`values.update` requests.
///
/// ```json
/// {
///   "range": "books_master!A1:G3",
///   "majorDimension": "ROWS",
///   "values": [["id", "created_at"], ["1", "2024-01-01 10:00:00"]]
/// }
/// ```
///
/// `values` is omitted by the API when the range is empty.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Request body holding a single row.
    pub fn from_row(row: Vec<String>) -> Self {
        ValueRange {
            range: None,
            major_dimension: Some("ROWS".to_owned()),
            values: vec![row.into_iter().map(Value::String).collect()],
        }
    }

    /// Converts every cell into its string representation.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
