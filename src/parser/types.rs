use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One decoded record from an import, keyed by column header.
///
/// Column sets vary between exports, so a row carries no schema: the same
/// logical field may appear under several spellings, and absence of a key
/// is normal. Fields are validated at the point of use, never at ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(HashMap<String, String>);

impl Row {
    pub fn new() -> Self {
        Row(HashMap::new())
    }

    /// Builds a row from literal (column, value) pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Row(pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect())
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Raw cell lookup. Empty cells are stored as empty strings, so a
    /// present-but-blank column returns `Some("")`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Cell lookup that treats blank cells like absent columns.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column names present in this row, in no particular order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Output of a decode pass — carries the rows and import metadata.
#[derive(Debug)]
pub struct ParseOutput {
    pub rows: Vec<Row>,
    pub warnings: Vec<ParseWarning>,
    pub total_rows_processed: usize,
    pub skipped_rows: usize,
    pub detected_columns: Vec<String>,
    pub parse_duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseWarning {
    pub line: usize,
    pub message: String,
}
