//! In-memory representation of a loaded tabular export.

use serde::{Deserialize, Serialize};

/// A loaded source table: header names plus row-major cell values.
///
/// Loaders guarantee each row has exactly `headers.len()` cells (short rows
/// are padded with empty strings, long rows truncated).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a header by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value for a row index and field name. Missing columns and
    /// out-of-range rows read as `None`.
    pub fn value(&self, row: usize, field: &str) -> Option<&str> {
        let col = self.column_index(field)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// All values of one column in row order. Empty when the column is unknown.
    pub fn column_values(&self, field: &str) -> Vec<&str> {
        match self.column_index(field) {
            Some(col) => self
                .rows
                .iter()
                .map(|row| row.get(col).map(String::as_str).unwrap_or(""))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
