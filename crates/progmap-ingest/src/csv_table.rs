//! CSV loading into a [`SourceTable`].
//!
//! Form-submission exports are messy: some carry banner rows above the real
//! header, cells arrive with BOMs and stray whitespace, and row widths vary.
//! The reader tolerates all of that, locates the header row among the first
//! few rows, and pads every data row to header width.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use progmap_model::SourceTable;

/// How many leading rows are probed when locating the header.
const HEADER_PROBE_ROWS: usize = 5;

fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Share of non-empty cells that contain at least one alphabetic character.
fn alpha_ratio(row: &[String]) -> f64 {
    let non_empty: Vec<&String> = row.iter().filter(|cell| !cell.is_empty()).collect();
    if non_empty.is_empty() {
        return 0.0;
    }
    let alpha = non_empty
        .iter()
        .filter(|cell| cell.chars().any(char::is_alphabetic))
        .count();
    alpha as f64 / non_empty.len() as f64
}

fn non_empty_ratio(row: &[String]) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    let non_empty = row.iter().filter(|cell| !cell.is_empty()).count();
    non_empty as f64 / row.len() as f64
}

fn numeric_ratio(row: &[String]) -> f64 {
    let non_empty: Vec<&String> = row.iter().filter(|cell| !cell.is_empty()).collect();
    if non_empty.is_empty() {
        return 0.0;
    }
    let numeric = non_empty
        .iter()
        .filter(|cell| cell.parse::<f64>().is_ok())
        .count();
    numeric as f64 / non_empty.len() as f64
}

fn looks_like_header(row: &[String]) -> bool {
    non_empty_ratio(row) >= 0.8 && alpha_ratio(row) >= 0.5 && numeric_ratio(row) <= 0.1
}

/// Picks the header row index: the first header-like row among the leading
/// rows, defaulting to the first row. Banner rows above the real header are
/// mostly empty, so they fail the header test and get skipped.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let probe = rows.len().min(HEADER_PROBE_ROWS);
    rows[..probe]
        .iter()
        .position(|row| looks_like_header(row))
        .unwrap_or(0)
}

/// Reads a CSV file into a [`SourceTable`].
///
/// Fully-empty records are dropped, the header row is detected among the
/// leading rows, and every data row is sized to the header width. An empty
/// file yields an empty table rather than an error.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(clean_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Ok(SourceTable::default());
    }

    let header_index = detect_header_row(&raw_rows);
    debug!(
        path = %path.display(),
        header_index,
        rows = raw_rows.len(),
        "loaded csv table"
    );
    let headers = raw_rows[header_index].clone();

    let rows = raw_rows
        .into_iter()
        .skip(header_index + 1)
        .map(|mut row| {
            row.resize(headers.len(), String::new());
            row
        })
        .collect();

    Ok(SourceTable::new(headers, rows))
}
