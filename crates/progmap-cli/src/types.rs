//! Result types shared between command execution and summary printing.

use std::path::PathBuf;

use progmap_ingest::{CatalogFormat, DetectedColumns};
use progmap_model::{MatchStatus, SummaryCounts};

/// One displayed decision row.
pub struct ReviewRow {
    pub input: String,
    pub mapped_to: Option<String>,
    pub score: u8,
    pub status: MatchStatus,
    pub occurrences: usize,
}

/// Outcome of a `map` run.
pub struct MapResult {
    pub source: PathBuf,
    pub program_column: String,
    pub catalog_size: usize,
    pub catalog_format: CatalogFormat,
    pub source_rows: usize,
    pub distinct_values: usize,
    pub overrides_applied: usize,
    pub summary: SummaryCounts,
    /// Rows after status filtering, truncated to the display limit.
    pub rows: Vec<ReviewRow>,
    /// Filtered rows beyond the display limit.
    pub hidden_rows: usize,
    pub export: Option<PathBuf>,
    pub review: Option<PathBuf>,
}

/// Outcome of a `columns` run.
pub struct ColumnsResult {
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub columns: DetectedColumns,
    pub database_values: Vec<String>,
}

/// Outcome of a `programs` run.
pub struct ProgramsResult {
    pub source: PathBuf,
    pub format: CatalogFormat,
    pub programs: Vec<String>,
}
