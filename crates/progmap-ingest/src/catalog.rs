//! Reference-list loading.
//!
//! The canonical program list arrives either as plain text (one program per
//! line) or pasted straight out of a Power BI measure as a DAX DATATABLE
//! literal. The DAX path extracts the first quoted value of each row; when
//! no rows match, parsing falls back to line-per-program, so malformed DAX
//! degrades gracefully instead of erroring.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::info;

use progmap_model::ProgramCatalog;

/// Rows shaped `{"Program Name", "Type"}`; the program name is the first
/// quoted value.
static DAX_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\s*"([^"]+)"\s*,\s*"([^"]+)"\s*\}"#).expect("valid DAX row pattern")
});

/// Which parsing strategy produced a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// One program per line.
    Lines,
    /// Names extracted from DAX DATATABLE rows.
    DaxDatatable,
}

/// Extracts program names from DAX DATATABLE text.
///
/// Returns `None` when the text contains no DATATABLE row pattern at all,
/// letting the caller fall back to line parsing.
pub fn parse_dax_datatable(text: &str) -> Option<Vec<String>> {
    let programs: Vec<String> = DAX_ROW
        .captures_iter(text)
        .map(|row| row[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if programs.is_empty() { None } else { Some(programs) }
}

/// Parses reference-list text into a catalog, trying DAX extraction first
/// and falling back to one-program-per-line.
pub fn parse_catalog(text: &str) -> (ProgramCatalog, CatalogFormat) {
    if let Some(programs) = parse_dax_datatable(text) {
        return (ProgramCatalog::new(programs), CatalogFormat::DaxDatatable);
    }
    (ProgramCatalog::new(text.lines()), CatalogFormat::Lines)
}

/// Loads the reference list from a file.
///
/// An empty resulting catalog is not an error here; matching against it
/// simply classifies every input as unmapped.
pub fn load_catalog(path: &Path) -> Result<(ProgramCatalog, CatalogFormat)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read reference list: {}", path.display()))?;
    let (catalog, format) = parse_catalog(&text);
    info!(
        path = %path.display(),
        programs = catalog.len(),
        format = ?format,
        "loaded program catalog"
    );
    Ok((catalog, format))
}
