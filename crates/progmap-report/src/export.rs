//! Export writers.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use csv::Writer;
use tracing::info;

use progmap_ingest::DetectedColumns;
use progmap_match::MappingSession;
use progmap_model::{SourceTable, StatusFilter};

/// Date-stamped default name for the contact export.
pub fn default_export_filename() -> String {
    format!("mapped_programs_{}.csv", Local::now().format("%Y-%m-%d"))
}

/// Writes the contact-level export: one row per source row, with contact
/// id and email carried over and the program cell rewritten to its mapped
/// canonical name (falling back to the original trimmed value).
///
/// Missing role columns produce empty cells rather than an error, so a
/// file without an email column still exports.
pub fn write_mapped_csv(
    path: &Path,
    table: &SourceTable,
    session: &MappingSession,
    columns: &DetectedColumns,
    program_field: &str,
) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create export: {}", path.display()))?;

    let contact_col = columns
        .contact_id
        .as_deref()
        .and_then(|header| table.column_index(header));
    let email_col = columns
        .email
        .as_deref()
        .and_then(|header| table.column_index(header));
    let program_col = table.column_index(program_field);

    writer.write_record(["ID Contacto", "Email", "Programa"])?;
    let rows = session.export_rows(table, program_field);
    for row in &rows {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .map(String::as_str)
                .unwrap_or("")
        };
        writer.write_record([cell(contact_col), cell(email_col), cell(program_col)])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush export: {}", path.display()))?;

    info!(path = %path.display(), rows = rows.len(), "wrote contact export");
    Ok(())
}

/// Writes the review export: one row per distinct input value matching the
/// status filter, with its decision, score, and occurrence count.
pub fn write_review_csv(path: &Path, session: &MappingSession, filter: StatusFilter) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create review: {}", path.display()))?;

    writer.write_record(["Input", "Mapped To", "Score", "Status", "Occurrences"])?;
    let rows = session.query(filter);
    for row in &rows {
        let score = row.mapping.score.to_string();
        let occurrences = row.occurrences.to_string();
        writer.write_record([
            row.input,
            row.mapping.mapped_to.as_deref().unwrap_or(""),
            score.as_str(),
            row.mapping.status.label(),
            occurrences.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush review: {}", path.display()))?;

    info!(path = %path.display(), rows = rows.len(), "wrote review export");
    Ok(())
}
