//! Command execution.

use std::path::PathBuf;

use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use progmap_cli::overrides::{apply_overrides, load_overrides};
use progmap_ingest::{
    DetectedColumns, detect_columns, load_catalog, read_csv_table, unique_database_values,
};
use progmap_match::MappingSession;
use progmap_model::{SourceTable, StatusFilter};
use progmap_report::{default_export_filename, write_mapped_csv, write_review_csv};

use crate::cli::{ColumnsArgs, MapArgs, ProgramsArgs};
use crate::types::{ColumnsResult, MapResult, ProgramsResult, ReviewRow};

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let table = read_csv_table(&args.csv)?;
    let (catalog, catalog_format) = load_catalog(&args.reference)?;
    let columns = detect_columns(&table.headers);
    let program_column = resolve_program_column(&table, &columns, args.column.as_deref())?;

    let mut session = MappingSession::new(catalog);
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} values")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    session.run_matching_pass_with(&table, &program_column, |done, total| {
        if progress.length() != Some(total as u64) {
            progress.set_length(total as u64);
        }
        progress.set_position(done as u64);
    })?;
    progress.finish_and_clear();

    let overrides_applied = match &args.overrides {
        Some(path) => {
            let entries = load_overrides(path)?;
            apply_overrides(&mut session, &entries)
        }
        None => 0,
    };

    let export = match &args.export {
        Some(Some(path)) => Some(path.clone()),
        Some(None) => Some(PathBuf::from(default_export_filename())),
        None => None,
    };
    if let Some(path) = &export {
        write_mapped_csv(path, &table, &session, &columns, &program_column)?;
    }
    if let Some(path) = &args.review {
        write_review_csv(path, &session, args.filter.into())?;
    }

    let filter: StatusFilter = args.filter.into();
    let filtered = session.query(filter);
    let filtered_total = filtered.len();
    let rows: Vec<ReviewRow> = filtered
        .into_iter()
        .take(args.limit)
        .map(|row| ReviewRow {
            input: row.input.to_string(),
            mapped_to: row.mapping.mapped_to.clone(),
            score: row.mapping.score,
            status: row.mapping.status,
            occurrences: row.occurrences,
        })
        .collect();

    Ok(MapResult {
        source: args.csv.clone(),
        program_column,
        catalog_size: session.catalog().len(),
        catalog_format,
        source_rows: table.row_count(),
        distinct_values: session.counts().len(),
        overrides_applied,
        summary: session.summary(),
        hidden_rows: filtered_total - rows.len(),
        rows,
        export,
        review: args.review.clone(),
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<ColumnsResult> {
    let table = read_csv_table(&args.csv)?;
    let columns = detect_columns(&table.headers);
    let database_values = match columns.database.as_deref() {
        Some(header) => unique_database_values(&table, header),
        None => Vec::new(),
    };
    info!(headers = table.headers.len(), "inspected columns");
    Ok(ColumnsResult {
        source: args.csv.clone(),
        headers: table.headers.clone(),
        columns,
        database_values,
    })
}

pub fn run_programs(args: &ProgramsArgs) -> Result<ProgramsResult> {
    let (catalog, format) = load_catalog(&args.reference)?;
    Ok(ProgramsResult {
        source: args.reference.clone(),
        format,
        programs: catalog.programs().to_vec(),
    })
}

/// Picks the program column: an explicit header wins, then the detected
/// one. Either way the header must exist in the table.
fn resolve_program_column(
    table: &SourceTable,
    columns: &DetectedColumns,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(header) = explicit {
        if table.column_index(header).is_none() {
            bail!(
                "column {header:?} not found; available headers: {}",
                table.headers.join(", ")
            );
        }
        return Ok(header.to_string());
    }
    match columns.program.as_deref() {
        Some(header) => Ok(header.to_string()),
        None => bail!(
            "no program column detected; use --column to pick one of: {}",
            table.headers.join(", ")
        ),
    }
}
