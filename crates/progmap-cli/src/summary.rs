use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use progmap_ingest::CatalogFormat;
use progmap_model::MatchStatus;

use crate::types::{ColumnsResult, MapResult, ProgramsResult};

pub fn print_map_summary(result: &MapResult) {
    println!("Source: {}", result.source.display());
    println!("Program column: {}", result.program_column);
    println!(
        "Catalog: {} programs ({})",
        result.catalog_size,
        format_label(result.catalog_format)
    );
    println!(
        "Rows: {} ({} distinct program values)",
        result.source_rows, result.distinct_values
    );
    if result.overrides_applied > 0 {
        println!("Overrides applied: {}", result.overrides_applied);
    }
    if let Some(path) = &result.export {
        println!("Export: {}", path.display());
    }
    if let Some(path) = &result.review {
        println!("Review: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Mapped To"),
        header_cell("Score"),
        header_cell("Status"),
        header_cell("Occurrences"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in &result.rows {
        table.add_row(vec![
            Cell::new(&row.input),
            match row.mapped_to.as_deref() {
                Some(target) => Cell::new(target),
                None => dim_cell("-"),
            },
            score_cell(row.score),
            status_cell(row.status),
            Cell::new(row.occurrences),
        ]);
    }
    println!("{table}");
    if result.hidden_rows > 0 {
        println!("... {} more rows not shown (raise --limit)", result.hidden_rows);
    }
    println!(
        "Confident: {}  Uncertain: {}  Unmapped: {}  (total {})",
        result.summary.confident,
        result.summary.uncertain,
        result.summary.unmapped,
        result.summary.total()
    );
}

pub fn print_columns_summary(result: &ColumnsResult) {
    println!("Source: {}", result.source.display());
    println!("Headers: {}", result.headers.len());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Header")]);
    apply_table_style(&mut table);
    let roles = [
        ("program", result.columns.program.as_deref()),
        ("contact id", result.columns.contact_id.as_deref()),
        ("email", result.columns.email.as_deref()),
        ("phone", result.columns.phone.as_deref()),
        ("database", result.columns.database.as_deref()),
    ];
    for (role, header) in roles {
        table.add_row(vec![
            Cell::new(role),
            match header {
                Some(name) => Cell::new(name),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");

    if !result.database_values.is_empty() {
        println!("Database values: {}", result.database_values.join(", "));
    }
}

pub fn print_programs_summary(result: &ProgramsResult) {
    println!("Source: {}", result.source.display());
    println!(
        "Programs: {} ({})",
        result.programs.len(),
        format_label(result.format)
    );
    for (index, program) in result.programs.iter().enumerate() {
        println!("{:>4}  {}", index + 1, program);
    }
}

fn format_label(format: CatalogFormat) -> &'static str {
    match format {
        CatalogFormat::Lines => "line per program",
        CatalogFormat::DaxDatatable => "DAX DATATABLE",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: MatchStatus) -> Cell {
    match status {
        MatchStatus::Confident => Cell::new("CONFIDENT")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        MatchStatus::Uncertain => Cell::new("UNCERTAIN").fg(Color::Yellow),
        MatchStatus::Unmapped => Cell::new("UNMAPPED").fg(Color::Red),
    }
}

fn score_cell(score: u8) -> Cell {
    if score == 0 {
        dim_cell(score)
    } else {
        Cell::new(score)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
