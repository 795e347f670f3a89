//! Ingestion collaborators for the reconciliation engine: CSV table
//! loading with header-row detection, column-role heuristics over header
//! names, and reference-list parsing (plain lines or DAX DATATABLE text).

pub mod catalog;
pub mod columns;
pub mod csv_table;

pub use catalog::{CatalogFormat, load_catalog, parse_catalog, parse_dax_datatable};
pub use columns::{DetectedColumns, detect_columns, unique_database_values};
pub use csv_table::read_csv_table;
