//! CSV exports for reconciled mappings: the contact-level export with the
//! program column rewritten to canonical names, and the review export
//! listing every distinct input with its decision.

mod export;

pub use export::{default_export_filename, write_mapped_csv, write_review_csv};
