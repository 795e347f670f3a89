pub mod catalog;
pub mod error;
pub mod mapping;
pub mod table;

pub use catalog::ProgramCatalog;
pub use error::{ModelError, Result};
pub use mapping::{Mapping, MatchResult, MatchStatus, StatusFilter, SummaryCounts};
pub use table::SourceTable;
