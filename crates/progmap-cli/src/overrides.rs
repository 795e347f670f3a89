//! Manual override files.
//!
//! An override file is a JSON array applied in order after the matching
//! pass, so operators can keep their corrections in version control and
//! replay them against a fresh export:
//!
//! ```json
//! [
//!   {"input": "Nursin", "target": "Nursing"},
//!   {"input": "N/A", "leave_unmapped": true}
//! ]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use progmap_match::{MapError, MappingSession};

use crate::logging::redact_value;

/// One manual decision. `leave_unmapped` wins over any target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub leave_unmapped: bool,
}

/// Loads override entries from a JSON file.
pub fn load_overrides(path: &Path) -> Result<Vec<OverrideEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read overrides: {}", path.display()))?;
    let entries: Vec<OverrideEntry> = serde_json::from_str(&text)
        .with_context(|| format!("parse overrides: {}", path.display()))?;
    Ok(entries)
}

/// Applies override entries in file order.
///
/// Entries naming an input that the matching pass never saw are skipped
/// with a warning rather than failing the run; stale entries are expected
/// when the same override file is replayed against different exports.
/// Returns the number of entries actually applied.
pub fn apply_overrides(session: &mut MappingSession, entries: &[OverrideEntry]) -> usize {
    let mut applied = 0;
    for entry in entries {
        match session.override_mapping(&entry.input, entry.target.as_deref(), entry.leave_unmapped)
        {
            Ok(()) => applied += 1,
            Err(MapError::UnknownInput(_)) => {
                warn!(
                    input = redact_value(&entry.input),
                    "override input not present in data, skipped"
                );
            }
            Err(error) => {
                warn!(input = redact_value(&entry.input), %error, "override failed, skipped");
            }
        }
    }
    info!(applied, total = entries.len(), "applied overrides");
    applied
}
