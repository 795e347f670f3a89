//! Canonical program catalog.
//!
//! The catalog is the authoritative list of official program names that
//! free-text input values are reconciled against. It is loaded once per
//! session and never mutated afterwards. Candidate order matters: the
//! matcher resolves exact-score ties in favor of the earliest entry, so
//! the catalog preserves the order in which names were supplied.

use serde::{Deserialize, Serialize};

/// Ordered list of official program names.
///
/// Duplicates are tolerated (they are wasteful but harmless to matching);
/// empty entries are dropped at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramCatalog {
    programs: Vec<String>,
}

impl ProgramCatalog {
    /// Build a catalog from raw program names, trimming each entry and
    /// dropping the empty ones. Input order is preserved.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let programs = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { programs }
    }

    /// All program names in catalog order.
    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// True when the catalog holds no programs.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Case-sensitive membership check, used by callers that want to offer
    /// only valid override targets.
    pub fn contains(&self, name: &str) -> bool {
        self.programs.iter().any(|p| p == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.programs.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_entries() {
        let catalog = ProgramCatalog::new(["  Law ", "", "   ", "Medicine"]);
        assert_eq!(catalog.programs(), ["Law", "Medicine"]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Law"));
        assert!(!catalog.contains("law"));
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let catalog = ProgramCatalog::new(["Nursing", "Law", "Nursing"]);
        assert_eq!(catalog.programs(), ["Nursing", "Law", "Nursing"]);
    }
}
