//! Session facade owning the catalog, occurrence counts, and mapping store.
//!
//! One session corresponds to one loaded reference list. The session holds
//! all mutable state explicitly (no ambient globals): a matching pass
//! rebuilds counts and store from the source table, overrides mutate the
//! store in place, and `reset` clears everything back to the freshly-loaded
//! state. All operations are synchronous; a pass either runs to completion
//! or is never observable.

use progmap_model::{Mapping, ProgramCatalog, SourceTable, StatusFilter, SummaryCounts};
use tracing::{debug, info};

use crate::counts::{OccurrenceCounts, count_occurrences};
use crate::engine::{classify, find_best_match};
use crate::error::MapError;
use crate::store::MappingStore;

/// One reporting row: a distinct input value with its current mapping
/// decision and the number of source rows it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow<'a> {
    pub input: &'a str,
    pub mapping: &'a Mapping,
    pub occurrences: usize,
}

/// Reconciliation session for one canonical catalog.
#[derive(Debug, Clone)]
pub struct MappingSession {
    catalog: ProgramCatalog,
    counts: OccurrenceCounts,
    store: MappingStore,
}

impl MappingSession {
    /// Starts a session with a loaded catalog and no mappings.
    pub fn new(catalog: ProgramCatalog) -> Self {
        Self {
            catalog,
            counts: OccurrenceCounts::default(),
            store: MappingStore::new(),
        }
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn counts(&self) -> &OccurrenceCounts {
        &self.counts
    }

    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    /// Discards counts and mappings, keeping the catalog.
    pub fn reset(&mut self) {
        self.counts = OccurrenceCounts::default();
        self.store.clear();
    }

    /// Runs a full matching pass over the program field of `table`.
    ///
    /// Clears any previous counts and mappings, tallies distinct trimmed
    /// values, then scores and classifies each one against the catalog.
    /// Running the same pass twice yields an identical store. An empty
    /// catalog is allowed: every value then classifies as Unmapped with
    /// score 0.
    pub fn run_matching_pass(
        &mut self,
        table: &SourceTable,
        program_field: &str,
    ) -> Result<(), MapError> {
        self.run_matching_pass_with(table, program_field, |_, _| {})
    }

    /// Matching pass with a progress callback `(done, total)` invoked after
    /// each distinct value, for interactive front ends.
    pub fn run_matching_pass_with(
        &mut self,
        table: &SourceTable,
        program_field: &str,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<(), MapError> {
        let counts = count_occurrences(table, program_field)?;
        info!(
            distinct = counts.len(),
            rows = counts.total_rows(),
            candidates = self.catalog.len(),
            "running matching pass"
        );

        self.store.clear();
        let total = counts.len();
        for (done, input) in counts.inputs().enumerate() {
            let result = find_best_match(input, self.catalog.programs());
            let mapping = classify(&result);
            debug!(
                input = input,
                score = mapping.score,
                status = mapping.status.label(),
                "classified input value"
            );
            self.store.insert(input, mapping);
            progress(done + 1, total);
        }
        self.counts = counts;

        let summary = self.store.summary();
        info!(
            confident = summary.confident,
            uncertain = summary.uncertain,
            unmapped = summary.unmapped,
            "matching pass complete"
        );
        Ok(())
    }

    /// Manually overrides the decision for one input value.
    ///
    /// `leave_unmapped` wins over any supplied target; a non-empty target
    /// becomes a Confident mapping at score 100; neither is a no-op. Target
    /// membership in the catalog is not validated here; callers are
    /// expected to offer only valid candidates.
    pub fn override_mapping(
        &mut self,
        input: &str,
        target: Option<&str>,
        leave_unmapped: bool,
    ) -> Result<(), MapError> {
        self.store.override_mapping(input, target, leave_unmapped)
    }

    /// Mapping rows in first-seen order, restricted by status filter and
    /// joined with occurrence counts for impact reporting.
    pub fn query(&self, filter: StatusFilter) -> Vec<MappingRow<'_>> {
        self.store
            .query(filter)
            .into_iter()
            .map(|(input, mapping)| MappingRow {
                input,
                mapping,
                occurrences: self.counts.get(input),
            })
            .collect()
    }

    /// Per-status totals.
    pub fn summary(&self) -> SummaryCounts {
        self.store.summary()
    }

    /// Transformed copy of `table`'s rows where each program cell is
    /// replaced by its mapped target when one exists, else by the original
    /// trimmed value. Rows with an empty program cell keep the empty string.
    pub fn export_rows(&self, table: &SourceTable, program_field: &str) -> Vec<Vec<String>> {
        let Some(col) = table.column_index(program_field) else {
            return table.rows.clone();
        };

        table
            .rows
            .iter()
            .map(|row| {
                let mut out = row.clone();
                if let Some(cell) = out.get_mut(col) {
                    let trimmed = cell.trim();
                    let mapped = self
                        .store
                        .get(trimmed)
                        .and_then(|mapping| mapping.mapped_to.as_deref());
                    *cell = mapped.unwrap_or(trimmed).to_string();
                }
                out
            })
            .collect()
    }
}
