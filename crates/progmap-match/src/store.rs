//! Insertion-ordered store of mapping decisions.

use std::collections::BTreeMap;

use progmap_model::{Mapping, MatchStatus, StatusFilter, SummaryCounts};

use crate::error::MapError;

/// Key-value store holding one [`Mapping`] per distinct input value.
///
/// Iteration follows first-insertion order, so reports keep the order in
/// which the matching pass (and therefore the source data) introduced each
/// value. Keys are created only by the matching pass; overrides may rewrite
/// existing entries but never invent keys, which keeps the store's key set
/// identical to the occurrence counter's.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    order: Vec<String>,
    entries: BTreeMap<String, Mapping>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    /// Inserts or replaces the mapping for an input value. First insertion
    /// fixes the value's position in iteration order.
    pub fn insert(&mut self, input: impl Into<String>, mapping: Mapping) {
        let input = input.into();
        if !self.entries.contains_key(&input) {
            self.order.push(input.clone());
        }
        self.entries.insert(input, mapping);
    }

    pub fn get(&self, input: &str) -> Option<&Mapping> {
        self.entries.get(input)
    }

    pub fn contains(&self, input: &str) -> bool {
        self.entries.contains_key(input)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Applies a manual override to an existing entry.
    ///
    /// `leave_unmapped` wins unconditionally, clearing any target. Otherwise
    /// a non-empty `target` becomes a Confident mapping at score 100. With
    /// neither, the entry is left untouched. Overriding a value the store
    /// does not hold is an error.
    pub fn override_mapping(
        &mut self,
        input: &str,
        target: Option<&str>,
        leave_unmapped: bool,
    ) -> Result<(), MapError> {
        let Some(entry) = self.entries.get_mut(input) else {
            return Err(MapError::UnknownInput(input.to_string()));
        };

        if leave_unmapped {
            *entry = Mapping::left_unmapped();
        } else if let Some(target) = target
            && !target.is_empty()
        {
            *entry = Mapping::manual(target);
        }
        Ok(())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Mapping)> {
        self.order
            .iter()
            .map(|input| (input.as_str(), &self.entries[input]))
    }

    /// Entries in insertion order, restricted by status filter.
    pub fn query(&self, filter: StatusFilter) -> Vec<(&str, &Mapping)> {
        self.iter()
            .filter(|(_, mapping)| filter.accepts(mapping.status))
            .collect()
    }

    /// Per-status totals; always sums to `len()`.
    pub fn summary(&self) -> SummaryCounts {
        let mut counts = SummaryCounts::default();
        for mapping in self.entries.values() {
            match mapping.status {
                MatchStatus::Confident => counts.confident += 1,
                MatchStatus::Uncertain => counts.uncertain += 1,
                MatchStatus::Unmapped => counts.unmapped += 1,
            }
        }
        counts
    }
}
