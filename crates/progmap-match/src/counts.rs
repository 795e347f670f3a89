//! Occurrence counting over the source table's program field.
//!
//! Distinct input values are raw trimmed strings: "Law" and "law" are
//! separate entries, each matched independently. First-seen row order is
//! preserved so reports list values in the order the data introduced them.

use std::collections::BTreeMap;

use progmap_model::SourceTable;

use crate::error::MapError;

/// Row counts per distinct trimmed input value, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceCounts {
    order: Vec<String>,
    counts: BTreeMap<String, usize>,
}

impl OccurrenceCounts {
    /// Rows observed for one input value; zero when unknown.
    pub fn get(&self, input: &str) -> usize {
        self.counts.get(input).copied().unwrap_or(0)
    }

    /// Distinct input values in first-seen order.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(input, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|input| (input.as_str(), self.counts[input]))
    }

    /// Number of distinct input values.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total source rows represented (sum of all counts).
    pub fn total_rows(&self) -> usize {
        self.counts.values().sum()
    }

    fn record(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count += 1;
        } else {
            self.order.push(value.to_string());
            self.counts.insert(value.to_string(), 1);
        }
    }
}

/// Tallies how many rows carry each distinct trimmed value of `field`.
/// Rows whose trimmed value is empty are skipped.
pub fn count_occurrences(table: &SourceTable, field: &str) -> Result<OccurrenceCounts, MapError> {
    if table.column_index(field).is_none() {
        return Err(MapError::FieldNotFound(field.to_string()));
    }

    let mut counts = OccurrenceCounts::default();
    for value in table.column_values(field) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        counts.record(trimmed);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[&str]) -> SourceTable {
        SourceTable::new(
            vec!["prog".to_string()],
            values.iter().map(|v| vec![(*v).to_string()]).collect(),
        )
    }

    #[test]
    fn counts_distinct_trimmed_values_in_first_seen_order() {
        let table = table(&[" Law ", "Law", "MED", "law", "", "  "]);
        let counts = count_occurrences(&table, "prog").expect("count");
        let entries: Vec<_> = counts.iter().collect();
        assert_eq!(entries, [("Law", 2), ("MED", 1), ("law", 1)]);
        assert_eq!(counts.total_rows(), 4);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let table = table(&["Law"]);
        let err = count_occurrences(&table, "missing").unwrap_err();
        assert_eq!(err, MapError::FieldNotFound("missing".to_string()));
    }
}
