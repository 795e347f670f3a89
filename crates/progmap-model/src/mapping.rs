//! Mapping records produced by the reconciliation engine.
//!
//! A [`MatchResult`] is the immutable outcome of scoring one input value
//! against the catalog. A [`Mapping`] is the mutable per-input record the
//! classifier derives from it; manual overrides rewrite the record in place.

use serde::{Deserialize, Serialize};

/// Classification of one distinct input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Score at or above the confident threshold; safe to apply without review.
    Confident,
    /// Mid-band score; the best guess is retained for operator review.
    Uncertain,
    /// No acceptable candidate.
    Unmapped,
}

impl MatchStatus {
    /// Short display label for tables and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Confident => "confident",
            Self::Uncertain => "uncertain",
            Self::Unmapped => "unmapped",
        }
    }
}

/// Result of scoring one input value against the full candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Highest-scoring candidate, if any candidate scored above zero.
    pub candidate: Option<String>,
    /// Similarity score of that candidate, 0..=100.
    pub score: u8,
}

impl MatchResult {
    /// Result for an empty candidate list (or nothing scored above zero).
    pub fn none() -> Self {
        Self {
            candidate: None,
            score: 0,
        }
    }
}

/// Current mapping decision for one distinct input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Chosen canonical program, when one is mapped or suggested.
    pub mapped_to: Option<String>,
    /// Similarity score backing the decision, 0..=100. Manual choices are 100.
    pub score: u8,
    /// Classification status.
    pub status: MatchStatus,
}

impl Mapping {
    /// Mapping for a manually chosen target.
    pub fn manual(target: impl Into<String>) -> Self {
        Self {
            mapped_to: Some(target.into()),
            score: 100,
            status: MatchStatus::Confident,
        }
    }

    /// Mapping explicitly left unmapped by the operator.
    pub fn left_unmapped() -> Self {
        Self {
            mapped_to: None,
            score: 0,
            status: MatchStatus::Unmapped,
        }
    }
}

/// Filter over mapping statuses for store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Confident,
    Uncertain,
    Unmapped,
}

impl StatusFilter {
    /// Whether a mapping with the given status passes this filter.
    pub fn accepts(self, status: MatchStatus) -> bool {
        match self {
            Self::All => true,
            Self::Confident => status == MatchStatus::Confident,
            Self::Uncertain => status == MatchStatus::Uncertain,
            Self::Unmapped => status == MatchStatus::Unmapped,
        }
    }
}

/// Per-status entry counts for a mapping store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub confident: usize,
    pub uncertain: usize,
    pub unmapped: usize,
}

impl SummaryCounts {
    /// Total entries across all statuses.
    pub fn total(&self) -> usize {
        self.confident + self.uncertain + self.unmapped
    }
}
