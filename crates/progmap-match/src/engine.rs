//! Best-match selection and threshold classification.

use progmap_model::{Mapping, MatchResult, MatchStatus};

use crate::score::similarity;

/// Minimum score for a match to be applied without review.
pub const CONFIDENT_MIN: u8 = 90;

/// Minimum score for a match to be kept as a reviewable suggestion.
/// Below this the candidate is dropped entirely.
pub const REVIEW_MIN: u8 = 70;

/// Finds the highest-scoring candidate for an input value.
///
/// Candidates are scanned in list order and only a strictly greater score
/// replaces the current best, so exact-score ties keep the earliest
/// candidate. This tie-break is part of the contract: reordering the catalog
/// is the only way to change which of two equally-scored programs wins.
///
/// An empty candidate list yields `MatchResult::none()`.
pub fn find_best_match(input: &str, candidates: &[String]) -> MatchResult {
    let mut best: Option<&String> = None;
    let mut best_score = 0u8;

    for candidate in candidates {
        let score = similarity(input, candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    MatchResult {
        candidate: best.cloned(),
        score: best_score,
    }
}

/// Buckets a match result into a mapping decision.
///
/// - score ≥ 90: Confident, candidate applied
/// - 70 ≤ score < 90: Uncertain, candidate retained for operator review
/// - score < 70: Unmapped, candidate discarded
///
/// The 90/70 cut points are fixed contract values, not tunables.
pub fn classify(result: &MatchResult) -> Mapping {
    if result.score >= CONFIDENT_MIN {
        Mapping {
            mapped_to: result.candidate.clone(),
            score: result.score,
            status: MatchStatus::Confident,
        }
    } else if result.score >= REVIEW_MIN {
        Mapping {
            mapped_to: result.candidate.clone(),
            score: result.score,
            status: MatchStatus::Uncertain,
        }
    } else {
        Mapping {
            mapped_to: None,
            score: result.score,
            status: MatchStatus::Unmapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(candidate: Option<&str>, score: u8) -> MatchResult {
        MatchResult {
            candidate: candidate.map(String::from),
            score,
        }
    }

    #[test]
    fn empty_candidates_yield_none() {
        let best = find_best_match("Law", &[]);
        assert_eq!(best, MatchResult::none());
    }

    #[test]
    fn ties_keep_first_candidate() {
        // Both candidates normalize to the same distance from the input.
        let candidates = vec!["abcd".to_string(), "abce".to_string()];
        let best = find_best_match("abcf", &candidates);
        assert_eq!(best.candidate.as_deref(), Some("abcd"));
    }

    #[test]
    fn classify_boundaries_are_exact() {
        let at_90 = classify(&result(Some("Law"), 90));
        assert_eq!(at_90.status, MatchStatus::Confident);
        assert_eq!(at_90.mapped_to.as_deref(), Some("Law"));

        let at_89 = classify(&result(Some("Law"), 89));
        assert_eq!(at_89.status, MatchStatus::Uncertain);
        assert_eq!(at_89.mapped_to.as_deref(), Some("Law"));

        let at_70 = classify(&result(Some("Law"), 70));
        assert_eq!(at_70.status, MatchStatus::Uncertain);

        let at_69 = classify(&result(Some("Law"), 69));
        assert_eq!(at_69.status, MatchStatus::Unmapped);
        assert_eq!(at_69.mapped_to, None, "low-score candidate is dropped");
    }
}
