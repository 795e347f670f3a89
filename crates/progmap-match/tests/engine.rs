//! Scoring and classification contract tests.

use progmap_match::{classify, find_best_match, normalize, similarity};
use progmap_model::{MatchResult, MatchStatus};
use proptest::prelude::*;

#[test]
fn accent_and_case_insensitive_normalization() {
    assert_eq!(normalize("México 2024"), normalize("mexico 2024"));
    assert_eq!(normalize("Ingeniería_Civil"), "ingenieria civil");
}

#[test]
fn exact_match_scores_100() {
    assert_eq!(similarity("business administration", "Business Administration"), 100);
}

#[test]
fn year_variants_score_95_not_100() {
    assert_eq!(similarity("Marketing 2023", "Marketing 2024"), 95);
    assert_eq!(similarity("Marketing 2024", "Marketing 2024"), 100);
}

#[test]
fn empty_string_scores() {
    assert_eq!(similarity("", ""), 100);
    assert_eq!(similarity("abc", ""), 0);
}

#[test]
fn nursing_typo_scores_86() {
    // distance 1, max_len 7 → round(6/7 * 100) = 86
    assert_eq!(similarity("Nursin", "Nursing"), 86);
}

#[test]
fn best_match_business_administration() {
    let candidates = vec![
        "Business Administration".to_string(),
        "Computer Science".to_string(),
    ];
    let result = find_best_match("business administration", &candidates);
    assert_eq!(result.candidate.as_deref(), Some("Business Administration"));
    assert_eq!(result.score, 100);

    let mapping = classify(&result);
    assert_eq!(mapping.status, MatchStatus::Confident);
    assert_eq!(mapping.mapped_to.as_deref(), Some("Business Administration"));
}

#[test]
fn nursing_typo_lands_in_review_band() {
    let candidates = vec!["Nursing".to_string()];
    let result = find_best_match("Nursin", &candidates);
    assert_eq!(result.score, 86);

    let mapping = classify(&result);
    assert_eq!(mapping.status, MatchStatus::Uncertain);
    assert_eq!(mapping.mapped_to.as_deref(), Some("Nursing"));
}

#[test]
fn classifier_thresholds_are_inclusive_lower_bounds() {
    let statuses: Vec<MatchStatus> = [90u8, 89, 70, 69]
        .iter()
        .map(|&score| {
            classify(&MatchResult {
                candidate: Some("X".to_string()),
                score,
            })
            .status
        })
        .collect();
    assert_eq!(
        statuses,
        [
            MatchStatus::Confident,
            MatchStatus::Uncertain,
            MatchStatus::Uncertain,
            MatchStatus::Unmapped,
        ]
    );
}

#[test]
fn tie_break_prefers_earlier_candidate() {
    // Equidistant candidates: both differ from "lav" by one substitution.
    let forward = vec!["law".to_string(), "lab".to_string()];
    let reversed = vec!["lab".to_string(), "law".to_string()];
    assert_eq!(
        find_best_match("lav", &forward).candidate.as_deref(),
        Some("law")
    );
    assert_eq!(
        find_best_match("lav", &reversed).candidate.as_deref(),
        Some("lab")
    );
}

proptest! {
    #[test]
    fn similarity_is_reflexive(s in "[ _a-zA-Z0-9áéíóúñüÁÉÍÓÚÑ]{0,32}") {
        prop_assert_eq!(similarity(&s, &s), 100);
    }

    #[test]
    fn similarity_is_symmetric(
        a in "[ _a-zA-Z0-9áéíóúñ]{0,24}",
        b in "[ _a-zA-Z0-9áéíóúñ]{0,24}",
    ) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_stays_in_range(
        a in "\\PC{0,24}",
        b in "\\PC{0,24}",
    ) {
        prop_assert!(similarity(&a, &b) <= 100);
    }
}
