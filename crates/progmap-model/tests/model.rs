//! Tests for progmap-model types.

use progmap_model::{Mapping, MatchResult, MatchStatus, ProgramCatalog, StatusFilter};

#[test]
fn mapping_serializes_round_trip() {
    let mapping = Mapping {
        mapped_to: Some("Business Administration".to_string()),
        score: 95,
        status: MatchStatus::Confident,
    };
    let json = serde_json::to_string(&mapping).expect("serialize mapping");
    assert!(json.contains("\"confident\""));
    let round: Mapping = serde_json::from_str(&json).expect("deserialize mapping");
    assert_eq!(round, mapping);
}

#[test]
fn unmapped_mapping_serializes_null_target() {
    let mapping = Mapping::left_unmapped();
    let json = serde_json::to_string(&mapping).expect("serialize mapping");
    assert!(json.contains("\"mapped_to\":null"));
    assert!(json.contains("\"unmapped\""));
}

#[test]
fn match_result_none_has_zero_score() {
    let result = MatchResult::none();
    assert_eq!(result.candidate, None);
    assert_eq!(result.score, 0);
}

#[test]
fn status_filter_round_trips_as_snake_case() {
    let json = serde_json::to_string(&StatusFilter::Uncertain).expect("serialize filter");
    assert_eq!(json, "\"uncertain\"");
    let round: StatusFilter = serde_json::from_str(&json).expect("deserialize filter");
    assert_eq!(round, StatusFilter::Uncertain);
}

#[test]
fn catalog_from_text_lines() {
    let text = "Law\n\n  Medicine  \nNursing\n";
    let catalog = ProgramCatalog::new(text.lines());
    assert_eq!(catalog.programs(), ["Law", "Medicine", "Nursing"]);
}
