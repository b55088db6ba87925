use std::collections::BTreeMap;

use globalrank_core::models::*;

#[test]
fn tier_keys_roundtrip_through_from_key() {
    for tier in Tier::ALL {
        assert_eq!(Tier::from_key(tier.key()), Some(tier));
    }
    assert_eq!(Tier::from_key("Mythic"), None);
}

#[test]
fn tier_serializes_as_display_key() {
    let json = serde_json::to_string(&Tier::TopOnePercentElite).unwrap();
    assert_eq!(json, "\"Top 1% Elite\"");
    let back: Tier = serde_json::from_str("\"Global Citizen\"").unwrap();
    assert_eq!(back, Tier::GlobalCitizen);
}

#[test]
fn tier_colors_match_palette() {
    assert_eq!(Tier::SingularityClass.color(), "#ff00ff");
    assert_eq!(Tier::TopOnePercentElite.color(), Tier::HighAchiever.color());
    assert_eq!(Tier::GlobalCitizen.color(), "#a0a0a0");
}

#[test]
fn score_result_uses_camel_case_keys() {
    let result = ScoreResult {
        score: 18.5,
        tier: Tier::GlobalMiddleClass,
        yes_count: 3,
        total_questions: 3,
    };
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["score"], 18.5);
    assert_eq!(value["tierKey"], "Global Middle Class");
    assert_eq!(value["yesCount"], 3);
    assert_eq!(value["totalQuestions"], 3);
    assert_eq!(result.tier_key(), "Global Middle Class");
}

#[test]
fn item_bank_file_parses_toml() {
    let bank = ItemBankFile::from_toml(
        r#"
question_set_id = "qs-1"

[[items]]
id = "q_passport"
probability = 0.45
category = "travel"

[[items]]
id = "q_car"
probability = 0.2
"#,
    )
    .unwrap();
    assert_eq!(bank.question_set_id.as_deref(), Some("qs-1"));
    assert_eq!(bank.items.len(), 2);
    assert_eq!(bank.items[0].category.as_deref(), Some("travel"));
    assert_eq!(bank.items[1], ItemDefinition::new("q_car", 0.2));
}

#[test]
fn item_bank_file_parses_json() {
    let bank =
        ItemBankFile::from_json(r#"{"items":[{"id":"q1","probability":0.5}]}"#).unwrap();
    assert!(bank.question_set_id.is_none());
    assert_eq!(bank.items[0].probability, 0.5);
}

#[test]
fn item_bank_file_load_dispatches_on_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let json_path = dir.path().join("bank.json");
    std::fs::write(&json_path, r#"{"items":[{"id":"q1","probability":0.3}]}"#).unwrap();
    let toml_path = dir.path().join("bank.toml");
    std::fs::write(&toml_path, "[[items]]\nid = \"q1\"\nprobability = 0.3\n").unwrap();

    assert_eq!(
        ItemBankFile::load(&json_path).unwrap(),
        ItemBankFile::load(&toml_path).unwrap()
    );
}

#[test]
fn item_bank_file_missing_is_not_found() {
    let err = ItemBankFile::load(std::path::Path::new("/nonexistent/bank.toml")).unwrap_err();
    assert!(matches!(
        err,
        globalrank_core::errors::ItemBankError::FileNotFound { .. }
    ));
}

#[test]
fn answered_item_omits_absent_latency() {
    let json = serde_json::to_string(&AnsweredItem::new("q1", true)).unwrap();
    assert!(!json.contains("latency_ms"));
    let timed = AnsweredItem::new("q1", false).with_latency(1200);
    assert_eq!(timed.latency_ms, Some(1200));
}

#[test]
fn submission_summary_roundtrip() {
    let summary = SubmissionSummary {
        question_set_id: Some("qs-1".into()),
        score_algo_version: globalrank_core::constants::SCORE_ALGO_VERSION.into(),
        question_ids: vec!["q1".into()],
        answers: vec![true],
        answers_by_question_id: BTreeMap::from([("q1".to_string(), true)]),
        times_by_question_id: BTreeMap::new(),
        total_quiz_time_ms: None,
        score: 42.0,
        tier: Tier::AspiringGlobal,
        yes_count: 1,
    };
    let json = serde_json::to_string(&summary).unwrap();
    let back: SubmissionSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn prior_trace_is_zero_and_converged() {
    let trace = EstimationTrace::prior();
    assert_eq!(trace.theta, 0.0);
    assert_eq!(trace.iterations, 0);
    assert!(trace.converged);
}
