use interview_orchestrator::domain::{NEUTRAL_SCORE, TurnRecord, average_score};

#[test]
fn given_only_unscored_turns_when_averaging_then_returns_neutral_score() {
    let history = vec![TurnRecord::new("q1", None), TurnRecord::new("q2", None)];

    assert_eq!(average_score(&history), NEUTRAL_SCORE);
}

#[test]
fn given_unscored_turn_when_averaging_then_excludes_it_instead_of_counting_zero() {
    let history = vec![
        TurnRecord::new("q1", Some(8)),
        TurnRecord::new("q2", None),
        TurnRecord::new("q3", Some(6)),
    ];

    assert_eq!(average_score(&history), 7.0);
}

#[test]
fn given_reordered_history_when_averaging_then_result_is_unchanged() {
    let forward = vec![
        TurnRecord::new("q1", Some(2)),
        TurnRecord::new("q2", Some(10)),
        TurnRecord::new("q3", Some(3)),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(average_score(&forward), average_score(&reversed));
    assert_eq!(average_score(&forward), 5.0);
}

#[test]
fn given_turn_json_without_score_when_deserialized_then_score_is_absent() {
    let turn: TurnRecord = serde_json::from_str(r#"{"question": "What is a trait?"}"#).unwrap();

    assert_eq!(turn.question, "What is a trait?");
    assert_eq!(turn.score, None);
}

#[test]
fn given_turn_json_with_null_score_when_deserialized_then_score_is_absent() {
    let turn: TurnRecord =
        serde_json::from_str(r#"{"question": "What is a trait?", "score": null}"#).unwrap();

    assert_eq!(turn.score, None);
}
