//! Serialized shape of public state, as a host would observe it.

use serde_json::json;
use type_training::{Category, Challenge, Objective, Phase, ScriptedChallenges, Session};

#[test]
fn test_scoreboard_serializes_observable_fields() {
    let challenge = Challenge::new(Category::Grass, Objective::Win);
    let mut session = Session::with_source(ScriptedChallenges::repeat(challenge));
    session.choose(Category::Fire).expect("choose");

    let value = serde_json::to_value(session.board()).expect("serialize");

    assert_eq!(value["round_index"], json!(2));
    assert_eq!(value["score"], json!(1));
    assert_eq!(value["phase"], json!("RoundResolved"));
    assert_eq!(value["outcome"], json!("Correct"));
    assert_eq!(
        value["challenge"],
        json!({ "opposing": "Grass", "objective": "Win" })
    );
    assert_eq!(value["history"][0]["selected"], json!("Fire"));
}

#[test]
fn test_phase_round_trips() {
    let text = serde_json::to_string(&Phase::GameOver).expect("serialize");
    let phase: Phase = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(phase, Phase::GameOver);
}
