use std::collections::HashSet;
use std::io::Cursor;

use pretty_assertions::assert_eq;

use persona_insight::diagnosis::{
    self, norms, AnswerRecord, Factor, QuestionCategory,
};
use persona_insight::intake;

fn submission() -> Vec<AnswerRecord> {
    let mut answers = Vec::new();
    for (block, category) in QuestionCategory::ordered().into_iter().enumerate() {
        for index in 0..10u8 {
            let is_reverse = index % 3 == 0;
            let base = 2 + (index + block as u8) % 5;
            answers.push(AnswerRecord {
                question_id: format!("q-{block:02}-{index:02}"),
                score: if is_reverse { 8 - base } else { base },
                category,
                is_reverse,
            });
        }
    }
    answers
}

#[test]
fn diagnosis_respects_its_structural_invariants() {
    let result = diagnosis::calculate(&submission());

    for value in [
        result.big_five.extraversion,
        result.big_five.openness,
        result.big_five.agreeableness,
        result.big_five.conscientiousness,
        result.big_five.neuroticism,
        result.thinking.leader,
        result.thinking.analyst,
        result.thinking.supporter,
        result.thinking.energetic,
        result.behavior.efficiency,
        result.behavior.friendliness,
        result.behavior.knowledge,
        result.behavior.appearance,
        result.behavior.challenge,
    ] {
        assert!((20..=80).contains(&value));
    }

    assert!(result.type_result.feature_labels.len() <= 8);
    let unique: HashSet<_> = result.type_result.feature_labels.iter().collect();
    assert_eq!(unique.len(), result.type_result.feature_labels.len());

    assert!(result.reliability.score <= 100);

    assert_eq!(result.job_potential.len(), diagnosis::job_types().len());
    for pair in result.job_potential.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        assert!(pair[0].score <= 100);
    }
}

#[test]
fn repeated_calculations_serialize_identically() {
    let answers = submission();

    let first = serde_json::to_string(&diagnosis::calculate(&answers)).expect("serializes");
    let second = serde_json::to_string(&diagnosis::calculate(&answers)).expect("serializes");

    assert_eq!(first, second);
}

#[test]
fn job_table_accessors_are_read_only_lookups() {
    let job_types = diagnosis::job_types();

    assert!(job_types.len() >= 25);
    assert!(job_types.contains(&"Care Worker"));

    let profile = diagnosis::job_profile("software engineer").expect("case-insensitive lookup");
    assert_eq!(profile.job_type, "Software Engineer");
    assert!(!profile.requirements.is_empty());

    assert!(diagnosis::job_profile("Blacksmith").is_none());
}

#[test]
fn norm_table_spread_is_a_guarded_invariant() {
    for factor in Factor::ordered() {
        assert!(norms::norm(factor).sd > 0.0);
    }
}

#[test]
fn imported_answers_feed_the_pipeline_like_native_records() {
    let answers = submission();
    let json = serde_json::to_string(&answers).expect("serializes");

    let imported = intake::from_json_reader(Cursor::new(json)).expect("imports");

    assert_eq!(imported, answers);
    assert_eq!(
        serde_json::to_string(&diagnosis::calculate(&imported)).expect("serializes"),
        serde_json::to_string(&diagnosis::calculate(&answers)).expect("serializes"),
    );
}
