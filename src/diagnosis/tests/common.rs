use crate::diagnosis::domain::{AnswerRecord, QuestionCategory};

pub(super) fn answer(
    question_id: &str,
    category: QuestionCategory,
    score: u8,
    is_reverse: bool,
) -> AnswerRecord {
    AnswerRecord {
        question_id: question_id.to_string(),
        score,
        category,
        is_reverse,
    }
}

/// Normal-keyed answers for one category, in the given order.
pub(super) fn block(category: QuestionCategory, scores: &[u8]) -> Vec<AnswerRecord> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| {
            answer(
                &format!("{}-n{index}", category.label()),
                category,
                score,
                false,
            )
        })
        .collect()
}

/// Reverse-keyed answers for one category, in the given order.
pub(super) fn reverse_block(category: QuestionCategory, scores: &[u8]) -> Vec<AnswerRecord> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| {
            answer(
                &format!("{}-r{index}", category.label()),
                category,
                score,
                true,
            )
        })
        .collect()
}

/// Ninety-question sheet with every answer at `score` and reverse flags
/// balanced within every category block.
pub(super) fn uniform_sheet(score: u8) -> Vec<AnswerRecord> {
    let mut answers = Vec::new();
    for category in QuestionCategory::ordered() {
        let count = match category {
            QuestionCategory::Thinking | QuestionCategory::Behavior => 20,
            _ => 10,
        };
        for index in 0..count {
            answers.push(AnswerRecord {
                question_id: format!("{}-{index}", category.label()),
                score,
                category,
                is_reverse: index % 2 == 1,
            });
        }
    }
    answers
}

/// A plausible, internally consistent ninety-question submission: high
/// extraversion and agreeableness, low neuroticism, leader-leaning thinking.
/// Passes every reliability heuristic.
pub(super) fn varied_sheet() -> Vec<AnswerRecord> {
    use QuestionCategory::*;

    let mut answers = Vec::new();
    answers.extend(block(Extraversion, &[6, 5, 7, 6, 5]));
    answers.extend(reverse_block(Extraversion, &[2, 3, 1, 2, 3]));
    answers.extend(block(Openness, &[5, 4, 6, 5, 4]));
    answers.extend(reverse_block(Openness, &[3, 4, 2, 3, 4]));
    answers.extend(block(Agreeableness, &[6, 6, 5, 7, 6]));
    answers.extend(reverse_block(Agreeableness, &[2, 2, 3, 1, 2]));
    answers.extend(block(Conscientiousness, &[5, 4, 5, 6, 5]));
    answers.extend(reverse_block(Conscientiousness, &[3, 4, 3, 2, 3]));
    answers.extend(block(Neuroticism, &[2, 3, 2, 3, 2]));
    answers.extend(reverse_block(Neuroticism, &[6, 5, 6, 5, 6]));
    // Thinking quarters: leader, analyst, supporter, energetic.
    answers.extend(block(
        Thinking,
        &[6, 6, 5, 6, 6, 5, 5, 4, 5, 5, 4, 4, 3, 4, 4, 5, 6, 5, 6, 5],
    ));
    // Behavior fifths: efficiency, friendliness, knowledge, appearance,
    // challenge.
    answers.extend(block(
        Behavior,
        &[5, 5, 6, 5, 6, 5, 6, 6, 4, 5, 4, 5, 4, 4, 5, 4, 5, 6, 6, 5],
    ));
    answers
}
