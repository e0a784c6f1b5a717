//! Raw score aggregation: answers to per-factor averages on the 1-7 scale.
//!
//! The `Thinking` and `Behavior` blocks carry no explicit sub-axis tag in the
//! question bank; which axis an item belongs to is encoded by its position in
//! the submitted order. The block is cut into contiguous quarters (thinking:
//! leader, analyst, supporter, energetic) or fifths (behavior: efficiency,
//! friendliness, knowledge, appearance, challenge), each slice sized
//! `ceil(len / axes)` with the final slice taking whatever remains. Callers
//! must preserve submission order for these two categories.

use super::domain::{AnswerRecord, QuestionCategory, RawScores};

/// Raw midpoint substituted when a category or axis slice has no contributing
/// answers. A missing bucket is a neutral signal, never an error.
pub(crate) const NEUTRAL_RAW_SCORE: f64 = 4.0;

const THINKING_AXES: usize = 4;
const BEHAVIOR_AXES: usize = 5;

pub(crate) fn aggregate(answers: &[AnswerRecord]) -> RawScores {
    let mut extraversion = Vec::new();
    let mut openness = Vec::new();
    let mut agreeableness = Vec::new();
    let mut conscientiousness = Vec::new();
    let mut neuroticism = Vec::new();
    let mut thinking = Vec::new();
    let mut behavior = Vec::new();

    for answer in answers {
        let effective = effective_score(answer);
        match answer.category {
            QuestionCategory::Extraversion => extraversion.push(effective),
            QuestionCategory::Openness => openness.push(effective),
            QuestionCategory::Agreeableness => agreeableness.push(effective),
            QuestionCategory::Conscientiousness => conscientiousness.push(effective),
            QuestionCategory::Neuroticism => neuroticism.push(effective),
            QuestionCategory::Thinking => thinking.push(effective),
            QuestionCategory::Behavior => behavior.push(effective),
        }
    }

    let [leader, analyst, supporter, energetic] = split_axes::<THINKING_AXES>(&thinking);
    let [efficiency, friendliness, knowledge, appearance, challenge] =
        split_axes::<BEHAVIOR_AXES>(&behavior);

    RawScores {
        extraversion: average_or_neutral(&extraversion),
        openness: average_or_neutral(&openness),
        agreeableness: average_or_neutral(&agreeableness),
        conscientiousness: average_or_neutral(&conscientiousness),
        neuroticism: average_or_neutral(&neuroticism),
        leader,
        analyst,
        supporter,
        energetic,
        efficiency,
        friendliness,
        knowledge,
        appearance,
        challenge,
    }
}

/// Reverse-keyed items invert around the midpoint of the 1-7 scale.
fn effective_score(answer: &AnswerRecord) -> f64 {
    if answer.is_reverse {
        f64::from(8 - answer.score)
    } else {
        f64::from(answer.score)
    }
}

fn average_or_neutral(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        NEUTRAL_RAW_SCORE
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Cuts `scores` into `N` contiguous slices of `ceil(len / N)` items, the last
/// slice absorbing the remainder (possibly empty), and averages each.
fn split_axes<const N: usize>(scores: &[f64]) -> [f64; N] {
    let chunk = scores.len().div_ceil(N);
    std::array::from_fn(|index| {
        let start = (index * chunk).min(scores.len());
        let end = (start + chunk).min(scores.len());
        average_or_neutral(&scores[start..end])
    })
}
