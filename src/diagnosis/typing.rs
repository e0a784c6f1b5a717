//! Type classification and stress-tolerance banding over the normalized
//! profile.

use super::domain::{BigFiveScores, StressTolerance, ThinkingPattern, TypeCode, TypeResult};
use super::norms::DEVIATION_MIDPOINT;

/// T-score at or above which a trait earns its high-end feature labels.
const HIGH_TRAIT: u8 = 60;
/// T-score at or below which a trait earns its low-end feature labels.
const LOW_TRAIT: u8 = 40;
/// A dominant thinking axis only contributes a label at or above this score.
const DOMINANT_AXIS_FLOOR: u8 = 55;
const MAX_FEATURE_LABELS: usize = 8;

/// Neuroticism ceiling for the high-tolerance tier.
const STRESS_HIGH_CEILING: u8 = 40;
/// Neuroticism ceiling for the medium-tolerance tier.
const STRESS_MEDIUM_CEILING: u8 = 60;

pub(crate) fn classify_type(big_five: &BigFiveScores, thinking: &ThinkingPattern) -> TypeResult {
    let type_code = TypeCode::from_axes(
        big_five.extraversion >= DEVIATION_MIDPOINT,
        big_five.openness >= DEVIATION_MIDPOINT,
    );

    let mut labels: Vec<&'static str> = base_labels(type_code).to_vec();

    // Augmentation rules run in a fixed order so the label list is
    // deterministic for identical input.
    if big_five.extraversion >= HIGH_TRAIT {
        push_unique(&mut labels, "Energized by people");
        push_unique(&mut labels, "Comfortable in the spotlight");
    } else if big_five.extraversion <= LOW_TRAIT {
        push_unique(&mut labels, "Reflective");
        push_unique(&mut labels, "Works well independently");
    }
    if big_five.agreeableness >= HIGH_TRAIT {
        push_unique(&mut labels, "Supportive team player");
    }
    if big_five.conscientiousness >= HIGH_TRAIT {
        push_unique(&mut labels, "Follows through on commitments");
    }
    if big_five.neuroticism <= LOW_TRAIT {
        push_unique(&mut labels, "Calm under pressure");
    }
    if let Some(label) = dominant_axis_label(thinking) {
        push_unique(&mut labels, label);
    }

    labels.truncate(MAX_FEATURE_LABELS);

    TypeResult {
        type_code,
        type_name: type_name(type_code),
        feature_labels: labels,
    }
}

pub(crate) fn classify_stress_tolerance(neuroticism: u8) -> StressTolerance {
    // Lower neuroticism means higher tolerance.
    if neuroticism <= STRESS_HIGH_CEILING {
        StressTolerance::High
    } else if neuroticism <= STRESS_MEDIUM_CEILING {
        StressTolerance::Medium
    } else {
        StressTolerance::Low
    }
}

const fn type_name(code: TypeCode) -> &'static str {
    match code {
        TypeCode::EE => "Trailblazer",
        TypeCode::EI => "Driver",
        TypeCode::IE => "Innovator",
        TypeCode::II => "Anchor",
    }
}

const fn base_labels(code: TypeCode) -> [&'static str; 4] {
    match code {
        TypeCode::EE => ["Outgoing", "Curious", "Adaptable", "Rallies others"],
        TypeCode::EI => ["Action-oriented", "Decisive", "Practical", "Results-focused"],
        TypeCode::IE => [
            "Imaginative",
            "Independent thinker",
            "Deep focus",
            "Open to new ideas",
        ],
        TypeCode::II => ["Steady", "Careful", "Dependable", "Detail-minded"],
    }
}

/// Label for the strongest thinking axis, if it clears the floor. Ties break
/// toward the earlier axis in leader/analyst/supporter/energetic order.
fn dominant_axis_label(thinking: &ThinkingPattern) -> Option<&'static str> {
    let axes = [
        (thinking.leader, "Takes charge naturally"),
        (thinking.analyst, "Data-driven thinker"),
        (thinking.supporter, "Attentive listener"),
        (thinking.energetic, "Quick to act"),
    ];

    let strongest = axes.iter().map(|(value, _)| *value).max().unwrap_or(0);
    if strongest < DOMINANT_AXIS_FLOOR {
        return None;
    }

    axes.iter()
        .copied()
        .find(|(value, _)| *value == strongest)
        .map(|(_, label)| label)
}

fn push_unique(labels: &mut Vec<&'static str>, label: &'static str) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}
