//! Answer-reliability heuristics over the raw, ordered answer list.
//!
//! Each heuristic that fires appends a human-readable issue and deducts from a
//! starting score of 100. The checks read raw scores, not the normalized
//! profile, so an unreliable submission still produces a full diagnosis; the
//! verdict tells consumers how much to trust it.

use super::domain::{AnswerRecord, QuestionCategory, ReliabilityResult, ReliabilityStatus};

// Calibration constants, tuned to the 1-7 answer scale and the current
// question bank. Revisit together if either changes.
const SEVERE_RUN: usize = 10;
const MODERATE_RUN: usize = 7;
const SEVERE_RUN_PENALTY: u32 = 30;
const MODERATE_RUN_PENALTY: u32 = 15;

const EXTREME_RATIO_SEVERE: f64 = 0.7;
const EXTREME_RATIO_MODERATE: f64 = 0.5;
const EXTREME_SEVERE_PENALTY: u32 = 25;
const EXTREME_MODERATE_PENALTY: u32 = 10;

const MIDPOINT_RATIO_SEVERE: f64 = 0.6;
const MIDPOINT_RATIO_MODERATE: f64 = 0.4;
const MIDPOINT_SEVERE_PENALTY: u32 = 20;
const MIDPOINT_MODERATE_PENALTY: u32 = 10;

const VARIANCE_FLOOR: f64 = 0.5;
const LOW_VARIANCE_PENALTY: u32 = 15;

/// Same-direction agreement thresholds for the reverse-item check: a category
/// is inconsistent when its normal-keyed and reverse-keyed means are both
/// above the upper bound or both below the lower one.
const REVERSE_AGREE_HIGH: f64 = 4.5;
const REVERSE_AGREE_LOW: f64 = 3.5;
const REVERSE_SEVERE_CATEGORIES: usize = 3;
const REVERSE_MODERATE_CATEGORIES: usize = 2;
const REVERSE_SEVERE_PENALTY: u32 = 20;
const REVERSE_MODERATE_PENALTY: u32 = 10;

const SCALE_MIN: u8 = 1;
const SCALE_MIDPOINT: u8 = 4;
const SCALE_MAX: u8 = 7;

const RELIABLE_FLOOR: u8 = 70;
const NEEDS_REVIEW_FLOOR: u8 = 50;

pub(crate) fn assess(answers: &[AnswerRecord]) -> ReliabilityResult {
    let mut issues = Vec::new();
    let mut deductions: u32 = 0;

    // An empty submission has nothing to measure; completeness is owned by
    // the survey collaborator, so it passes through unflagged.
    if !answers.is_empty() {
        let run = longest_identical_run(answers);
        if run >= SEVERE_RUN {
            issues.push(format!(
                "{run} consecutive identical answers point to straight-lining"
            ));
            deductions += SEVERE_RUN_PENALTY;
        } else if run >= MODERATE_RUN {
            issues.push(format!("{run} consecutive identical answers"));
            deductions += MODERATE_RUN_PENALTY;
        }

        let total = answers.len() as f64;

        let extreme = answers
            .iter()
            .filter(|answer| answer.score == SCALE_MIN || answer.score == SCALE_MAX)
            .count() as f64
            / total;
        if extreme > EXTREME_RATIO_SEVERE {
            issues.push("extreme answers (1 or 7) dominate the submission".to_string());
            deductions += EXTREME_SEVERE_PENALTY;
        } else if extreme > EXTREME_RATIO_MODERATE {
            issues.push("high share of extreme answers (1 or 7)".to_string());
            deductions += EXTREME_MODERATE_PENALTY;
        }

        let midpoint = answers
            .iter()
            .filter(|answer| answer.score == SCALE_MIDPOINT)
            .count() as f64
            / total;
        if midpoint > MIDPOINT_RATIO_SEVERE {
            issues.push("most answers sit at the scale midpoint".to_string());
            deductions += MIDPOINT_SEVERE_PENALTY;
        } else if midpoint > MIDPOINT_RATIO_MODERATE {
            issues.push("frequent midpoint answers".to_string());
            deductions += MIDPOINT_MODERATE_PENALTY;
        }

        if population_variance(answers) < VARIANCE_FLOOR {
            issues.push("answers show almost no variation".to_string());
            deductions += LOW_VARIANCE_PENALTY;
        }

        let inconsistent = inconsistent_categories(answers);
        if inconsistent >= REVERSE_SEVERE_CATEGORIES {
            issues.push(format!(
                "reverse-keyed answers agree with normal items in {inconsistent} categories"
            ));
            deductions += REVERSE_SEVERE_PENALTY;
        } else if inconsistent == REVERSE_MODERATE_CATEGORIES {
            issues.push(format!(
                "reverse-keyed answers agree with normal items in {inconsistent} categories"
            ));
            deductions += REVERSE_MODERATE_PENALTY;
        }
    }

    let score = 100u32.saturating_sub(deductions) as u8;
    let status = if score >= RELIABLE_FLOOR {
        ReliabilityStatus::Reliable
    } else if score >= NEEDS_REVIEW_FLOOR {
        ReliabilityStatus::NeedsReview
    } else {
        ReliabilityStatus::Unreliable
    };

    ReliabilityResult {
        status,
        issues,
        score,
    }
}

fn longest_identical_run(answers: &[AnswerRecord]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for answer in answers {
        if previous == Some(answer.score) {
            current += 1;
        } else {
            current = 1;
            previous = Some(answer.score);
        }
        longest = longest.max(current);
    }

    longest
}

fn population_variance(answers: &[AnswerRecord]) -> f64 {
    let count = answers.len() as f64;
    let mean = answers.iter().map(|answer| f64::from(answer.score)).sum::<f64>() / count;
    answers
        .iter()
        .map(|answer| {
            let delta = f64::from(answer.score) - mean;
            delta * delta
        })
        .sum::<f64>()
        / count
}

/// Counts categories whose normal-keyed and reverse-keyed answers agree in
/// direction where a reverse item should disagree. Categories missing either
/// subset are skipped.
fn inconsistent_categories(answers: &[AnswerRecord]) -> usize {
    QuestionCategory::ordered()
        .iter()
        .filter(|category| {
            let normal = keyed_mean(answers, **category, false);
            let reverse = keyed_mean(answers, **category, true);
            match (normal, reverse) {
                (Some(normal), Some(reverse)) => {
                    (normal > REVERSE_AGREE_HIGH && reverse > REVERSE_AGREE_HIGH)
                        || (normal < REVERSE_AGREE_LOW && reverse < REVERSE_AGREE_LOW)
                }
                _ => false,
            }
        })
        .count()
}

fn keyed_mean(answers: &[AnswerRecord], category: QuestionCategory, reverse: bool) -> Option<f64> {
    let scores: Vec<f64> = answers
        .iter()
        .filter(|answer| answer.category == category && answer.is_reverse == reverse)
        .map(|answer| f64::from(answer.score))
        .collect();

    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}
