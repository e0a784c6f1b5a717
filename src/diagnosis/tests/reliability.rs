use super::common::*;
use crate::diagnosis::domain::QuestionCategory::*;
use crate::diagnosis::domain::ReliabilityStatus;
use crate::diagnosis::reliability::assess;

#[test]
fn empty_submission_passes_through_unflagged() {
    let result = assess(&[]);

    assert_eq!(result.score, 100);
    assert_eq!(result.status, ReliabilityStatus::Reliable);
    assert!(result.issues.is_empty());
}

#[test]
fn consistent_varied_submission_keeps_the_full_score() {
    let result = assess(&varied_sheet());

    assert_eq!(result.score, 100);
    assert_eq!(result.status, ReliabilityStatus::Reliable);
    assert!(result.issues.is_empty());
}

#[test]
fn thirty_identical_answers_are_flagged_as_straight_lining() {
    let mut answers = block(Extraversion, &[5; 10]);
    answers.extend(block(Openness, &[5; 10]));
    answers.extend(block(Thinking, &[5; 10]));

    let result = assess(&answers);

    // Straight-lining (-30) plus zero variance (-15).
    assert_eq!(result.score, 55);
    assert_eq!(result.status, ReliabilityStatus::NeedsReview);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("30 consecutive identical answers")));
}

#[test]
fn a_moderate_run_costs_fifteen_points() {
    let mut answers = block(Extraversion, &[6, 6, 6, 6, 6, 6, 6, 6]);
    answers.extend(block(Openness, &[1, 2, 3, 5, 7, 2, 5, 3]));

    let result = assess(&answers);

    assert_eq!(result.score, 85);
    assert_eq!(result.issues, vec!["8 consecutive identical answers"]);
}

#[test]
fn extreme_heavy_submissions_are_deducted_by_tier() {
    let all_extreme = block(Extraversion, &[1, 7, 1, 7, 1, 7, 1, 7, 1, 7]);
    let result = assess(&all_extreme);
    assert_eq!(result.score, 75);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("dominate")));

    let six_of_ten = block(Extraversion, &[1, 7, 1, 7, 1, 7, 2, 5, 3, 6]);
    let result = assess(&six_of_ten);
    assert_eq!(result.score, 90);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("high share of extreme answers")));
}

#[test]
fn midpoint_heavy_submissions_are_deducted_by_tier() {
    let seven_of_ten = block(Extraversion, &[4, 4, 6, 4, 4, 2, 4, 4, 5, 4]);
    let result = assess(&seven_of_ten);
    assert_eq!(result.score, 80);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("most answers sit at the scale midpoint")));

    let five_of_ten = block(Extraversion, &[4, 6, 4, 2, 4, 6, 4, 2, 4, 6]);
    let result = assess(&five_of_ten);
    assert_eq!(result.score, 90);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("frequent midpoint answers")));
}

#[test]
fn near_constant_answers_trip_the_variance_check_alone() {
    let answers = block(Extraversion, &[5, 6, 5, 6, 5, 6, 5, 6, 5, 6]);

    let result = assess(&answers);

    assert_eq!(result.score, 85);
    assert_eq!(result.issues, vec!["answers show almost no variation"]);
}

#[test]
fn two_inconsistent_categories_cost_ten_points() {
    let mut answers = Vec::new();
    answers.extend(block(Extraversion, &[6, 7]));
    answers.extend(reverse_block(Extraversion, &[7, 6]));
    answers.extend(block(Openness, &[6, 7]));
    answers.extend(reverse_block(Openness, &[7, 6]));
    answers.extend(block(Conscientiousness, &[2, 3]));

    let result = assess(&answers);

    assert_eq!(result.score, 90);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("2 categories")));
}

#[test]
fn three_inconsistent_categories_cost_twenty_points() {
    let mut answers = Vec::new();
    answers.extend(block(Extraversion, &[6, 7]));
    answers.extend(reverse_block(Extraversion, &[7, 6]));
    answers.extend(block(Openness, &[6, 7]));
    answers.extend(reverse_block(Openness, &[7, 6]));
    answers.extend(block(Agreeableness, &[7, 6]));
    answers.extend(reverse_block(Agreeableness, &[6, 7]));
    answers.extend(block(Conscientiousness, &[2, 3]));

    let result = assess(&answers);

    assert_eq!(result.score, 80);
    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("3 categories")));
}

#[test]
fn low_direction_agreement_also_counts_as_inconsistent() {
    // Both keys deep in the disagree zone (<3.5) in one category.
    let mut answers = Vec::new();
    answers.extend(block(Extraversion, &[2, 3]));
    answers.extend(reverse_block(Extraversion, &[3, 2]));
    answers.extend(block(Openness, &[2, 3]));
    answers.extend(reverse_block(Openness, &[3, 2]));
    answers.extend(block(Conscientiousness, &[6, 5]));

    let result = assess(&answers);

    assert!(result
        .issues
        .iter()
        .any(|issue| issue.contains("2 categories")));
}

#[test]
fn compounding_deductions_saturate_toward_the_floor() {
    // Ninety identical extreme answers: straight-lining, extreme ratio, zero
    // variance, and same-direction reverse agreement in all seven categories.
    let result = assess(&uniform_sheet(7));

    assert_eq!(result.score, 10);
    assert_eq!(result.status, ReliabilityStatus::Unreliable);
    assert_eq!(result.issues.len(), 4);
}

#[test]
fn adding_straight_lining_never_raises_the_score() {
    let baseline = assess(&varied_sheet());

    let mut straight_lined = varied_sheet();
    for answer in straight_lined.iter_mut().take(15) {
        answer.score = 6;
    }
    let degraded = assess(&straight_lined);

    assert!(degraded.score < baseline.score);
    assert_eq!(degraded.score, 70);
}
