//! Job-fit scoring: the normalized profile against every role in the
//! requirement table.

use super::domain::{
    BehaviorPattern, BigFiveScores, Factor, FitGrade, PotentialScoreResult, ThinkingPattern,
};
use super::jobs::{job_profiles, IdealDirection, JobProfile};
use super::norms::{DEVIATION_CEILING, DEVIATION_FLOOR, DEVIATION_MIDPOINT};

/// Factor score at or above which the factor is reported as a match.
const MATCHING_FACTOR_FLOOR: f64 = 70.0;
const MAX_MATCHING_FACTORS: usize = 5;
/// Fallback for a profile carrying no weight; the shipped table never does.
const NEUTRAL_JOB_SCORE: u8 = 50;

pub(crate) fn score_jobs(
    big_five: &BigFiveScores,
    thinking: &ThinkingPattern,
    behavior: &BehaviorPattern,
) -> Vec<PotentialScoreResult> {
    let mut results: Vec<PotentialScoreResult> = job_profiles()
        .iter()
        .map(|profile| score_job(profile, big_five, thinking, behavior))
        .collect();

    // Stable sort keeps table order between equal scores, so output is
    // deterministic for identical input.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

pub(crate) fn score_job(
    profile: &JobProfile,
    big_five: &BigFiveScores,
    thinking: &ThinkingPattern,
    behavior: &BehaviorPattern,
) -> PotentialScoreResult {
    let band = f64::from(DEVIATION_CEILING - DEVIATION_FLOOR);
    let mut weighted_total = 0.0;
    let mut weight_total = 0.0;
    let mut matching_factors: Vec<&'static str> = Vec::new();

    for requirement in &profile.requirements {
        let deviation = f64::from(deviation_for(requirement.factor, big_five, thinking, behavior));
        let factor_score = match requirement.ideal {
            IdealDirection::High => (deviation - f64::from(DEVIATION_FLOOR)) / band * 100.0,
            IdealDirection::Low => (f64::from(DEVIATION_CEILING) - deviation) / band * 100.0,
            IdealDirection::Medium => {
                100.0 - 2.0 * (deviation - f64::from(DEVIATION_MIDPOINT)).abs()
            }
        };

        weighted_total += factor_score * requirement.weight;
        weight_total += requirement.weight;

        if factor_score >= MATCHING_FACTOR_FLOOR
            && !matching_factors.contains(&requirement.factor.label())
        {
            matching_factors.push(requirement.factor.label());
        }
    }

    matching_factors.truncate(MAX_MATCHING_FACTORS);

    let score = if weight_total > 0.0 {
        (weighted_total / weight_total).round() as u8
    } else {
        NEUTRAL_JOB_SCORE
    };

    PotentialScoreResult {
        job_type: profile.job_type,
        score,
        grade: FitGrade::from_score(score),
        matching_factors,
    }
}

fn deviation_for(
    factor: Factor,
    big_five: &BigFiveScores,
    thinking: &ThinkingPattern,
    behavior: &BehaviorPattern,
) -> u8 {
    match factor {
        Factor::Extraversion => big_five.extraversion,
        Factor::Openness => big_five.openness,
        Factor::Agreeableness => big_five.agreeableness,
        Factor::Conscientiousness => big_five.conscientiousness,
        Factor::Neuroticism => big_five.neuroticism,
        Factor::Leader => thinking.leader,
        Factor::Analyst => thinking.analyst,
        Factor::Supporter => thinking.supporter,
        Factor::Energetic => thinking.energetic,
        Factor::Efficiency => behavior.efficiency,
        Factor::Friendliness => behavior.friendliness,
        Factor::Knowledge => behavior.knowledge,
        Factor::Appearance => behavior.appearance,
        Factor::Challenge => behavior.challenge,
    }
}
