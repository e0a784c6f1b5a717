//! Personality diagnosis pipeline.
//!
//! Six ordered, pure stages over an in-memory answer list: raw score
//! aggregation, T-score normalization, type classification, stress-tolerance
//! banding, reliability assessment, and job-fit scoring. [`calculate`] runs
//! them in sequence and returns one aggregate value.
//!
//! The pipeline never fails on well-typed input: missing categories fall back
//! to neutral midpoints rather than erroring, and there is no I/O, clock, or
//! randomness anywhere in the path, so identical input produces identical
//! output. Concurrent callers need no coordination since every invocation
//! works on its own values.

mod aggregation;
pub mod domain;
pub mod jobs;
pub mod norms;
mod potential;
mod reliability;
mod typing;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerRecord, BehaviorPattern, BigFiveScores, DiagnosisCalculationResult, Factor, FitGrade,
    PotentialScoreResult, QuestionCategory, RawScores, ReliabilityResult, ReliabilityStatus,
    StressTolerance, ThinkingPattern, TypeCode, TypeResult,
};
pub use jobs::{job_profile, job_profiles, job_types, FactorRequirement, IdealDirection, JobProfile};
pub use norms::FactorNorm;

/// Runs the full diagnosis over one respondent's ordered answer list.
pub fn calculate(answers: &[AnswerRecord]) -> DiagnosisCalculationResult {
    let raw_scores = aggregation::aggregate(answers);
    let (big_five, thinking, behavior) = norms::normalize(&raw_scores);
    let type_result = typing::classify_type(&big_five, &thinking);
    let stress_tolerance = typing::classify_stress_tolerance(big_five.neuroticism);
    let reliability = reliability::assess(answers);
    let job_potential = potential::score_jobs(&big_five, &thinking, &behavior);

    DiagnosisCalculationResult {
        raw_scores,
        big_five,
        thinking,
        behavior,
        type_result,
        stress_tolerance,
        reliability,
        job_potential,
    }
}
