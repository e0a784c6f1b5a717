//! Static job requirement table and its read-only accessors.
//!
//! Each profile lists the trait axes that correlate with fit for the role,
//! the direction the axis should lean, and a relative weight. Weights within
//! one profile need not sum to anything in particular; the fit scorer
//! normalizes by the profile's total weight. Adding a role or re-weighting an
//! existing one is a table edit only.

use std::sync::OnceLock;

use serde::Serialize;

use super::domain::Factor;

/// Desired direction for a factor within a job requirement profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealDirection {
    High,
    Low,
    Medium,
}

/// One weighted requirement row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorRequirement {
    pub factor: Factor,
    pub weight: f64,
    pub ideal: IdealDirection,
}

/// Weighted requirement profile for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobProfile {
    pub job_type: &'static str,
    pub description: &'static str,
    pub requirements: Vec<FactorRequirement>,
}

/// The full role table, built once per process.
pub fn job_profiles() -> &'static [JobProfile] {
    static TABLE: OnceLock<Vec<JobProfile>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Lists every job type known to the fit scorer, in table order.
pub fn job_types() -> Vec<&'static str> {
    job_profiles().iter().map(|profile| profile.job_type).collect()
}

/// Case-insensitive lookup of one role's requirement profile.
pub fn job_profile(job_type: &str) -> Option<&'static JobProfile> {
    job_profiles()
        .iter()
        .find(|profile| profile.job_type.eq_ignore_ascii_case(job_type))
}

fn job(
    job_type: &'static str,
    description: &'static str,
    requirements: &[(Factor, f64, IdealDirection)],
) -> JobProfile {
    JobProfile {
        job_type,
        description,
        requirements: requirements
            .iter()
            .map(|&(factor, weight, ideal)| FactorRequirement {
                factor,
                weight,
                ideal,
            })
            .collect(),
    }
}

fn build_table() -> Vec<JobProfile> {
    use Factor::*;
    use IdealDirection::{High, Low, Medium};

    vec![
        job(
            "Field Sales",
            "Quota-carrying outbound sales with heavy in-person prospecting.",
            &[
                (Extraversion, 3.0, High),
                (Energetic, 2.0, High),
                (Challenge, 2.0, High),
                (Neuroticism, 1.5, Low),
                (Friendliness, 1.0, High),
            ],
        ),
        job(
            "Inside Sales",
            "High-volume phone and email pipeline work against monthly targets.",
            &[
                (Extraversion, 2.0, High),
                (Efficiency, 2.0, High),
                (Conscientiousness, 1.5, High),
                (Friendliness, 1.5, High),
            ],
        ),
        job(
            "Customer Success",
            "Long-horizon account care focused on retention and expansion.",
            &[
                (Agreeableness, 3.0, High),
                (Supporter, 2.0, High),
                (Friendliness, 2.0, High),
                (Neuroticism, 1.0, Low),
            ],
        ),
        job(
            "Call Center Operator",
            "Scripted inbound support under strict handling-time expectations.",
            &[
                (Agreeableness, 2.0, High),
                (Neuroticism, 2.0, Low),
                (Supporter, 1.5, High),
                (Conscientiousness, 1.5, High),
                (Extraversion, 1.0, Medium),
            ],
        ),
        job(
            "Marketing Planner",
            "Campaign design and channel planning from audience research.",
            &[
                (Openness, 3.0, High),
                (Analyst, 2.0, High),
                (Appearance, 1.5, High),
                (Extraversion, 1.0, Medium),
            ],
        ),
        job(
            "Public Relations",
            "Press, events, and the public face of the company.",
            &[
                (Extraversion, 2.5, High),
                (Appearance, 2.0, High),
                (Openness, 1.5, High),
                (Friendliness, 1.5, High),
            ],
        ),
        job(
            "Recruiter",
            "Sourcing, screening, and closing candidates across functions.",
            &[
                (Extraversion, 2.0, High),
                (Agreeableness, 2.0, High),
                (Friendliness, 2.0, High),
                (Energetic, 1.0, High),
            ],
        ),
        job(
            "HR Generalist",
            "Employee relations, onboarding, and internal policy work.",
            &[
                (Agreeableness, 2.0, High),
                (Conscientiousness, 2.0, High),
                (Supporter, 1.5, High),
                (Neuroticism, 1.0, Low),
                (Knowledge, 1.0, Medium),
            ],
        ),
        job(
            "Accountant",
            "Closing the books accurately, month after month.",
            &[
                (Conscientiousness, 3.0, High),
                (Analyst, 2.0, High),
                (Efficiency, 1.5, High),
                (Extraversion, 1.0, Low),
                (Openness, 0.5, Medium),
            ],
        ),
        job(
            "Financial Analyst",
            "Modeling, forecasting, and variance analysis for planning.",
            &[
                (Analyst, 3.0, High),
                (Conscientiousness, 2.0, High),
                (Knowledge, 1.5, High),
                (Neuroticism, 1.0, Low),
            ],
        ),
        job(
            "Software Engineer",
            "Designing and maintaining production systems in a team codebase.",
            &[
                (Analyst, 2.5, High),
                (Knowledge, 2.0, High),
                (Conscientiousness, 1.5, High),
                (Openness, 1.5, High),
                (Extraversion, 0.5, Low),
            ],
        ),
        job(
            "Data Analyst",
            "Turning raw product and business data into decisions.",
            &[
                (Analyst, 3.0, High),
                (Knowledge, 2.0, High),
                (Conscientiousness, 1.5, High),
                (Openness, 1.0, Medium),
            ],
        ),
        job(
            "QA Specialist",
            "Systematic verification and regression coverage of releases.",
            &[
                (Conscientiousness, 3.0, High),
                (Analyst, 1.5, High),
                (Efficiency, 1.5, High),
                (Neuroticism, 1.0, Medium),
            ],
        ),
        job(
            "Project Manager",
            "Coordinating scope, schedule, and people across deliverables.",
            &[
                (Leader, 2.5, High),
                (Conscientiousness, 2.0, High),
                (Extraversion, 1.5, High),
                (Efficiency, 1.5, High),
                (Neuroticism, 1.0, Low),
            ],
        ),
        job(
            "Product Manager",
            "Owning problem selection and roadmap trade-offs for a product.",
            &[
                (Leader, 2.0, High),
                (Openness, 2.0, High),
                (Analyst, 1.5, High),
                (Extraversion, 1.5, High),
                (Challenge, 1.0, High),
            ],
        ),
        job(
            "UX Designer",
            "Research-driven interaction design and prototyping.",
            &[
                (Openness, 3.0, High),
                (Appearance, 2.0, High),
                (Supporter, 1.0, High),
                (Analyst, 1.0, Medium),
            ],
        ),
        job(
            "Graphic Designer",
            "Visual identity and production design across media.",
            &[
                (Openness, 2.5, High),
                (Appearance, 2.5, High),
                (Conscientiousness, 1.0, Medium),
                (Extraversion, 0.5, Low),
            ],
        ),
        job(
            "Copywriter",
            "Long- and short-form writing in the brand voice.",
            &[
                (Openness, 3.0, High),
                (Knowledge, 1.5, High),
                (Appearance, 1.5, High),
                (Extraversion, 1.0, Low),
            ],
        ),
        job(
            "Consultant",
            "Client-facing problem structuring and recommendation delivery.",
            &[
                (Analyst, 2.5, High),
                (Extraversion, 2.0, High),
                (Knowledge, 2.0, High),
                (Leader, 1.5, High),
                (Neuroticism, 1.0, Low),
            ],
        ),
        job(
            "Researcher",
            "Deep, self-directed investigation with publishable rigor.",
            &[
                (Openness, 2.5, High),
                (Analyst, 2.5, High),
                (Knowledge, 2.0, High),
                (Extraversion, 1.0, Low),
            ],
        ),
        job(
            "Operations Coordinator",
            "Keeping daily logistics and internal processes running.",
            &[
                (Efficiency, 3.0, High),
                (Conscientiousness, 2.0, High),
                (Supporter, 1.0, High),
                (Neuroticism, 1.0, Low),
            ],
        ),
        job(
            "Logistics Planner",
            "Capacity, routing, and inventory planning against demand.",
            &[
                (Efficiency, 2.5, High),
                (Analyst, 2.0, High),
                (Conscientiousness, 2.0, High),
                (Openness, 0.5, Medium),
            ],
        ),
        job(
            "Retail Store Staff",
            "Floor service, register work, and store presentation.",
            &[
                (Friendliness, 2.5, High),
                (Extraversion, 2.0, High),
                (Appearance, 1.5, High),
                (Efficiency, 1.0, High),
                (Neuroticism, 1.0, Low),
            ],
        ),
        job(
            "Executive Assistant",
            "Calendar, travel, and follow-through for senior leadership.",
            &[
                (Conscientiousness, 2.5, High),
                (Supporter, 2.0, High),
                (Efficiency, 2.0, High),
                (Neuroticism, 1.0, Low),
                (Extraversion, 0.5, Medium),
            ],
        ),
        job(
            "Corporate Trainer",
            "Designing and delivering internal skills programs.",
            &[
                (Extraversion, 2.0, High),
                (Supporter, 2.0, High),
                (Knowledge, 2.0, High),
                (Agreeableness, 1.5, High),
                (Energetic, 1.0, Medium),
            ],
        ),
        job(
            "Care Worker",
            "Hands-on daily support in care and welfare settings.",
            &[
                (Agreeableness, 3.0, High),
                (Supporter, 2.5, High),
                (Neuroticism, 1.5, Low),
                (Friendliness, 1.5, High),
            ],
        ),
        job(
            "New Business Development",
            "Opening markets and building offerings that do not exist yet.",
            &[
                (Challenge, 3.0, High),
                (Leader, 2.0, High),
                (Extraversion, 2.0, High),
                (Energetic, 1.5, High),
                (Neuroticism, 1.0, Low),
                (Openness, 1.0, High),
            ],
        ),
    ]
}
