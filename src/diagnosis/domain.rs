use serde::{Deserialize, Serialize};

/// One answered seven-point Likert item, as collected by the survey platform.
///
/// Records arrive pre-validated (score range, category spelling) from the
/// intake collaborator; the pipeline consumes them as-is. Order within the
/// `Thinking` and `Behavior` categories is significant; see the aggregation
/// module for the positional sub-axis contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    /// Raw answer on the 1-7 scale.
    pub score: u8,
    pub category: QuestionCategory,
    /// Reverse-keyed items are inverted around the scale midpoint before
    /// aggregation.
    pub is_reverse: bool,
}

/// Question bank categories: the five Big Five traits plus the two
/// positionally-split pattern blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Extraversion,
    Openness,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Thinking,
    Behavior,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Extraversion,
            Self::Openness,
            Self::Agreeableness,
            Self::Conscientiousness,
            Self::Neuroticism,
            Self::Thinking,
            Self::Behavior,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Extraversion => "extraversion",
            Self::Openness => "openness",
            Self::Agreeableness => "agreeableness",
            Self::Conscientiousness => "conscientiousness",
            Self::Neuroticism => "neuroticism",
            Self::Thinking => "thinking",
            Self::Behavior => "behavior",
        }
    }
}

/// Every axis the engine scores. Keys the norm table and the job requirement
/// profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Extraversion,
    Openness,
    Agreeableness,
    Conscientiousness,
    Neuroticism,
    Leader,
    Analyst,
    Supporter,
    Energetic,
    Efficiency,
    Friendliness,
    Knowledge,
    Appearance,
    Challenge,
}

impl Factor {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::Extraversion,
            Self::Openness,
            Self::Agreeableness,
            Self::Conscientiousness,
            Self::Neuroticism,
            Self::Leader,
            Self::Analyst,
            Self::Supporter,
            Self::Energetic,
            Self::Efficiency,
            Self::Friendliness,
            Self::Knowledge,
            Self::Appearance,
            Self::Challenge,
        ]
    }

    /// Presentation name used in reports and matching-factor lists.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Extraversion => "Extraversion",
            Self::Openness => "Openness",
            Self::Agreeableness => "Agreeableness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Neuroticism => "Emotional Stability",
            Self::Leader => "Leadership",
            Self::Analyst => "Analytical Thinking",
            Self::Supporter => "Supportiveness",
            Self::Energetic => "Energy",
            Self::Efficiency => "Efficiency",
            Self::Friendliness => "Friendliness",
            Self::Knowledge => "Knowledge",
            Self::Appearance => "Appearance",
            Self::Challenge => "Challenge",
        }
    }
}

/// Per-factor averages on the raw 1-7 scale, computed once per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawScores {
    pub extraversion: f64,
    pub openness: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub neuroticism: f64,
    pub leader: f64,
    pub analyst: f64,
    pub supporter: f64,
    pub energetic: f64,
    pub efficiency: f64,
    pub friendliness: f64,
    pub knowledge: f64,
    pub appearance: f64,
    pub challenge: f64,
}

/// Big Five trait profile as clamped T-scores (20-80, mean 50, SD 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BigFiveScores {
    pub extraversion: u8,
    pub openness: u8,
    pub agreeableness: u8,
    pub conscientiousness: u8,
    pub neuroticism: u8,
}

/// Thinking-style axes (leader / analyst / supporter / energetic) as T-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThinkingPattern {
    pub leader: u8,
    pub analyst: u8,
    pub supporter: u8,
    pub energetic: u8,
}

/// Workplace-behavior axes as T-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BehaviorPattern {
    pub efficiency: u8,
    pub friendliness: u8,
    pub knowledge: u8,
    pub appearance: u8,
    pub challenge: u8,
}

/// Two-letter quadrant code from the extraversion and openness halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeCode {
    EE,
    EI,
    IE,
    II,
}

impl TypeCode {
    /// The quadrant is a pure function of which half of the scale each axis
    /// landed in; the midpoint (50) counts as the upper half.
    pub const fn from_axes(extraverted: bool, open: bool) -> Self {
        match (extraverted, open) {
            (true, true) => Self::EE,
            (true, false) => Self::EI,
            (false, true) => Self::IE,
            (false, false) => Self::II,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EE => "EE",
            Self::EI => "EI",
            Self::IE => "IE",
            Self::II => "II",
        }
    }
}

/// Typology assigned to a respondent, with its descriptive feature labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeResult {
    pub type_code: TypeCode,
    pub type_name: &'static str,
    /// At most eight unique labels, base quadrant labels first.
    pub feature_labels: Vec<&'static str>,
}

/// Stress-tolerance tier, inversely derived from the neuroticism T-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StressTolerance {
    High,
    Medium,
    Low,
}

impl StressTolerance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Verdict bands for the reliability assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityStatus {
    Reliable,
    NeedsReview,
    Unreliable,
}

impl ReliabilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reliable => "Reliable",
            Self::NeedsReview => "Needs Review",
            Self::Unreliable => "Unreliable",
        }
    }
}

/// Outcome of the answer-reliability heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReliabilityResult {
    pub status: ReliabilityStatus,
    /// Human-readable descriptions of every heuristic that fired.
    pub issues: Vec<String>,
    /// 0-100, starting from 100 with deductions applied per issue.
    pub score: u8,
}

/// Letter grade bands for job-fit scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitGrade {
    A,
    B,
    C,
    D,
}

impl FitGrade {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::A
        } else if score >= 60 {
            Self::B
        } else if score >= 40 {
            Self::C
        } else {
            Self::D
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Fit assessment for one job profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotentialScoreResult {
    pub job_type: &'static str,
    /// 0-100 weighted fit score.
    pub score: u8,
    pub grade: FitGrade,
    /// Up to five requirement factors the respondent scored strongly on.
    pub matching_factors: Vec<&'static str>,
}

/// Aggregate output of the six-stage pipeline. A plain value with no identity;
/// persistence and reporting collaborators own storage and lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisCalculationResult {
    pub raw_scores: RawScores,
    pub big_five: BigFiveScores,
    pub thinking: ThinkingPattern,
    pub behavior: BehaviorPattern,
    pub type_result: TypeResult,
    pub stress_tolerance: StressTolerance,
    pub reliability: ReliabilityResult,
    /// One entry per known job profile, sorted descending by score.
    pub job_potential: Vec<PotentialScoreResult>,
}
