//! Norm table and the T-score transform applied to every raw factor average.

use serde::Serialize;

use super::domain::{BehaviorPattern, BigFiveScores, Factor, RawScores, ThinkingPattern};

/// Floor of the reported T-score band.
pub const DEVIATION_FLOOR: u8 = 20;
/// Ceiling of the reported T-score band.
pub const DEVIATION_CEILING: u8 = 80;
/// Center of the T-score convention (mean of the norming population).
pub const DEVIATION_MIDPOINT: u8 = 50;

/// Population calibration for one factor on the raw 1-7 scale.
///
/// `sd` must be positive; this is a configuration invariant of the table
/// below, guarded by tests rather than checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorNorm {
    pub mean: f64,
    pub sd: f64,
}

/// Calibration table from the most recent norming study. Means sit at the
/// scale midpoint; the spread varies per factor. Recalibrating the engine
/// means editing this table only.
pub const fn norm(factor: Factor) -> FactorNorm {
    match factor {
        Factor::Extraversion => FactorNorm { mean: 4.0, sd: 1.15 },
        Factor::Openness => FactorNorm { mean: 4.0, sd: 1.05 },
        Factor::Agreeableness => FactorNorm { mean: 4.0, sd: 0.95 },
        Factor::Conscientiousness => FactorNorm { mean: 4.0, sd: 1.0 },
        Factor::Neuroticism => FactorNorm { mean: 4.0, sd: 1.2 },
        Factor::Leader => FactorNorm { mean: 4.0, sd: 1.1 },
        Factor::Analyst => FactorNorm { mean: 4.0, sd: 1.0 },
        Factor::Supporter => FactorNorm { mean: 4.0, sd: 0.9 },
        Factor::Energetic => FactorNorm { mean: 4.0, sd: 1.1 },
        Factor::Efficiency => FactorNorm { mean: 4.0, sd: 1.0 },
        Factor::Friendliness => FactorNorm { mean: 4.0, sd: 0.9 },
        Factor::Knowledge => FactorNorm { mean: 4.0, sd: 1.0 },
        Factor::Appearance => FactorNorm { mean: 4.0, sd: 1.05 },
        Factor::Challenge => FactorNorm { mean: 4.0, sd: 1.15 },
    }
}

/// T-score transform: mean 50, SD 10, rounded, clamped to the reporting band.
/// Total over all finite inputs.
pub(crate) fn deviation_score(raw: f64, norm: FactorNorm) -> u8 {
    let scaled = (raw - norm.mean) / norm.sd * 10.0 + f64::from(DEVIATION_MIDPOINT);
    scaled
        .round()
        .clamp(f64::from(DEVIATION_FLOOR), f64::from(DEVIATION_CEILING)) as u8
}

pub(crate) fn normalize(raw: &RawScores) -> (BigFiveScores, ThinkingPattern, BehaviorPattern) {
    let score = |value: f64, factor: Factor| deviation_score(value, norm(factor));

    let big_five = BigFiveScores {
        extraversion: score(raw.extraversion, Factor::Extraversion),
        openness: score(raw.openness, Factor::Openness),
        agreeableness: score(raw.agreeableness, Factor::Agreeableness),
        conscientiousness: score(raw.conscientiousness, Factor::Conscientiousness),
        neuroticism: score(raw.neuroticism, Factor::Neuroticism),
    };
    let thinking = ThinkingPattern {
        leader: score(raw.leader, Factor::Leader),
        analyst: score(raw.analyst, Factor::Analyst),
        supporter: score(raw.supporter, Factor::Supporter),
        energetic: score(raw.energetic, Factor::Energetic),
    };
    let behavior = BehaviorPattern {
        efficiency: score(raw.efficiency, Factor::Efficiency),
        friendliness: score(raw.friendliness, Factor::Friendliness),
        knowledge: score(raw.knowledge, Factor::Knowledge),
        appearance: score(raw.appearance, Factor::Appearance),
        challenge: score(raw.challenge, Factor::Challenge),
    };

    (big_five, thinking, behavior)
}
