use pitwall_core::constants::{
    BALANCE_WEIGHT, DIMENSIONS, EXTREME_PENALTY_WEIGHT, NEUTRAL_SETUP_VALUE,
};
use pitwall_core::{BiasVector, SetupVector};

/// Ranking score for a candidate.
///
/// ```text
/// score = confidence + (0.5 − balance) × 20 − extremePenalty
/// ```
///
/// `balance` is the mean distance of the setup parameters from 0.5, so
/// centred setups earn up to +10. `extremePenalty` charges 50 per unit of
/// bias outside [0, 1]. Floored at 0.
pub fn score(setup: &SetupVector, bias: &BiasVector, confidence: f64) -> f64 {
    compute_breakdown(setup, bias, confidence).score
}

/// Mean distance of the setup parameters from the middle of their range.
pub fn balance(setup: &SetupVector) -> f64 {
    let total: f64 = setup
        .to_array()
        .iter()
        .map(|p| (p - NEUTRAL_SETUP_VALUE).abs())
        .sum();
    total / DIMENSIONS as f64
}

/// Sum of `50 × overflow` over bias metrics that leave [0, 1].
pub fn extreme_penalty(bias: &BiasVector) -> f64 {
    bias.to_array()
        .iter()
        .map(|v| EXTREME_PENALTY_WEIGHT * overflow(*v).abs())
        .sum()
}

/// Signed distance past the nearest bound of [0, 1]; 0 inside the range.
fn overflow(value: f64) -> f64 {
    if value < 0.0 {
        value
    } else if value > 1.0 {
        value - 1.0
    } else {
        0.0
    }
}

/// Each term of the score, for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub confidence: f64,
    pub balance: f64,
    pub balance_bonus: f64,
    pub extreme_penalty: f64,
    pub score: f64,
}

pub fn compute_breakdown(
    setup: &SetupVector,
    bias: &BiasVector,
    confidence: f64,
) -> ScoreBreakdown {
    let balance = balance(setup);
    let balance_bonus = (0.5 - balance) * BALANCE_WEIGHT;
    let extreme_penalty = extreme_penalty(bias);
    let score = (confidence + balance_bonus - extreme_penalty).max(0.0);

    ScoreBreakdown {
        confidence,
        balance,
        balance_bonus,
        extreme_penalty,
        score,
    }
}
