//! Convergence trend across an attempt history.

use pitwall_core::AttemptRecord;

/// Mean of successive confidence deltas; 0 with fewer than two attempts.
pub fn convergence_rate(attempts: &[AttemptRecord]) -> f64 {
    if attempts.len() < 2 {
        return 0.0;
    }
    let total: f64 = attempts
        .windows(2)
        .map(|w| w[1].confidence - w[0].confidence)
        .sum();
    total / (attempts.len() - 1) as f64
}

/// Attempts still needed to reach `optimal_confidence` at the current rate.
///
/// 0 once reached; `default_estimate` when the trend is flat or negative.
pub fn estimate_attempts(
    best_confidence: f64,
    rate: f64,
    optimal_confidence: f64,
    default_estimate: u32,
) -> u32 {
    if best_confidence >= optimal_confidence {
        return 0;
    }
    if rate <= 0.0 {
        return default_estimate;
    }
    ((optimal_confidence - best_confidence) / rate).ceil() as u32
}
