use pitwall_core::constants::{
    BIAS_TARGET, CONFIDENCE_PENALTY_SCALE, CONFIDENCE_TOLERANCE, DIMENSIONS, MAX_CONFIDENCE,
    MAX_METRIC_PENALTY,
};
use pitwall_core::BiasVector;

/// Confidence that a bias vector is ideal, in [0, 100].
///
/// Starts at 100 and, for each metric whose distance from the flat 0.5 target
/// exceeds the tolerance, subtracts `min(distance × 100, 20)`.
///
/// Note that the target is 0.5 for every metric even though the neutral
/// bias is not; see DESIGN.md.
pub fn compute_confidence(bias: &BiasVector) -> f64 {
    let penalty: f64 = bias.to_array().iter().map(|v| metric_penalty(*v)).sum();
    (MAX_CONFIDENCE - penalty).max(0.0)
}

/// Penalty contributed by a single bias metric value.
pub fn metric_penalty(value: f64) -> f64 {
    let distance = (value - BIAS_TARGET).abs();
    if distance > CONFIDENCE_TOLERANCE {
        (distance * CONFIDENCE_PENALTY_SCALE).min(MAX_METRIC_PENALTY)
    } else {
        0.0
    }
}

/// Per-metric view of the confidence calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBreakdown {
    pub distances: [f64; DIMENSIONS],
    pub penalties: [f64; DIMENSIONS],
    pub confidence: f64,
}

/// Compute confidence with the distance and penalty of every metric.
pub fn compute_breakdown(bias: &BiasVector) -> ConfidenceBreakdown {
    let values = bias.to_array();
    let distances = values.map(|v| (v - BIAS_TARGET).abs());
    let penalties = values.map(metric_penalty);
    let confidence = (MAX_CONFIDENCE - penalties.iter().sum::<f64>()).max(0.0);

    ConfidenceBreakdown {
        distances,
        penalties,
        confidence,
    }
}
