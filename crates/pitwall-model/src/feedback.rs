//! Feedback classification: one overall level for a bias vector, and the
//! per-metric levels a candidate is expected to earn.

use pitwall_core::constants::{
    BIAS_TARGET, DIMENSIONS, GOOD_THRESHOLD, GREAT_THRESHOLD, OPTIMAL_THRESHOLD,
};
use pitwall_core::{BiasMetric, BiasVector, FeedbackLevel, FeedbackVector};

/// Overall level from the mean per-metric distance to 0.5.
pub fn classify_feedback(bias: &BiasVector) -> FeedbackLevel {
    let total: f64 = bias
        .to_array()
        .iter()
        .map(|v| (v - BIAS_TARGET).abs())
        .sum();
    classify_mean_distance(total / DIMENSIONS as f64)
}

/// Map a mean distance onto the ordinal scale. Thresholds are strict.
pub fn classify_mean_distance(mean_distance: f64) -> FeedbackLevel {
    if mean_distance < OPTIMAL_THRESHOLD {
        FeedbackLevel::Optimal
    } else if mean_distance < GREAT_THRESHOLD {
        FeedbackLevel::Great
    } else if mean_distance < GOOD_THRESHOLD {
        FeedbackLevel::Good
    } else {
        FeedbackLevel::Bad
    }
}

/// Level for one metric, classified in isolation: the metric keeps its
/// value and the other four sit at the 0.5 target.
pub fn classify_metric(bias: &BiasVector, metric: BiasMetric) -> FeedbackLevel {
    let isolated = BiasVector::from_array([BIAS_TARGET; DIMENSIONS]).with(metric, bias.get(metric));
    classify_feedback(&isolated)
}

/// Per-metric levels for a whole bias vector.
pub fn feedback_vector(bias: &BiasVector) -> FeedbackVector {
    FeedbackVector::from_array(BiasMetric::ALL.map(|m| classify_metric(bias, m)))
}

/// Per-level compatibility: ordinals differ by at most one.
pub fn compatible(a: FeedbackLevel, b: FeedbackLevel) -> bool {
    a.is_compatible_with(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_select_levels() {
        assert_eq!(classify_mean_distance(0.0), FeedbackLevel::Optimal);
        assert_eq!(classify_mean_distance(0.007), FeedbackLevel::Great);
        assert_eq!(classify_mean_distance(0.039), FeedbackLevel::Great);
        assert_eq!(classify_mean_distance(0.04), FeedbackLevel::Good);
        assert_eq!(classify_mean_distance(0.1), FeedbackLevel::Bad);
        assert_eq!(classify_mean_distance(3.0), FeedbackLevel::Bad);
    }

    #[test]
    fn isolation_divides_distance_by_five() {
        // distance 0.15 alone → mean 0.03 → GREAT; overall with four others
        // at target gives the same result.
        let bias = BiasVector::from_array([0.65, 0.5, 0.5, 0.5, 0.5]);
        assert_eq!(classify_metric(&bias, BiasMetric::Oversteer), FeedbackLevel::Great);
        assert_eq!(classify_metric(&bias, BiasMetric::Traction), FeedbackLevel::Optimal);
        assert_eq!(classify_feedback(&bias), FeedbackLevel::Great);
    }

    #[test]
    fn per_metric_levels_ignore_other_metrics() {
        let bias = BiasVector::from_array([0.5, 3.0, 0.5, -2.0, 0.5]);
        let levels = feedback_vector(&bias);
        assert_eq!(levels.oversteer, FeedbackLevel::Optimal);
        assert_eq!(levels.braking_stability, FeedbackLevel::Bad);
        assert_eq!(levels.cornering, FeedbackLevel::Optimal);
        assert_eq!(levels.traction, FeedbackLevel::Bad);
    }
}
