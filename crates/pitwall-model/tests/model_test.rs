use pitwall_core::constants::INITIAL_BIAS;
use pitwall_core::{BiasMetric, FeedbackLevel, SetupVector};
use pitwall_model::confidence::compute_breakdown;
use pitwall_model::*;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn neutral_setup_reference_values() {
    let bias = compute_bias(&SetupVector::NEUTRAL);
    assert_eq!(bias, INITIAL_BIAS);
    assert_eq!(bias.oversteer, 0.5);
    assert_eq!(bias.braking_stability, 0.45);
    assert_eq!(bias.cornering, 0.2);
    assert_eq!(bias.traction, 0.25);
    assert_eq!(bias.straights, 1.0);

    let breakdown = compute_breakdown(&bias);
    let expected_penalties = [0.0, 5.0, 20.0, 20.0, 20.0];
    for (i, expected) in expected_penalties.iter().enumerate() {
        assert_close(breakdown.penalties[i], *expected, "penalty");
    }
    assert_close(compute_confidence(&bias), 35.0, "confidence");
}

#[test]
fn all_max_setup_reference_values() {
    let bias = compute_bias(&SetupVector::uniform(1.0));
    assert_close(bias.oversteer, 0.6, "oversteer");
    assert_close(bias.braking_stability, 0.375, "braking_stability");
    assert_close(bias.cornering, 0.525, "cornering");
    assert_close(bias.traction, 0.5, "traction");
    assert_close(bias.straights, 0.5, "straights");
    assert_close(compute_confidence(&bias), 75.0, "confidence");
}

#[test]
fn overall_feedback_for_reference_setups() {
    assert_eq!(
        classify_feedback(&compute_bias(&SetupVector::NEUTRAL)),
        FeedbackLevel::Bad
    );
    assert_eq!(
        classify_feedback(&compute_bias(&SetupVector::uniform(1.0))),
        FeedbackLevel::Good
    );
}

#[test]
fn evaluate_fills_every_field_consistently() {
    let setup = SetupVector::new(0.2, 0.8, 0.4, 1.0, 0.6);
    let candidate = evaluate(setup);
    assert_eq!(candidate.setup, setup);
    assert_eq!(candidate.bias, compute_bias(&setup));
    assert_eq!(candidate.confidence, predict_confidence(&setup));
    assert_eq!(candidate.feedback, feedback_vector(&candidate.bias));
    assert_eq!(
        candidate.score,
        score(&setup, &candidate.bias, candidate.confidence)
    );
}

#[test]
fn per_metric_feedback_of_neutral_setup() {
    let levels = feedback_vector(&compute_bias(&SetupVector::NEUTRAL));
    assert_eq!(levels.get(BiasMetric::Oversteer), FeedbackLevel::Optimal);
    assert_eq!(levels.get(BiasMetric::BrakingStability), FeedbackLevel::Great);
    assert_eq!(levels.get(BiasMetric::Cornering), FeedbackLevel::Good);
    assert_eq!(levels.get(BiasMetric::Traction), FeedbackLevel::Good);
    // 0.5 / 5 sits exactly on the GOOD threshold, which is exclusive.
    assert_eq!(levels.get(BiasMetric::Straights), FeedbackLevel::Bad);
}
