use pitwall_core::{Candidate, SetupVector};

use crate::{bias, confidence, feedback, scoring};

/// Evaluate a setup into a full candidate: bias, confidence, per-metric
/// feedback and score.
pub fn evaluate(setup: SetupVector) -> Candidate {
    let bias = bias::compute_bias(&setup);
    let confidence = confidence::compute_confidence(&bias);
    let feedback = feedback::feedback_vector(&bias);
    let score = scoring::score(&setup, &bias, confidence);

    Candidate {
        setup,
        bias,
        confidence,
        feedback,
        score,
    }
}

/// Bias then confidence, without input validation.
pub fn predict_confidence(setup: &SetupVector) -> f64 {
    confidence::compute_confidence(&bias::compute_bias(setup))
}
