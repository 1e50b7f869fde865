//! Local perturbation used to refill a depleted pool.

use pitwall_core::{Candidate, FeedbackVector, SetupVector};
use pitwall_model::evaluate;
use rand::Rng;

/// Jitter every parameter independently by up to ±`range`/2, then clamp to [0, 1].
pub fn perturb<R: Rng + ?Sized>(setup: &SetupVector, range: f64, rng: &mut R) -> SetupVector {
    let half = range / 2.0;
    let values = setup
        .to_array()
        .map(|v| (v + rng.gen_range(-half..=half)).clamp(0.0, 1.0));
    SetupVector::from_array(values)
}

/// `per_survivor` perturbations of each survivor, evaluated, keeping only
/// those whose per-metric feedback is compatible with `target`.
///
/// Survivors are visited in order and perturbations drawn in sequence, so
/// a seeded `rng` reproduces the same candidates.
pub fn regenerate<R: Rng + ?Sized>(
    survivors: &[Candidate],
    target: &FeedbackVector,
    range: f64,
    per_survivor: usize,
    rng: &mut R,
) -> Vec<Candidate> {
    let mut fresh = Vec::with_capacity(survivors.len() * per_survivor);
    for survivor in survivors {
        for _ in 0..per_survivor {
            let candidate = evaluate(perturb(&survivor.setup, range, rng));
            if candidate.feedback.is_compatible_with(target) {
                fresh.push(candidate);
            }
        }
    }
    fresh
}
