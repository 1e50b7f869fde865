//! # pitwall-model
//!
//! Pure functions from a setup to everything derived from it:
//! setup → bias → {confidence, feedback} → score.
//! No state, no randomness, no I/O.

pub mod bias;
pub mod confidence;
pub mod evaluator;
pub mod feedback;
pub mod scoring;

pub use bias::compute_bias;
pub use confidence::{compute_confidence, ConfidenceBreakdown};
pub use evaluator::{evaluate, predict_confidence};
pub use feedback::{classify_feedback, classify_metric, compatible, feedback_vector};
pub use scoring::{score, ScoreBreakdown};
