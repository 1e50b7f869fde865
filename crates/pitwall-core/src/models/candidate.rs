use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackVector;
use crate::vectors::{BiasVector, SetupVector};

/// A fully evaluated setup. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub setup: SetupVector,
    pub bias: BiasVector,
    /// Confidence in [0, 100].
    pub confidence: f64,
    /// Per-metric feedback the setup is expected to earn.
    pub feedback: FeedbackVector,
    /// Ranking score, never negative.
    pub score: f64,
}
