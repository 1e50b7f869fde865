use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackVector;
use crate::vectors::SetupVector;

/// One reported practice run. Append-only history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub setup: SetupVector,
    pub feedback: FeedbackVector,
    /// Model confidence for `setup` at the time it was recorded.
    pub confidence: f64,
    pub recorded_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn new(setup: SetupVector, feedback: FeedbackVector, confidence: f64) -> Self {
        Self {
            setup,
            feedback,
            confidence,
            recorded_at: Utc::now(),
        }
    }
}
