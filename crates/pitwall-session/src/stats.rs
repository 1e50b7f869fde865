use serde::{Deserialize, Serialize};

/// Snapshot of a session's progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub pool_size: usize,
    pub attempt_count: usize,
    /// Confidence of the top-ranked candidate; 0 for an empty pool.
    pub best_confidence: f64,
    pub convergence_rate: f64,
}
