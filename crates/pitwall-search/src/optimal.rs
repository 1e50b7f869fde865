use pitwall_core::config::SearchConfig;
use pitwall_core::{Candidate, FeedbackVector, PitwallResult, SetupVector};
use tracing::info;

use crate::generator::{CandidateGenerator, RankBy};
use crate::grid::SetupGrid;

/// Ranked setups from a full grid search, best confidence first.
///
/// Without `feedback` every grid point is eligible; with it only setups whose
/// per-metric feedback is compatible with it. An empty result is a valid
/// outcome: nothing on the grid matches.
pub fn find_optimal_setup(
    feedback: Option<&FeedbackVector>,
    config: &SearchConfig,
) -> PitwallResult<Vec<SetupVector>> {
    Ok(find_optimal_candidates(feedback, config)?
        .into_iter()
        .map(|c| c.setup)
        .collect())
}

/// Same search as [`find_optimal_setup`], returning the full candidates.
pub fn find_optimal_candidates(
    feedback: Option<&FeedbackVector>,
    config: &SearchConfig,
) -> PitwallResult<Vec<Candidate>> {
    let grid = SetupGrid::new(config.effective_step_count(), config.effective_stride())?;
    let generator = CandidateGenerator::new(grid)
        .with_target(feedback.copied())
        .rank_by(RankBy::Confidence)
        .parallel(config.effective_parallel());

    let top = generator.top(config.effective_top_n());
    info!(
        step_count = config.effective_step_count(),
        filtered = feedback.is_some(),
        results = top.len(),
        best_confidence = top.first().map(|c| c.confidence).unwrap_or(0.0),
        "optimal setup search complete"
    );
    Ok(top)
}
