//! TuningSession: the candidate pool plus attempt history for one driver session.

use pitwall_core::config::NarrowingConfig;
use pitwall_core::{AttemptRecord, Candidate, FeedbackVector, PitwallResult, SetupVector};
use pitwall_model::predict_confidence as model_confidence;
use pitwall_observability::{attempt_span, regeneration_span};
use pitwall_search::{CandidateGenerator, RankBy, SetupGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::convergence;
use crate::perturbation;
use crate::stats::SessionStats;

/// What one recorded attempt did to the pool.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct AttemptOutcome {
    /// Model confidence of the attempted setup.
    pub confidence: f64,
    pub pool_before: usize,
    /// Candidates left after the compatibility filter.
    pub survivors: usize,
    /// Perturbations appended by regeneration.
    pub regenerated: usize,
    pub pool_after: usize,
}

/// Iterative narrower for one session.
///
/// The pool is always sorted by score, descending. It is seeded from the
/// coarse grid, shrinks as feedback filters it, and is refilled around the
/// best survivors when it drops below the configured minimum.
pub struct TuningSession {
    config: NarrowingConfig,
    pool: Vec<Candidate>,
    attempts: Vec<AttemptRecord>,
    rng: StdRng,
    initial_pool_size: usize,
}

impl TuningSession {
    /// New session. The RNG is seeded from `config.seed`, or from entropy.
    pub fn new(config: NarrowingConfig) -> PitwallResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// New session with an explicit seed, ignoring `config.seed`.
    pub fn with_seed(config: NarrowingConfig, seed: u64) -> PitwallResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// New session drawing perturbations from `rng`.
    ///
    /// Fails with `ConfigError::ValidationFailed` for a config the narrower
    /// cannot run with, e.g. a negative perturbation range.
    pub fn with_rng(config: NarrowingConfig, rng: StdRng) -> PitwallResult<Self> {
        config.validate()?;
        let pool = seed_pool(&config)?;
        let initial_pool_size = pool.len();
        info!(pool_size = initial_pool_size, "tuning session started");
        Ok(Self {
            config,
            pool,
            attempts: Vec::new(),
            rng,
            initial_pool_size,
        })
    }

    /// Record a practice run and narrow the pool to candidates whose
    /// per-metric feedback is compatible with what the driver reported.
    ///
    /// Rejects setups outside [0, 1] before touching any state.
    pub fn record_attempt(
        &mut self,
        setup: SetupVector,
        feedback: FeedbackVector,
    ) -> PitwallResult<AttemptOutcome> {
        setup.validate()?;
        let confidence = model_confidence(&setup);
        self.attempts.push(AttemptRecord::new(setup, feedback, confidence));

        let span = attempt_span!(self.attempts.len(), self.pool.len());
        let _guard = span.enter();

        let pool_before = self.pool.len();
        self.pool.retain(|c| c.feedback.is_compatible_with(&feedback));
        let survivors = self.pool.len();

        let regenerated = if survivors < self.config.effective_min_pool_size() {
            self.regenerate(&feedback)
        } else {
            0
        };
        self.sort_pool();

        if self.pool.is_empty() {
            warn!(feedback = %feedback, "no candidates match this feedback");
        }
        info!(
            confidence,
            pool_before,
            survivors,
            regenerated,
            pool_after = self.pool.len(),
            "attempt recorded"
        );

        Ok(AttemptOutcome {
            confidence,
            pool_before,
            survivors,
            regenerated,
            pool_after: self.pool.len(),
        })
    }

    /// Perturb the top survivors and append the compatible results.
    fn regenerate(&mut self, feedback: &FeedbackVector) -> usize {
        let take = self
            .config
            .effective_regeneration_survivors()
            .min(self.pool.len());
        let span = regeneration_span!(take);
        let _guard = span.enter();

        let fresh = perturbation::regenerate(
            &self.pool[..take],
            feedback,
            self.config.effective_perturbation_range(),
            self.config.effective_perturbations_per_survivor(),
            &mut self.rng,
        );
        let added = fresh.len();
        self.pool.extend(fresh);
        debug!(survivors = take, added, "pool regenerated");
        added
    }

    fn sort_pool(&mut self) {
        self.pool.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    /// Setups of the top `n` candidates. Empty when nothing matches.
    pub fn best_recommendations(&self, n: usize) -> Vec<SetupVector> {
        self.pool.iter().take(n).map(|c| c.setup).collect()
    }

    /// The top `n` candidates with their full evaluation.
    pub fn best_candidates(&self, n: usize) -> &[Candidate] {
        &self.pool[..n.min(self.pool.len())]
    }

    /// Model confidence for a setup, independent of the pool.
    pub fn predict_confidence(&self, setup: &SetupVector) -> PitwallResult<f64> {
        setup.validate()?;
        Ok(model_confidence(setup))
    }

    /// Confidence of the top-ranked candidate; 0 for an empty pool.
    pub fn best_confidence(&self) -> f64 {
        self.pool.first().map(|c| c.confidence).unwrap_or(0.0)
    }

    pub fn is_optimal(&self) -> bool {
        self.pool
            .first()
            .is_some_and(|c| c.confidence >= self.config.effective_optimal_confidence())
    }

    pub fn convergence_rate(&self) -> f64 {
        convergence::convergence_rate(&self.attempts)
    }

    pub fn estimate_attempts_to_optimal(&self) -> u32 {
        convergence::estimate_attempts(
            self.best_confidence(),
            self.convergence_rate(),
            self.config.effective_optimal_confidence(),
            self.config.effective_default_attempt_estimate(),
        )
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            pool_size: self.pool.len(),
            attempt_count: self.attempts.len(),
            best_confidence: self.best_confidence(),
            convergence_rate: self.convergence_rate(),
        }
    }

    /// Clear the history and reseed the pool from scratch.
    pub fn reset(&mut self) -> PitwallResult<()> {
        self.pool = seed_pool(&self.config)?;
        self.initial_pool_size = self.pool.len();
        self.attempts.clear();
        info!(pool_size = self.initial_pool_size, "tuning session reset");
        Ok(())
    }

    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Pool size right after seeding.
    pub fn initial_pool_size(&self) -> usize {
        self.initial_pool_size
    }

    pub fn config(&self) -> &NarrowingConfig {
        &self.config
    }
}

/// Every point of the coarse grid, ranked by score.
fn seed_pool(config: &NarrowingConfig) -> PitwallResult<Vec<Candidate>> {
    let grid = SetupGrid::new(
        config.effective_pool_step_count(),
        config.effective_pool_stride(),
    )?;
    Ok(CandidateGenerator::new(grid).rank_by(RankBy::Score).generate())
}
