//! Iterative narrowing configuration: pool seeding, regeneration, convergence.

use serde::{Deserialize, Serialize};

use super::{invalid, require_positive};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct NarrowingConfig {
    /// Grid subdivisions used to seed the pool. Default: 10.
    pub pool_step_count: Option<usize>,
    /// Stride over the seeding grid. Default: 2 (six levels per parameter).
    pub pool_stride: Option<usize>,
    /// Below this many candidates the pool is regenerated. Default: 5.
    pub min_pool_size: Option<usize>,
    /// Top survivors perturbed during regeneration. Default: 3.
    pub regeneration_survivors: Option<usize>,
    /// Perturbations generated per survivor. Default: 5.
    pub perturbations_per_survivor: Option<usize>,
    /// Full width of the jitter window; offsets are drawn from ±range/2. Default: 0.1.
    pub perturbation_range: Option<f64>,
    /// Best-candidate confidence that counts as optimal. Default: 99.0.
    pub optimal_confidence: Option<f64>,
    /// Attempt estimate used when confidence is not improving. Default: 5.
    pub default_attempt_estimate: Option<u32>,
    /// Seed for the perturbation RNG. Entropy when unset.
    pub seed: Option<u64>,
}

impl NarrowingConfig {
    pub fn effective_pool_step_count(&self) -> usize {
        self.pool_step_count.unwrap_or(10)
    }

    pub fn effective_pool_stride(&self) -> usize {
        self.pool_stride.unwrap_or(2)
    }

    pub fn effective_min_pool_size(&self) -> usize {
        self.min_pool_size.unwrap_or(5)
    }

    pub fn effective_regeneration_survivors(&self) -> usize {
        self.regeneration_survivors.unwrap_or(3)
    }

    pub fn effective_perturbations_per_survivor(&self) -> usize {
        self.perturbations_per_survivor.unwrap_or(5)
    }

    pub fn effective_perturbation_range(&self) -> f64 {
        self.perturbation_range.unwrap_or(0.1)
    }

    pub fn effective_optimal_confidence(&self) -> f64 {
        self.optimal_confidence.unwrap_or(99.0)
    }

    pub fn effective_default_attempt_estimate(&self) -> u32 {
        self.default_attempt_estimate.unwrap_or(5)
    }

    /// Reject values a session cannot run with. Checked again by every
    /// `TuningSession` constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("narrowing.pool_step_count", self.effective_pool_step_count())?;
        require_positive("narrowing.pool_stride", self.effective_pool_stride())?;

        let range = self.effective_perturbation_range();
        if !range.is_finite() || !(0.0..=1.0).contains(&range) {
            return Err(invalid(
                "narrowing.perturbation_range",
                "must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=100.0).contains(&self.effective_optimal_confidence()) {
            return Err(invalid(
                "narrowing.optimal_confidence",
                "must be between 0 and 100",
            ));
        }
        if self.effective_default_attempt_estimate() == 0 {
            return Err(invalid(
                "narrowing.default_attempt_estimate",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Fields set in `other` win.
    pub fn merge_from(&mut self, other: &NarrowingConfig) {
        if other.pool_step_count.is_some() {
            self.pool_step_count = other.pool_step_count;
        }
        if other.pool_stride.is_some() {
            self.pool_stride = other.pool_stride;
        }
        if other.min_pool_size.is_some() {
            self.min_pool_size = other.min_pool_size;
        }
        if other.regeneration_survivors.is_some() {
            self.regeneration_survivors = other.regeneration_survivors;
        }
        if other.perturbations_per_survivor.is_some() {
            self.perturbations_per_survivor = other.perturbations_per_survivor;
        }
        if other.perturbation_range.is_some() {
            self.perturbation_range = other.perturbation_range;
        }
        if other.optimal_confidence.is_some() {
            self.optimal_confidence = other.optimal_confidence;
        }
        if other.default_attempt_estimate.is_some() {
            self.default_attempt_estimate = other.default_attempt_estimate;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
    }
}
