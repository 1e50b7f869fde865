//! Unconstrained/feedback-filtered grid search configuration.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Grid subdivisions per parameter. Default: 20.
    pub step_count: Option<usize>,
    /// Take every `stride`-th grid level. Default: 1.
    pub stride: Option<usize>,
    /// Number of ranked setups returned. Default: 10.
    pub top_n: Option<usize>,
    /// Enumerate the grid on the rayon pool. Default: true.
    pub parallel: Option<bool>,
}

impl SearchConfig {
    pub fn effective_step_count(&self) -> usize {
        self.step_count.unwrap_or(20)
    }

    pub fn effective_stride(&self) -> usize {
        self.stride.unwrap_or(1)
    }

    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(10)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("search.step_count", self.effective_step_count())?;
        require_positive("search.stride", self.effective_stride())?;
        require_positive("search.top_n", self.effective_top_n())
    }

    /// Fields set in `other` win.
    pub fn merge_from(&mut self, other: &SearchConfig) {
        if other.step_count.is_some() {
            self.step_count = other.step_count;
        }
        if other.stride.is_some() {
            self.stride = other.stride;
        }
        if other.top_n.is_some() {
            self.top_n = other.top_n;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
    }
}
