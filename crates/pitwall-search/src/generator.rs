//! Candidate generation over a setup grid.

use std::cmp::Ordering;

use pitwall_core::{Candidate, FeedbackVector, SetupVector};
use pitwall_model::evaluate;
use pitwall_observability::search_span;
use rayon::prelude::*;
use tracing::debug;

use crate::grid::SetupGrid;

/// Which candidate field orders the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankBy {
    Confidence,
    #[default]
    Score,
}

impl RankBy {
    pub fn key(self, candidate: &Candidate) -> f64 {
        match self {
            Self::Confidence => candidate.confidence,
            Self::Score => candidate.score,
        }
    }
}

/// Evaluates every grid point, keeps those compatible with an optional target
/// feedback vector, and ranks them descending.
///
/// Ties are broken by grid index, so parallel and sequential runs agree.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    grid: SetupGrid,
    target: Option<FeedbackVector>,
    rank_by: RankBy,
    parallel: bool,
}

type Indexed = (usize, Candidate);

impl CandidateGenerator {
    pub fn new(grid: SetupGrid) -> Self {
        Self {
            grid,
            target: None,
            rank_by: RankBy::default(),
            parallel: true,
        }
    }

    /// Keep only candidates whose per-metric feedback is compatible with `target`.
    pub fn with_target(mut self, target: Option<FeedbackVector>) -> Self {
        self.target = target;
        self
    }

    pub fn rank_by(mut self, rank_by: RankBy) -> Self {
        self.rank_by = rank_by;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn grid(&self) -> &SetupGrid {
        &self.grid
    }

    /// Every matching candidate, ranked.
    pub fn generate(&self) -> Vec<Candidate> {
        let span = search_span!(self.grid.len(), self.target.is_some());
        let _guard = span.enter();

        let mut matched: Vec<Indexed> = if self.parallel {
            self.grid
                .par_points()
                .filter_map(|(index, setup)| self.keep(index, setup))
                .collect()
        } else {
            self.grid
                .iter()
                .enumerate()
                .filter_map(|(index, setup)| self.keep(index, setup))
                .collect()
        };

        let rank_by = self.rank_by;
        if self.parallel {
            matched.par_sort_by(|a, b| ranked(rank_by, a, b));
        } else {
            matched.sort_by(|a, b| ranked(rank_by, a, b));
        }

        debug!(
            grid_points = self.grid.len(),
            matched = matched.len(),
            "candidates generated"
        );
        matched.into_iter().map(|(_, c)| c).collect()
    }

    /// The best `n` matching candidates, ranked, without materialising the
    /// whole grid.
    pub fn top(&self, n: usize) -> Vec<Candidate> {
        if n == 0 {
            return Vec::new();
        }
        let span = search_span!(self.grid.len(), self.target.is_some());
        let _guard = span.enter();

        let rank_by = self.rank_by;
        let mut best: Vec<Indexed> = if self.parallel {
            self.grid
                .par_points()
                .filter_map(|(index, setup)| self.keep(index, setup))
                .fold(Vec::new, |acc, item| push_bounded(acc, item, n, rank_by))
                .reduce(Vec::new, |mut a, b| {
                    a.extend(b);
                    truncate_ranked(&mut a, n, rank_by);
                    a
                })
        } else {
            self.grid
                .iter()
                .enumerate()
                .filter_map(|(index, setup)| self.keep(index, setup))
                .fold(Vec::new(), |acc, item| push_bounded(acc, item, n, rank_by))
        };
        truncate_ranked(&mut best, n, rank_by);

        debug!(grid_points = self.grid.len(), returned = best.len(), "top candidates selected");
        best.into_iter().map(|(_, c)| c).collect()
    }

    fn keep(&self, index: usize, setup: SetupVector) -> Option<Indexed> {
        let candidate = evaluate(setup);
        match &self.target {
            Some(target) if !candidate.feedback.is_compatible_with(target) => None,
            _ => Some((index, candidate)),
        }
    }
}

/// Descending by rank key, then ascending by grid index.
fn ranked(rank_by: RankBy, a: &Indexed, b: &Indexed) -> Ordering {
    rank_by
        .key(&b.1)
        .total_cmp(&rank_by.key(&a.1))
        .then(a.0.cmp(&b.0))
}

fn truncate_ranked(items: &mut Vec<Indexed>, n: usize, rank_by: RankBy) {
    items.sort_by(|a, b| ranked(rank_by, a, b));
    items.truncate(n);
}

/// Push and, once the buffer reaches twice the bound, cut it back to `n`.
fn push_bounded(mut acc: Vec<Indexed>, item: Indexed, n: usize, rank_by: RankBy) -> Vec<Indexed> {
    acc.push(item);
    if acc.len() >= n.saturating_mul(2) {
        truncate_ranked(&mut acc, n, rank_by);
    }
    acc
}
