//! # pitwall-search
//!
//! Brute-force search over a discretized setup grid.
//! `SetupGrid` enumerates setups, `CandidateGenerator` evaluates, filters and
//! ranks them, and `find_optimal_setup` is the top-N entry point.

pub mod generator;
pub mod grid;
pub mod optimal;

pub use generator::{CandidateGenerator, RankBy};
pub use grid::{GridIter, SetupGrid};
pub use optimal::{find_optimal_candidates, find_optimal_setup};
