//! # pitwall-session
//!
//! Iterative narrowing: a session owns a scored candidate pool and the
//! attempt history, filters the pool against each round of driver feedback,
//! regenerates it by local perturbation when it collapses, and estimates how
//! many attempts remain. `SessionManager` hosts many independent sessions.

pub mod convergence;
pub mod manager;
pub mod narrower;
pub mod perturbation;
pub mod stats;

pub use manager::SessionManager;
pub use narrower::{AttemptOutcome, TuningSession};
pub use stats::SessionStats;
