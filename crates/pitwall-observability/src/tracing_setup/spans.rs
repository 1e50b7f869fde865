//! Span definitions per operation: grid search, attempt, regeneration.
//!
//! Each span carries its operation's sizing metadata via the `tracing` crate.

/// Create a grid search span.
#[macro_export]
macro_rules! search_span {
    ($grid_points:expr, $filtered:expr) => {
        tracing::info_span!("pitwall.search", grid_points = $grid_points, filtered = $filtered)
    };
}

/// Create a recorded-attempt span.
#[macro_export]
macro_rules! attempt_span {
    ($attempt:expr, $pool_size:expr) => {
        tracing::info_span!("pitwall.attempt", attempt = $attempt, pool_size = $pool_size)
    };
}

/// Create a pool regeneration span.
#[macro_export]
macro_rules! regeneration_span {
    ($survivors:expr) => {
        tracing::info_span!("pitwall.regeneration", survivors = $survivors)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "pitwall.search";
    pub const ATTEMPT: &str = "pitwall.attempt";
    pub const REGENERATION: &str = "pitwall.regeneration";
}
