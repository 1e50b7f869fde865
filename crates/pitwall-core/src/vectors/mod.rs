//! Setup and bias value objects.

pub mod bias;
pub mod setup;

pub use bias::{BiasMetric, BiasVector};
pub use setup::{SetupParameter, SetupVector};
