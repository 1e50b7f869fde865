//! # pitwall-core
//!
//! Foundation crate for the Pitwall setup tuner.
//! Defines the setup/bias/feedback value types, the fixed model constants,
//! errors and config. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod feedback;
pub mod models;
pub mod vectors;

// Re-export the most commonly used types at the crate root.
pub use config::PitwallConfig;
pub use errors::{PitwallError, PitwallResult, ValidationError};
pub use feedback::{FeedbackLevel, FeedbackVector};
pub use models::{AttemptRecord, Candidate};
pub use vectors::{BiasMetric, BiasVector, SetupParameter, SetupVector};
