//! Records produced by evaluating setups and by recording practice runs.

pub mod attempt;
pub mod candidate;

pub use attempt::AttemptRecord;
pub use candidate::Candidate;
