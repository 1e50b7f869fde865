//! Input validation errors. Always recoverable: a shell re-prompts.

use super::error_code::{self, PitwallErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("setup parameter {parameter} = {value} is outside [0.0, 1.0]")]
    OutOfRange { parameter: &'static str, value: f64 },

    #[error("setup parameter {parameter} is not a finite number")]
    NotFinite { parameter: &'static str },

    #[error("unknown feedback level: {input:?} (expected bad, good, great or optimal)")]
    UnknownFeedbackLevel { input: String },

    #[error("invalid grid: step_count {step_count}, stride {stride}")]
    InvalidGrid { step_count: usize, stride: usize },
}

impl PitwallErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } | Self::NotFinite { .. } => error_code::VALIDATION_ERROR,
            Self::UnknownFeedbackLevel { .. } => error_code::UNKNOWN_FEEDBACK,
            Self::InvalidGrid { .. } => error_code::INVALID_GRID,
        }
    }
}
