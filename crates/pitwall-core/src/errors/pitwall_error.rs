//! Top-level error aggregating the per-concern enums via `From` conversions.

use super::error_code::PitwallErrorCode;
use super::{ConfigError, SessionError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum PitwallError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl PitwallErrorCode for PitwallError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
        }
    }
}

pub type PitwallResult<T> = Result<T, PitwallError>;
