use super::error_code::{self, PitwallErrorCode};

/// Session lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {id}")]
    NotFound { id: String },
}

impl PitwallErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        error_code::SESSION_NOT_FOUND
    }
}
