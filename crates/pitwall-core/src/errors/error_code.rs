//! Stable string codes for every error variant, for shells that map errors to prompts.

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INVALID_GRID: &str = "INVALID_GRID";
pub const UNKNOWN_FEEDBACK: &str = "UNKNOWN_FEEDBACK";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SESSION_NOT_FOUND: &str = "SESSION_NOT_FOUND";

/// Implemented by every Pitwall error type.
pub trait PitwallErrorCode {
    fn error_code(&self) -> &'static str;
}
