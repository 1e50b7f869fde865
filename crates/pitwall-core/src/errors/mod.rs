//! Error handling for Pitwall.
//! One error enum per concern, `thiserror` only, aggregated by `PitwallError`.

pub mod config_error;
pub mod error_code;
pub mod pitwall_error;
pub mod session_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::PitwallErrorCode;
pub use pitwall_error::{PitwallError, PitwallResult};
pub use session_error::SessionError;
pub use validation_error::ValidationError;
