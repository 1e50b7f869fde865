//! # pitwall-observability
//!
//! Subscriber installation and the span vocabulary shared by the search and
//! session crates.

pub mod tracing_setup;

pub use tracing_setup::{init, init_with_writer, spans::names};
