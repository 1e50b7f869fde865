//! Subscriber installation driven by `ObservabilityConfig`.

pub mod spans;

use pitwall_core::config::ObservabilityConfig;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a global subscriber was already installed.
pub fn init(config: &ObservabilityConfig) -> bool {
    init_with_writer(config, std::io::stderr)
}

/// Install the global subscriber with a custom writer.
pub fn init_with_writer<W>(config: &ObservabilityConfig, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true);

    let installed = if config.effective_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}

/// `RUST_LOG` if set and valid, otherwise the configured level, otherwise `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.effective_log_level()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
