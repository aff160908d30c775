//! Logging for the watson binary
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a text or
//! JSON `fmt` layer. Records go to stderr so stdout stays free for payloads.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use watson_config::{LogFormat, TelemetryConfig};

const DEFAULT_FILTER: &str = "info";

/// Initialize logging from configuration
///
/// `RUST_LOG` takes precedence over the configured filter. An invalid filter
/// falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>) -> anyhow::Result<()> {
    let format = config.map(|c| c.format).unwrap_or_default();

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let layer = match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter(config))
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::debug!(?format, "logging initialized");
    Ok(())
}

fn filter(config: Option<&TelemetryConfig>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let directives = config.map_or(DEFAULT_FILTER, |c| c.log_filter.as_str());
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
