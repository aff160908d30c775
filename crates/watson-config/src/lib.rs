#![allow(clippy::must_use_candidate)]

pub mod encoding;
mod env;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use encoding::EncodingConfig;
pub use env::ExpandError;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level watson configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Model encoding options
    #[serde(default)]
    pub encoding: EncodingConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
