use serde::Deserialize;
use watson_core::AbsentFields;

/// How models are written back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodingConfig {
    /// Whether absent optional fields are omitted or written as `null`
    #[serde(default)]
    pub absent_fields: AbsentFields,
    /// Indent encoded JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            absent_fields: AbsentFields::default(),
            pretty: default_pretty(),
        }
    }
}

const fn default_pretty() -> bool {
    true
}
