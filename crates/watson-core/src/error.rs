use thiserror::Error;

pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// Errors raised while building, decoding, or encoding a model
#[derive(Debug, Error)]
pub enum ModelError {
    /// `build()` was called before a required field was set
    #[error("{model}: missing required field `{field}`")]
    MissingField { model: &'static str, field: &'static str },

    /// A value that must be present and well-formed was absent or malformed
    #[error("{model}: invalid argument: {message}")]
    InvalidArgument { model: &'static str, message: String },

    /// The wire payload does not match the model
    #[error("{model}: failed to decode payload: {source}")]
    Decode {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The model could not be written to its wire form
    #[error("{model}: failed to encode model: {source}")]
    Encode {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ModelError {
    /// Name of the model the error was raised for
    pub const fn model(&self) -> &'static str {
        match self {
            Self::MissingField { model, .. }
            | Self::InvalidArgument { model, .. }
            | Self::Decode { model, .. }
            | Self::Encode { model, .. } => model,
        }
    }

    /// Name of the missing field, for `MissingField` errors
    pub const fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the error is a contract violation by the caller rather than a bad payload
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_model_and_field() {
        let err = ModelError::MissingField {
            model: "CaptureGroup",
            field: "group",
        };

        assert_eq!(err.to_string(), "CaptureGroup: missing required field `group`");
        assert_eq!(err.model(), "CaptureGroup");
        assert_eq!(err.missing_field(), Some("group"));
        assert!(err.is_caller_error());
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ModelError::Decode {
            model: "Configuration",
            source,
        };

        assert!(err.to_string().starts_with("Configuration: failed to decode payload:"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.missing_field(), None);
        assert!(!err.is_caller_error());
    }
}
