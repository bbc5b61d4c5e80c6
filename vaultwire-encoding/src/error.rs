//! Error type shared by every codec and by the entity contract.

use thiserror::Error;

/// Result type for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;

/// The single failure kind of the encoding layer.
///
/// Variants identify where a conversion failed so callers can tell a
/// rejected entity apart from malformed input if they care to. Most callers
/// treat every variant the same way: the current conversion is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Malformed base64 text.
    #[error("invalid base64: {0}")]
    Base64(String),

    /// Malformed hexadecimal text.
    #[error("invalid hex: {0}")]
    Hex(String),

    /// Bytes are not valid in the requested text encoding, or text cannot be
    /// represented in it.
    #[error("invalid text: {0}")]
    Text(String),

    /// Malformed or unrepresentable structured-value text.
    #[error("invalid JSON: {0}")]
    Json(String),

    /// A raw field is present but has the wrong shape for its property.
    #[error("invalid field `{field}`: {reason}")]
    Field { field: String, reason: String },

    /// A restored entity did not satisfy its invariants.
    #[error("validation failed for `{type_tag}`: {reason}")]
    Validation { type_tag: String, reason: String },

    /// Entity kind registration or lookup failed.
    #[error("registry error: {0}")]
    Registry(String),
}

impl EncodingError {
    /// Builds a field error.
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Builds a validation error for the given entity type tag.
    pub fn validation(type_tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            type_tag: type_tag.into(),
            reason: reason.into(),
        }
    }

    /// The human-readable detail carried by this error, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        let detail = match self {
            Self::Base64(m) | Self::Hex(m) | Self::Text(m) | Self::Json(m) | Self::Registry(m) => m,
            Self::Field { reason, .. } | Self::Validation { reason, .. } => reason,
        };
        (!detail.is_empty()).then_some(detail.as_str())
    }

    /// Returns true if this error came from a failed validation gate.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<serde_json::Error> for EncodingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<base64::DecodeError> for EncodingError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err.to_string())
    }
}

impl From<hex::FromHexError> for EncodingError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EncodingError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Text(format!("invalid UTF-8: {err}"))
    }
}
