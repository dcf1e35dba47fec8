//! Error types for runtime configuration handling
//!
//! Errors carry enough structure to tell a malformed document apart from a
//! well-formed document that describes an unusable runtime.

use thiserror::Error;

/// Main error type for runtime configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// The document could not be turned into a configuration value
    #[error("decode error ({format}): {message}")]
    Decode {
        /// Description of what failed
        message: String,
        /// Document format being decoded (json, yaml)
        format: String,
    },

    /// The configuration value could not be written out
    #[error("encode error: {message}")]
    Encode {
        /// Description of what failed
        message: String,
    },

    /// The configuration decoded cleanly but is not usable for provisioning
    #[error("validation error: {message}")]
    Validation {
        /// Description of what's invalid
        message: String,
        /// The invalid field path (e.g., "clusterConfig.autoScalerMin")
        field: Option<String>,
    },
}

impl Error {
    /// Create a decode error for the given document format
    pub fn decode(format: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
            format: format.into(),
        }
    }

    /// Create an encode error with the given message
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode {
            message: msg.into(),
        }
    }

    /// Create a validation error with the given message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error with a field path
    pub fn validation_for_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Get the field path if this error is tied to a specific field
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Prefix the field path with a parent path segment
    ///
    /// Nested validators report paths relative to themselves; callers
    /// higher up the tree use this to produce the full path.
    pub fn within(self, parent: &str) -> Self {
        match self {
            Error::Validation { message, field } => Error::Validation {
                message,
                field: Some(match field {
                    Some(field) => format!("{parent}.{field}"),
                    None => parent.to_string(),
                }),
            },
            other => other,
        }
    }

    /// Returns true if this error came from reading a document
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}
