//! Encoding and decoding of runtime config documents
//!
//! JSON is the canonical wire format. YAML carries the same tree and is read
//! through [`crate::yaml`].

use std::path::Path;

use tracing::debug;

use crate::config::RuntimeConfig;
use crate::{yaml, Error, Result};

/// Document formats a runtime config can be read from and written to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON (canonical)
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl Format {
    /// Guess the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Decode a document in this format
    pub fn decode(self, document: &str) -> Result<RuntimeConfig> {
        match self {
            Self::Json => decode(document),
            Self::Yaml => decode_yaml(document),
        }
    }

    /// Encode a config in this format, human-readable
    pub fn encode(self, config: &RuntimeConfig) -> Result<String> {
        match self {
            Self::Json => encode_pretty(config),
            Self::Yaml => encode_yaml(config),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::validation(format!(
                "invalid format: {s}, expected one of: json, yaml"
            ))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Encode a runtime config as compact JSON
///
/// Fails only for self-contradictory values, e.g. a Gardener config whose
/// `provider` does not match its provider-specific settings.
pub fn encode(config: &RuntimeConfig) -> Result<String> {
    let document = serde_json::to_string(config).map_err(|e| Error::encode(e.to_string()))?;
    debug!(bytes = document.len(), "encoded runtime config");
    Ok(document)
}

/// Encode a runtime config as indented JSON
pub fn encode_pretty(config: &RuntimeConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| Error::encode(e.to_string()))
}

/// Decode a runtime config from JSON
pub fn decode(document: &str) -> Result<RuntimeConfig> {
    let config: RuntimeConfig = serde_json::from_str(document)
        .map_err(|e| Error::decode(Format::Json.to_string(), e.to_string()))?;
    debug!(
        cluster = config.cluster_config.as_ref().map(|c| c.kind()),
        "decoded runtime config"
    );
    Ok(config)
}

/// Encode a runtime config as YAML
pub fn encode_yaml(config: &RuntimeConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| Error::encode(e.to_string()))
}

/// Decode a runtime config from YAML
pub fn decode_yaml(document: &str) -> Result<RuntimeConfig> {
    let value = yaml::parse_yaml(document)?;
    if value.is_null() {
        return Err(Error::decode(
            Format::Yaml.to_string(),
            "document is empty",
        ));
    }
    let config: RuntimeConfig = serde_json::from_value(value)
        .map_err(|e| Error::decode(Format::Yaml.to_string(), e.to_string()))?;
    debug!(
        cluster = config.cluster_config.as_ref().map(|c| c.kind()),
        "decoded runtime config from yaml"
    );
    Ok(config)
}
