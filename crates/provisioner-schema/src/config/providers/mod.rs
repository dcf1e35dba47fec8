//! Provider-specific configuration nested inside a Gardener cluster config
//!
//! The serialized form carries no tag of its own: the sibling `provider`
//! field of the enclosing Gardener config selects the variant.
//! - Azure: virtual network CIDR and availability zones
//! - GCP: zones
//! - AWS: zone plus VPC, public, and internal CIDRs

mod aws;
mod azure;
mod gcp;

pub use aws::AwsProviderConfig;
pub use azure::AzureProviderConfig;
pub use gcp::GcpProviderConfig;

use serde::Serialize;
use serde_json::Value;

use super::types::ProviderType;

/// Provider-specific settings for a Gardener cluster
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProviderSpecificConfig {
    /// Microsoft Azure
    Azure(AzureProviderConfig),
    /// Google Cloud Platform
    Gcp(GcpProviderConfig),
    /// Amazon Web Services
    Aws(AwsProviderConfig),
}

impl ProviderSpecificConfig {
    /// Get the provider this config belongs to
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Azure(_) => ProviderType::Azure,
            Self::Gcp(_) => ProviderType::Gcp,
            Self::Aws(_) => ProviderType::Aws,
        }
    }

    /// Decode a provider-specific config using the enclosing `provider` value
    /// as discriminator.
    ///
    /// `null` decodes to `None` whatever the provider says. Anything else
    /// needs a known provider.
    pub fn from_value<E: serde::de::Error>(
        provider: Option<&str>,
        value: Value,
    ) -> Result<Option<Self>, E> {
        if value.is_null() {
            return Ok(None);
        }

        let provider = provider.ok_or_else(|| {
            E::custom("providerSpecificConfig is set but provider is missing")
        })?;
        let provider_type: ProviderType = provider.parse().map_err(|_| {
            E::custom(format!(
                "unknown provider `{provider}` for providerSpecificConfig, expected one of: azure, gcp, aws"
            ))
        })?;

        let config = match provider_type {
            ProviderType::Azure => serde_json::from_value(value).map(Self::Azure),
            ProviderType::Gcp => serde_json::from_value(value).map(Self::Gcp),
            ProviderType::Aws => serde_json::from_value(value).map(Self::Aws),
        }
        .map_err(|e| E::custom(format!("invalid {provider_type} providerSpecificConfig: {e}")))?;

        Ok(Some(config))
    }

    /// Validate the provider-specific settings
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Self::Azure(config) => config.validate(),
            Self::Gcp(config) => config.validate(),
            Self::Aws(config) => config.validate(),
        }
    }
}

impl From<AzureProviderConfig> for ProviderSpecificConfig {
    fn from(config: AzureProviderConfig) -> Self {
        Self::Azure(config)
    }
}

impl From<GcpProviderConfig> for ProviderSpecificConfig {
    fn from(config: GcpProviderConfig) -> Self {
        Self::Gcp(config)
    }
}

impl From<AwsProviderConfig> for ProviderSpecificConfig {
    fn from(config: AwsProviderConfig) -> Self {
        Self::Aws(config)
    }
}
