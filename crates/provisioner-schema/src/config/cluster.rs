//! Cluster configuration: how the runtime's cluster gets provisioned

use serde::{Deserialize, Serialize};

use super::gardener::GardenerConfig;
use super::gcp::GcpConfig;

/// Cluster configuration, tagged on the wire with `type`
///
/// Example:
/// ```yaml
/// type: gardener
/// name: my-shoot
/// provider: azure
/// providerSpecificConfig:
///   vnetCidr: 10.10.11.11/25
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClusterConfig {
    /// Cluster managed by Gardener on one of its cloud providers
    Gardener(GardenerConfig),
    /// Plain GCP cluster
    Gcp(GcpConfig),
}

impl ClusterConfig {
    /// Wire value of the `type` discriminator
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Gardener(_) => "gardener",
            Self::Gcp(_) => "gcp",
        }
    }

    /// Cluster name, whichever variant carries it
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Gardener(config) => config.name.as_deref(),
            Self::Gcp(config) => config.name.as_deref(),
        }
    }

    /// Kubernetes version, whichever variant carries it
    pub fn kubernetes_version(&self) -> Option<&str> {
        match self {
            Self::Gardener(config) => config.kubernetes_version.as_deref(),
            Self::Gcp(config) => config.kubernetes_version.as_deref(),
        }
    }

    /// Gardener config, if this is a Gardener cluster
    pub fn as_gardener(&self) -> Option<&GardenerConfig> {
        match self {
            Self::Gardener(config) => Some(config),
            Self::Gcp(_) => None,
        }
    }

    /// Validate the variant's settings
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Self::Gardener(config) => config.validate(),
            Self::Gcp(config) => config.validate(),
        }
    }
}

impl From<GardenerConfig> for ClusterConfig {
    fn from(config: GardenerConfig) -> Self {
        Self::Gardener(config)
    }
}

impl From<GcpConfig> for ClusterConfig {
    fn from(config: GcpConfig) -> Self {
        Self::Gcp(config)
    }
}
