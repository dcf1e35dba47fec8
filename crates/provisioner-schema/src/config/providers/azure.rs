//! Azure provider-specific settings for Gardener clusters

use serde::{Deserialize, Serialize};

use crate::config::types::validate_optional_cidr;

/// Azure provider configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AzureProviderConfig {
    /// CIDR of the virtual network the cluster is placed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnet_cidr: Option<String>,

    /// Availability zones; `None` lets Azure pick, `Some(vec![])` means
    /// explicitly zoneless
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<String>>,
}

impl AzureProviderConfig {
    /// Validate network settings
    pub fn validate(&self) -> crate::Result<()> {
        validate_optional_cidr("vnetCidr", self.vnet_cidr.as_deref())
    }
}
