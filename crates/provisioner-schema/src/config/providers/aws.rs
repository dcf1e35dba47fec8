//! AWS provider-specific settings for Gardener clusters

use serde::{Deserialize, Serialize};

use crate::config::types::validate_optional_cidr;

/// AWS provider configuration
///
/// Gardener carves the VPC into a public and an internal subnet per zone.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AwsProviderConfig {
    /// Availability zone (e.g., "eu-central-1a")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    /// CIDR of the VPC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_cidr: Option<String>,

    /// CIDR of the public subnet (load balancers, NAT)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_cidr: Option<String>,

    /// CIDR of the internal subnet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_cidr: Option<String>,
}

impl AwsProviderConfig {
    /// Validate every CIDR that is set
    pub fn validate(&self) -> crate::Result<()> {
        validate_optional_cidr("vpcCidr", self.vpc_cidr.as_deref())?;
        validate_optional_cidr("publicCidr", self.public_cidr.as_deref())?;
        validate_optional_cidr("internalCidr", self.internal_cidr.as_deref())
    }
}
