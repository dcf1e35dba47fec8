//! GCP provider-specific settings for Gardener clusters

use serde::{Deserialize, Serialize};

/// GCP provider configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcpProviderConfig {
    /// Zones worker nodes are spread across
    #[serde(default)]
    pub zones: Vec<String>,
}

impl GcpProviderConfig {
    /// Validate that at least one zone is configured
    pub fn validate(&self) -> crate::Result<()> {
        if self.zones.is_empty() {
            return Err(crate::Error::validation_for_field(
                "zones",
                "at least one zone is required",
            ));
        }
        Ok(())
    }
}
