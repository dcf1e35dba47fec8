//! Plain GCP cluster configuration (GKE without Gardener)

use serde::{Deserialize, Serialize};

/// GCP cluster configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcpConfig {
    /// Cluster name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// GCP project the cluster is created in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Kubernetes version (e.g., "1.17")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    /// Number of worker nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_nodes: Option<u32>,

    /// Boot disk size in GB
    #[serde(
        rename = "bootDiskSizeGB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub boot_disk_size_gb: Option<u32>,

    /// Node machine type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,

    /// Cloud region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Zone within the region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl GcpConfig {
    /// Validate the node count
    pub fn validate(&self) -> crate::Result<()> {
        if self.number_of_nodes == Some(0) {
            return Err(crate::Error::validation_for_field(
                "numberOfNodes",
                "number of nodes must be at least 1",
            ));
        }
        Ok(())
    }
}
