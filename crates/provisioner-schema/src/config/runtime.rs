//! Top-level runtime configuration

use serde::{Deserialize, Serialize};

use super::cluster::ClusterConfig;

/// Kyma installation settings
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KymaConfig {
    /// Kyma release to install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Everything needed to provision a runtime: the cluster, the Kyma release
/// on top of it, and the kubeconfig once the cluster exists
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// How the cluster is provisioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_config: Option<ClusterConfig>,

    /// Kyma installation settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyma_config: Option<KymaConfig>,

    /// Kubeconfig of the provisioned cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,
}

impl RuntimeConfig {
    /// Kyma version, if configured
    pub fn kyma_version(&self) -> Option<&str> {
        self.kyma_config.as_ref()?.version.as_deref()
    }

    /// Validate the configuration for provisioning
    ///
    /// Decoding never validates; call this before acting on a config.
    pub fn validate(&self) -> crate::Result<()> {
        let cluster = self.cluster_config.as_ref().ok_or_else(|| {
            crate::Error::validation_for_field("clusterConfig", "cluster config is required")
        })?;
        cluster.validate().map_err(|e| e.within("clusterConfig"))?;

        if let Some(kubeconfig) = &self.kubeconfig {
            if kubeconfig.trim().is_empty() {
                return Err(crate::Error::validation_for_field(
                    "kubeconfig",
                    "kubeconfig must not be blank when set",
                ));
            }
        }
        Ok(())
    }
}
