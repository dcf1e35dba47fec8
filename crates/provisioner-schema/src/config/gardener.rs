//! Gardener-managed cluster configuration
//!
//! Gardener provisions the cluster on one of several cloud providers. The
//! `provider` field names the cloud and doubles as the discriminator for the
//! nested `providerSpecificConfig`, so (de)serialization of this type is
//! hand-written around the derived field handling.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::providers::ProviderSpecificConfig;
use super::types::{validate_optional_cidr, ProviderType};

/// Wire name of the nested provider-specific config
const PROVIDER_SPECIFIC_CONFIG_FIELD: &str = "providerSpecificConfig";

/// Gardener cluster configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct GardenerConfig {
    /// Shoot cluster name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Kubernetes version (e.g., "1.16")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    /// Worker volume size in GB
    #[serde(
        rename = "volumeSizeGB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_size_gb: Option<u32>,

    /// Worker machine type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,

    /// Cloud region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Cloud provider: "azure", "gcp" or "aws"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Gardener seed cluster hosting the control plane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,

    /// Gardener secret holding the cloud credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_secret: Option<String>,

    /// Worker disk type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,

    /// CIDR for worker nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_cidr: Option<String>,

    /// Minimum number of workers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaler_min: Option<u32>,

    /// Maximum number of workers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaler_max: Option<u32>,

    /// Extra workers allowed during rolling updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<u32>,

    /// Workers allowed to be unavailable during rolling updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<u32>,

    /// Settings specific to `provider`; decoded by the hand-written impl below
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub provider_specific_config: Option<ProviderSpecificConfig>,
}

impl GardenerConfig {
    /// Attach provider-specific settings
    ///
    /// Fills in `provider` from the settings when it is not set yet, so the
    /// result always encodes.
    pub fn with_provider_specific_config(
        mut self,
        config: impl Into<ProviderSpecificConfig>,
    ) -> Self {
        let config = config.into();
        if self.provider.is_none() {
            self.provider = Some(config.provider_type().to_string());
        }
        self.provider_specific_config = Some(config);
        self
    }

    /// Parse the `provider` field, if set and known
    pub fn provider_type(&self) -> Option<ProviderType> {
        self.provider.as_deref().and_then(|p| p.parse().ok())
    }

    /// Check that `provider` can act as discriminator for the nested config
    ///
    /// A value failing this check cannot survive an encode/decode cycle.
    pub fn check_provider_consistency(&self) -> Result<(), String> {
        let Some(config) = &self.provider_specific_config else {
            return Ok(());
        };
        let expected = config.provider_type();

        match self.provider.as_deref() {
            None => Err(format!(
                "{expected} providerSpecificConfig is set but provider is missing"
            )),
            Some(provider) => match provider.parse::<ProviderType>() {
                Ok(actual) if actual == expected => Ok(()),
                Ok(actual) => Err(format!(
                    "provider `{actual}` does not match {expected} providerSpecificConfig"
                )),
                Err(_) => Err(format!(
                    "unknown provider `{provider}` for {expected} providerSpecificConfig"
                )),
            },
        }
    }

    /// Validate the Gardener cluster settings
    pub fn validate(&self) -> crate::Result<()> {
        match self.provider.as_deref() {
            None => {
                return Err(crate::Error::validation_for_field(
                    "provider",
                    "provider is required for Gardener clusters",
                ))
            }
            Some(provider) => {
                provider
                    .parse::<ProviderType>()
                    .map_err(|e| e.within("provider"))?;
            }
        }

        self.check_provider_consistency()
            .map_err(|msg| crate::Error::validation_for_field(PROVIDER_SPECIFIC_CONFIG_FIELD, msg))?;

        if let (Some(min), Some(max)) = (self.auto_scaler_min, self.auto_scaler_max) {
            if min > max {
                return Err(crate::Error::validation_for_field(
                    "autoScalerMin",
                    format!("autoScalerMin ({min}) must not exceed autoScalerMax ({max})"),
                ));
            }
        }

        validate_optional_cidr("workerCidr", self.worker_cidr.as_deref())?;

        if let Some(config) = &self.provider_specific_config {
            config
                .validate()
                .map_err(|e| e.within(PROVIDER_SPECIFIC_CONFIG_FIELD))?;
        }
        Ok(())
    }
}

impl Serialize for GardenerConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.check_provider_consistency().map_err(S::Error::custom)?;
        GardenerConfig::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for GardenerConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let provider_specific = object
            .remove(PROVIDER_SPECIFIC_CONFIG_FIELD)
            .unwrap_or(Value::Null);

        let mut config =
            GardenerConfig::deserialize(Value::Object(object)).map_err(D::Error::custom)?;
        config.provider_specific_config =
            ProviderSpecificConfig::from_value::<D::Error>(
                config.provider.as_deref(),
                provider_specific,
            )?;
        Ok(config)
    }
}
