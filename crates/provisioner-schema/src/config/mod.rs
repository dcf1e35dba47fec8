//! Runtime configuration model
//!
//! Two levels of polymorphism, both closed enums:
//! - `ClusterConfig`: Gardener or plain GCP, tagged with `type`
//! - `ProviderSpecificConfig`: Azure, GCP or AWS, selected by the Gardener
//!   config's `provider` field

mod cluster;
mod gardener;
mod gcp;
pub mod providers;
mod runtime;
mod types;

pub use cluster::ClusterConfig;
pub use gardener::GardenerConfig;
pub use gcp::GcpConfig;
pub use providers::{
    AwsProviderConfig, AzureProviderConfig, GcpProviderConfig, ProviderSpecificConfig,
};
pub use runtime::{KymaConfig, RuntimeConfig};
pub use types::ProviderType;
