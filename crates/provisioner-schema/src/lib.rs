//! Runtime provisioning configuration: model, codec, and validation

#![warn(missing_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod yaml;

pub use codec::{decode, decode_yaml, encode, encode_pretty, encode_yaml, Format};
pub use config::{
    AwsProviderConfig, AzureProviderConfig, ClusterConfig, GardenerConfig, GcpConfig,
    GcpProviderConfig, KymaConfig, ProviderSpecificConfig, ProviderType, RuntimeConfig,
};
pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;
