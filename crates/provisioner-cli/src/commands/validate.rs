//! Validate command

use std::path::PathBuf;

use clap::Args;
use provisioner_schema::{ClusterConfig, Format, RuntimeConfig};
use tracing::info;

use super::read_config;
use crate::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Runtime config file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Input format, overriding the file extension
    #[arg(long)]
    pub format: Option<Format>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let config = read_config(&args.file, args.format)?;
    config.validate()?;

    for line in summary(&config) {
        println!("{line}");
    }
    info!(file = %args.file.display(), "runtime config is valid");
    Ok(())
}

/// Human-readable summary lines for a valid config
fn summary(config: &RuntimeConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(cluster) = &config.cluster_config {
        lines.push(format!("Cluster:  {}", cluster.kind()));
        if let Some(name) = cluster.name() {
            lines.push(format!("Name:     {name}"));
        }
        if let Some(version) = cluster.kubernetes_version() {
            lines.push(format!("K8s:      {version}"));
        }
        if let ClusterConfig::Gardener(gardener) = cluster {
            if let Some(provider) = gardener.provider_type() {
                lines.push(format!("Provider: {provider}"));
            }
        }
    }
    if let Some(version) = config.kyma_version() {
        lines.push(format!("Kyma:     {version}"));
    }
    lines
}
