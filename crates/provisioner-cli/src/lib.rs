//! Provisioner CLI library

pub mod commands;
pub mod error;

pub use error::{Error, Result};

use clap::{Parser, Subcommand};

/// Provisioner - runtime config tooling
#[derive(Parser, Debug)]
#[command(name = "provisioner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a runtime config decodes and is usable for provisioning
    Validate(commands::validate::ValidateArgs),
    /// Re-encode a runtime config in another format
    Convert(commands::convert::ConvertArgs),
}

impl Cli {
    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Validate(args) => commands::validate::run(args),
            Commands::Convert(args) => commands::convert::run(args),
        }
    }
}
