//! Convert command

use std::path::PathBuf;

use clap::Args;
use provisioner_schema::Format;
use tracing::info;

use super::read_config;
use crate::Result;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Runtime config file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Input format, overriding the file extension
    #[arg(long)]
    pub format: Option<Format>,

    /// Output format
    #[arg(long)]
    pub to: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let config = read_config(&args.file, args.format)?;
    let document = args.to.encode(&config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &document)?;
            info!(output = %path.display(), format = %args.to, "wrote runtime config");
        }
        None => print!("{document}"),
    }
    Ok(())
}
