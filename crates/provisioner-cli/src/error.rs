//! Error types for the CLI

use std::path::PathBuf;

/// CLI Result type
pub type Result<T> = std::result::Result<T, Error>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] provisioner_schema::Error),

    #[error("cannot tell format of {path}, pass --format json|yaml")]
    UnknownFormat { path: PathBuf },
}
