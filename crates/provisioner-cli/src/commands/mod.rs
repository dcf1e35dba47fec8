//! CLI commands

use std::path::Path;

use provisioner_schema::{Format, RuntimeConfig};
use tracing::debug;

use crate::{Error, Result};

pub mod convert;
pub mod validate;

/// Read and decode a runtime config file.
///
/// The format comes from `format` if given, else from the file extension.
pub fn read_config(path: &Path, format: Option<Format>) -> Result<RuntimeConfig> {
    let format = match format.or_else(|| Format::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(Error::UnknownFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), %format, "reading runtime config");
    Ok(format.decode(&content)?)
}
