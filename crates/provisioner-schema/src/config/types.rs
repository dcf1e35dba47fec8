//! Supporting types shared by the cluster config variants

use std::net::IpAddr;

/// Cloud providers a Gardener cluster can run on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderType {
    /// Microsoft Azure
    Azure,
    /// Google Cloud Platform
    Gcp,
    /// Amazon Web Services
    Aws,
}

impl ProviderType {
    /// All known providers, in the order they are listed in error messages
    pub const ALL: [ProviderType; 3] = [Self::Azure, Self::Gcp, Self::Aws];

    /// Returns true if this is a valid provider type string
    pub fn is_valid(s: &str) -> bool {
        s.parse::<ProviderType>().is_ok()
    }

    /// Canonical lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Gcp => "gcp",
            Self::Aws => "aws",
        }
    }
}

impl std::str::FromStr for ProviderType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "azure" => Ok(Self::Azure),
            "gcp" => Ok(Self::Gcp),
            "aws" => Ok(Self::Aws),
            _ => Err(crate::Error::validation(format!(
                "invalid provider type: {s}, expected one of: azure, gcp, aws"
            ))),
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `field` holds CIDR notation (`10.0.0.0/16`, `fd00::/64`)
pub(crate) fn validate_cidr(field: &str, value: &str) -> crate::Result<()> {
    let invalid = || crate::Error::validation_for_field(field, format!("invalid CIDR: {value}"));

    let (addr, prefix) = value.split_once('/').ok_or_else(invalid)?;
    let addr: IpAddr = addr.parse().map_err(|_| invalid())?;
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;

    let max_prefix = if addr.is_ipv4() { 32 } else { 128 };
    if prefix > max_prefix {
        return Err(invalid());
    }
    Ok(())
}

/// Validate an optional CIDR field, skipping it when absent
pub(crate) fn validate_optional_cidr(field: &str, value: Option<&str>) -> crate::Result<()> {
    match value {
        Some(value) => validate_cidr(field, value),
        None => Ok(()),
    }
}
