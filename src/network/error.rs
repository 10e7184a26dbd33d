//! Error types for junction-network construction.
//!
//! Only structural misconfiguration surfaces as an error. Data
//! inconsistencies inside a snapshot (missing backbone sites, uneven chain
//! lengths) are logged and absorbed by the pipeline stages instead.

use thiserror::Error;

/// Errors that can occur while building a junction network.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse a TOML configuration document.
    #[error("failed to parse network configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The boundary mode is neither periodic nor non-periodic.
    #[error(
        "boundaries of type '{0}' are not understood, use 'periodic' (pbc) or 'non-periodic' (npbc)"
    )]
    UnknownBoundary(String),

    /// The link mode is not one of the supported backbone scans.
    #[error("unknown link mode '{0}', use 'immediate', 'linear' or 'far-linear'")]
    UnknownLinkMode(String),

    /// A numeric configuration value is out of its valid range.
    #[error("invalid value {value} for '{name}': {detail}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the accepted range.
        detail: &'static str,
    },
}

impl Error {
    /// Creates an [`InvalidParameter`](Error::InvalidParameter) error.
    pub fn invalid_parameter(name: &'static str, value: f64, detail: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            detail,
        }
    }
}
