//! Configuration for the junction pipeline.
//!
//! [`NetworkConfig`] gathers every knob the pipeline accepts. It can be
//! built in code, starting from [`Default`], or loaded from a TOML document:
//!
//! ```
//! use polynet::{Boundary, LinkMode, NetworkConfig};
//!
//! let config = NetworkConfig::from_toml_str(
//!     r#"
//!     boundary = "npbc"
//!     box_size = 32.0
//!     link_mode = "far-linear"
//!     "#,
//! )?;
//!
//! assert_eq!(config.boundary, Boundary::NonPeriodic);
//! assert_eq!(config.link_mode, LinkMode::FarLinear);
//! assert_eq!(config.search_radius, 1.5);
//! # Ok::<(), polynet::NetworkError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::Error;

/// Boundary conditions of the simulation box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// Minimum-image distances on a cubic periodic box.
    #[default]
    #[serde(alias = "pbc")]
    Periodic,
    /// Plain Euclidean distances.
    #[serde(alias = "npbc")]
    NonPeriodic,
}

impl Boundary {
    #[inline]
    pub fn is_periodic(&self) -> bool {
        matches!(self, Boundary::Periodic)
    }
}

impl FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" | "pbc" => Ok(Boundary::Periodic),
            "non-periodic" | "nonperiodic" | "npbc" => Ok(Boundary::NonPeriodic),
            _ => Err(Error::UnknownBoundary(s.to_string())),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Periodic => write!(f, "periodic"),
            Boundary::NonPeriodic => write!(f, "non-periodic"),
        }
    }
}

/// Strategy used to find the junction on the other side of a backbone bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkMode {
    /// Only the immediate backbone neighbors `p-1` and `p+1`.
    Immediate,
    /// Immediate neighbors; a neighbor inside the same junction ends the
    /// search in that direction.
    #[default]
    Linear,
    /// Walk outward along the chain past sites of the same junction until
    /// a different junction or the chain terminus is reached.
    FarLinear,
}

impl FromStr for LinkMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(LinkMode::Immediate),
            "linear" => Ok(LinkMode::Linear),
            "far-linear" | "far_linear" | "farlinear" => Ok(LinkMode::FarLinear),
            _ => Err(Error::UnknownLinkMode(s.to_string())),
        }
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkMode::Immediate => write!(f, "immediate"),
            LinkMode::Linear => write!(f, "linear"),
            LinkMode::FarLinear => write!(f, "far-linear"),
        }
    }
}

/// Main configuration for junction construction and classification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Boundary conditions used by every distance computation.
    pub boundary: Boundary,

    /// Edge length of the cubic simulation box.
    pub box_size: f64,

    /// Binding sites closer than this are merged into one junction.
    pub search_radius: f64,

    /// Backbone scan used to link junctions.
    pub link_mode: LinkMode,

    /// Junctions with a mass below this value are small.
    pub small_junction_threshold: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            boundary: Boundary::Periodic,
            box_size: 48.0,
            search_radius: 1.5,
            link_mode: LinkMode::Linear,
            small_junction_threshold: 3,
        }
    }
}

impl NetworkConfig {
    /// Parses a TOML document; missing keys keep their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let config: NetworkConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every numeric parameter is in range.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.box_size.is_finite() && self.box_size > 0.0) {
            return Err(Error::invalid_parameter(
                "box_size",
                self.box_size,
                "must be a positive number",
            ));
        }
        if !(self.search_radius.is_finite() && self.search_radius > 0.0) {
            return Err(Error::invalid_parameter(
                "search_radius",
                self.search_radius,
                "must be a positive number",
            ));
        }
        if self.small_junction_threshold == 0 {
            return Err(Error::invalid_parameter(
                "small_junction_threshold",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = NetworkConfig::default();
        assert_eq!(config.boundary, Boundary::Periodic);
        assert_eq!(config.box_size, 48.0);
        assert_eq!(config.search_radius, 1.5);
        assert_eq!(config.link_mode, LinkMode::Linear);
        assert_eq!(config.small_junction_threshold, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn boundary_from_str_accepts_short_names() {
        assert_eq!("pbc".parse::<Boundary>().unwrap(), Boundary::Periodic);
        assert_eq!("NPBC".parse::<Boundary>().unwrap(), Boundary::NonPeriodic);
        assert_eq!(
            "non-periodic".parse::<Boundary>().unwrap(),
            Boundary::NonPeriodic
        );
    }

    #[test]
    fn unknown_boundary_is_rejected() {
        let err = "helical".parse::<Boundary>().unwrap_err();
        assert!(matches!(err, Error::UnknownBoundary(ref s) if s == "helical"));
    }

    #[test]
    fn link_mode_from_str() {
        assert_eq!("far-linear".parse::<LinkMode>().unwrap(), LinkMode::FarLinear);
        assert_eq!("Immediate".parse::<LinkMode>().unwrap(), LinkMode::Immediate);
        assert!(matches!(
            "zigzag".parse::<LinkMode>(),
            Err(Error::UnknownLinkMode(_))
        ));
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = NetworkConfig::from_toml_str(
            r#"
            boundary = "non-periodic"
            search_radius = 2.0
            small_junction_threshold = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.boundary, Boundary::NonPeriodic);
        assert_eq!(config.search_radius, 2.0);
        assert_eq!(config.small_junction_threshold, 4);
        assert_eq!(config.box_size, 48.0);
    }

    #[test]
    fn toml_with_unknown_boundary_fails() {
        let err = NetworkConfig::from_toml_str(r#"boundary = "twisted""#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn non_positive_box_is_invalid() {
        let config = NetworkConfig {
            box_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "box_size", .. })
        ));
    }

    #[test]
    fn zero_threshold_is_invalid() {
        let err = NetworkConfig::from_toml_str("small_junction_threshold = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "small_junction_threshold",
                ..
            }
        ));
    }
}
