use std::fs;

use anyhow::{Context, Result};
use polynet::NetworkConfig;

use crate::cli::NetworkOptions;

/// Loads the configuration file, if any, and applies command-line overrides.
pub fn build_network_config(opts: &NetworkOptions) -> Result<NetworkConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
            NetworkConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid configuration: {}", path.display()))?
        }
        None => NetworkConfig::default(),
    };

    if let Some(boundary) = opts.boundary {
        config.boundary = boundary.into();
    }
    if let Some(box_size) = opts.box_size {
        config.box_size = box_size;
    }
    if let Some(radius) = opts.radius {
        config.search_radius = radius;
    }
    if let Some(links) = opts.links {
        config.link_mode = links.into();
    }
    if let Some(threshold) = opts.small_threshold {
        config.small_junction_threshold = threshold;
    }

    config.validate().context("Invalid network options")?;
    Ok(config)
}
