mod classify;
mod components;
mod config;
mod error;
mod links;
mod merge;
pub mod metric;
mod neighbors;
mod spatial;

pub use classify::{DEFAULT_SMALL_THRESHOLD, classify};
pub use components::{component_sizes, label_components, main_component};
pub use config::{Boundary, LinkMode, NetworkConfig};
pub use error::Error;
pub use links::{SiteIndex, resolve_links};
pub use merge::{DisjointSet, merge_sites};
pub use metric::Metric;
pub use neighbors::{Neighbor, NeighborTable, brute_force_search, neighbor_search};

use log::debug;

use crate::graph::{EdgeList, MultiGraph, average_clustering};
use crate::model::junction::{Junction, JunctionRecord};
use crate::model::snapshot::Snapshot;

/// Runs the full junction pipeline on one snapshot.
///
/// The stages run in order: neighbor search, site merging, backbone link
/// discovery, component labeling and classification.
pub fn build_network(snapshot: &Snapshot, config: &NetworkConfig) -> Result<Network, Error> {
    config.validate()?;

    let metric = Metric::new(config.boundary, config.box_size);

    let neighbors = neighbor_search(&snapshot.sites, config.search_radius, &metric);

    let mut junctions = merge_sites(&snapshot.sites, &neighbors);

    resolve_links(
        &mut junctions,
        &snapshot.sites,
        snapshot.chain_length,
        &metric,
        config.link_mode,
    );

    let component_count = label_components(&mut junctions);

    classify(&mut junctions, config.small_junction_threshold);

    debug!(
        "built network of {} junctions from {} sites",
        junctions.len(),
        snapshot.site_count()
    );

    Ok(Network {
        junctions,
        component_count,
    })
}

/// Junctions of one snapshot after the pipeline has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    pub junctions: Vec<Junction>,
    pub component_count: usize,
}

impl Network {
    #[inline]
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Junction> {
        self.junctions.iter().find(|j| j.id == id)
    }

    pub fn records(&self) -> Vec<JunctionRecord> {
        self.junctions.iter().map(JunctionRecord::from).collect()
    }

    pub fn small_count(&self) -> usize {
        self.junctions.iter().filter(|j| j.small).count()
    }

    pub fn bridge_count(&self) -> usize {
        self.junctions.iter().filter(|j| j.bridge).count()
    }

    pub fn edge_list(&self, include_small: bool) -> EdgeList {
        EdgeList::from_junctions(&self.junctions, include_small)
    }

    pub fn graph(&self, include_small: bool) -> MultiGraph {
        MultiGraph::from_edge_list(&self.edge_list(include_small))
    }

    /// Average multigraph clustering coefficient.
    pub fn average_clustering(&self, include_small: bool) -> f64 {
        average_clustering(&self.graph(include_small))
    }

    /// Average classical clustering coefficient, parallel links collapsed.
    pub fn average_simple_clustering(&self, include_small: bool) -> f64 {
        average_clustering(&self.graph(include_small).simple())
    }

    pub fn component_sizes(&self) -> Vec<usize> {
        component_sizes(&self.junctions)
    }

    pub fn main_component(&self) -> Option<usize> {
        main_component(&self.junctions)
    }

    /// The junctions of one component, with their original ids.
    pub fn restrict_to_component(&self, component: usize) -> Network {
        let junctions: Vec<Junction> = self
            .junctions
            .iter()
            .filter(|j| j.component == Some(component))
            .cloned()
            .collect();
        let component_count = usize::from(!junctions.is_empty());
        Network {
            junctions,
            component_count,
        }
    }

    pub fn main_network(&self) -> Option<Network> {
        self.main_component()
            .map(|component| self.restrict_to_component(component))
    }

    /// Headline numbers of the network.
    ///
    /// Clustering averages are taken over the main component with small
    /// non-bridge junctions left out.
    pub fn summary(&self) -> NetworkSummary {
        let main = self.main_network().unwrap_or_default();
        NetworkSummary {
            junctions: self.len(),
            small_junctions: self.small_count(),
            bridges: self.bridge_count(),
            components: self.component_count,
            main_component_size: main.len(),
            average_clustering: main.average_clustering(false),
            average_simple_clustering: main.average_simple_clustering(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkSummary {
    pub junctions: usize,
    pub small_junctions: usize,
    pub bridges: usize,
    pub components: usize,
    pub main_component_size: usize,
    pub average_clustering: f64,
    pub average_simple_clustering: f64,
}
